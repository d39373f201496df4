// ============================================================================
// USE LOCATION HOOK - Permission Gate + fetch de ubicación
// ============================================================================
// Hook nativo de Yew - estado local de la pantalla, sin store global
// ============================================================================

use web_sys::window;
use yew::prelude::*;

use crate::models::{GeoPoint, PermissionStatus};
use crate::services::geolocation::{current_position, FetchPolicy, LocationError};
use crate::services::permissions::request_location_permission;
use crate::state::location::{LocationPhase, LocationTracker};

/// Handle del hook
#[derive(Clone)]
pub struct UseLocationHandle {
    pub tracker: UseStateHandle<LocationTracker>,
    /// Re-fetch manual; ignorado mientras hay un request en vuelo
    pub refresh: Callback<()>,
}

impl UseLocationHandle {
    pub fn user_location(&self) -> Option<GeoPoint> {
        self.tracker.user_location()
    }

    pub fn is_requesting(&self) -> bool {
        self.tracker.is_requesting()
    }

    pub fn phase(&self) -> LocationPhase {
        self.tracker.phase().clone()
    }
}

/// Gate de permiso + fetch de posición según `policy`. Con
/// `alert_on_failure` los fallos levantan un alert además del log
/// (la pantalla rápida solo loguea).
#[hook]
pub fn use_location(policy: FetchPolicy, alert_on_failure: bool) -> UseLocationHandle {
    let tracker = use_state(LocationTracker::new);

    // Gate + primer fetch al montar
    {
        let tracker = tracker.clone();
        use_effect_with((), move |_| {
            spawn_fetch(tracker, policy, alert_on_failure);
            || ()
        });
    }

    let refresh = {
        let tracker = tracker.clone();
        Callback::from(move |_| {
            spawn_fetch(tracker.clone(), policy, alert_on_failure);
        })
    };

    UseLocationHandle { tracker, refresh }
}

fn spawn_fetch(tracker: UseStateHandle<LocationTracker>, policy: FetchPolicy, alert_on_failure: bool) {
    let mut machine = (*tracker).clone();
    if !machine.begin_request() {
        log::warn!("⚠️ Fetch de ubicación ignorado (en vuelo o permiso denegado)");
        return;
    }
    tracker.set(machine.clone());

    wasm_bindgen_futures::spawn_local(async move {
        match request_location_permission().await {
            PermissionStatus::Denied => {
                log::warn!("🚫 Permission to access location was denied");
                machine.deny_permission();
                tracker.set(machine);
                if alert_on_failure {
                    alert("Permiso denegado: no se puede acceder a la ubicación sin permisos.");
                }
            }
            PermissionStatus::Granted => match current_position(policy).await {
                Ok(point) => {
                    log::info!(
                        "📍 Ubicación obtenida: ({}, {})",
                        point.latitude,
                        point.longitude
                    );
                    machine.resolve(point);
                    tracker.set(machine);
                }
                Err(LocationError::PermissionDenied) => {
                    // El usuario rechazó el prompt runtime del navegador
                    log::warn!("🚫 Permission to access location was denied");
                    machine.deny_permission();
                    tracker.set(machine);
                    if alert_on_failure {
                        alert("Permiso denegado: no se puede acceder a la ubicación sin permisos.");
                    }
                }
                Err(err) => {
                    log::error!("❌ Error obteniendo ubicación: {}", err);
                    machine.fail(err);
                    tracker.set(machine);
                    if alert_on_failure {
                        alert("Error: no se pudo obtener la ubicación.");
                    }
                }
            },
        }
    });
}

fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
