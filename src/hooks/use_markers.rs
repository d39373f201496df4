// ============================================================================
// USE MARKERS HOOK - Alta y listado de marcadores
// ============================================================================

use web_sys::window;
use yew::prelude::*;

use crate::models::GeoPoint;
use crate::state::markers::{AddMarkerOutcome, MarkerStore};

/// Handle del hook
#[derive(Clone)]
pub struct UseMarkersHandle {
    pub store: UseStateHandle<MarkerStore>,
    /// Alta de un marcador aleatorio cerca de la ubicación dada.
    /// Con `None` no muta nada y avisa al usuario (un aviso por llamada).
    pub add_random: Callback<Option<GeoPoint>>,
}

#[hook]
pub fn use_markers() -> UseMarkersHandle {
    let store = use_state(MarkerStore::new);

    let add_random = {
        let store = store.clone();
        Callback::from(move |origin: Option<GeoPoint>| {
            let mut next = (*store).clone();
            match next.add_random_marker(origin, js_sys::Math::random) {
                AddMarkerOutcome::Added(id) => {
                    log::info!("📍 Marcador {} agregado ({} en total)", id, next.len());
                    store.set(next);
                }
                AddMarkerOutcome::NoLocation => {
                    log::warn!("⚠️ Sin ubicación del usuario, no se agrega marcador");
                    if let Some(win) = window() {
                        let _ = win.alert_with_message(
                            "Ubicación no disponible: no se pudo agregar un marcador porque no se encontró la ubicación del usuario.",
                        );
                    }
                }
            }
        })
    };

    UseMarkersHandle { store, add_random }
}
