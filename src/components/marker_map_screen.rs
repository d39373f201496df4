use yew::prelude::*;

use crate::components::map::MapContainer;
use crate::hooks::{use_location, use_markers};
use crate::models::Region;
use crate::services::geolocation::{FetchPolicy, LocationError};
use crate::state::location::LocationPhase;
use crate::utils::constants::{USER_REGION_LAT_DELTA, USER_REGION_LNG_DELTA};
use crate::viewmodels::MapViewModel;

/// Pantalla 2: región con binding en los dos sentidos, marcadores aleatorios
/// alrededor del usuario y refresh manual de la ubicación.
#[function_component(MarkerMapScreen)]
pub fn marker_map_screen() -> Html {
    let location = use_location(FetchPolicy::MANUAL_REFRESH, true);
    let markers = use_markers();
    // Región activa: indefinida hasta el primer fetch exitoso
    let region = use_state(|| None::<Region>);

    // Derivar la región de cada fetch resuelto (primer fetch y refresh)
    {
        let region = region.clone();
        use_effect_with(location.phase(), move |phase| {
            if let LocationPhase::Resolved(point) = phase {
                region.set(Some(Region::around(
                    *point,
                    USER_REGION_LAT_DELTA,
                    USER_REGION_LNG_DELTA,
                )));
            }
            || ()
        });
    }

    // two-way: el payload del evento pisa la región guardada tal cual
    let on_region_change = {
        let region = region.clone();
        Callback::from(move |new_region: Region| {
            region.set(Some(new_region));
        })
    };

    let on_add_marker = {
        let add_random = markers.add_random.clone();
        let location = location.clone();
        Callback::from(move |_: MouseEvent| {
            add_random.emit(location.user_location());
        })
    };

    let on_refresh = {
        let refresh = location.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let pins = MapViewModel::prepare_pins(markers.store.markers());

    html! {
        <div class="screen">
            {
                match *region {
                    Some(active) => html! {
                        <>
                            <MapContainer
                                region={active}
                                pins={pins}
                                user_location={location.user_location()}
                                on_region_change={on_region_change}
                            />
                            <div class="map-actions">
                                <button class="btn-add-marker" onclick={on_add_marker}>
                                    {"📍 Agregar marcador"}
                                </button>
                                <button
                                    class="btn-refresh"
                                    onclick={on_refresh}
                                    disabled={location.is_requesting()}
                                >
                                    {if location.is_requesting() { "⏳ Ubicando..." } else { "🔄 Actualizar ubicación" }}
                                </button>
                            </div>
                        </>
                    },
                    None => html! {
                        <div class="placeholder">
                            <p>{placeholder_text(&location.phase())}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}

fn placeholder_text(phase: &LocationPhase) -> &'static str {
    match phase {
        LocationPhase::Failed(LocationError::PermissionDenied) => {
            "Permiso de ubicación denegado."
        }
        LocationPhase::Failed(_) => "No se pudo obtener la ubicación.",
        _ => "Obteniendo ubicación...",
    }
}
