use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::models::{GeoPoint, Region};
use crate::utils::constants::MAP_CONTAINER_ID;
use crate::utils::map_ffi::destroy_leaflet_map;
use crate::viewmodels::{MapPin, MapViewModel};

#[derive(Properties, PartialEq)]
pub struct MapContainerProps {
    /// Viewport activo del widget
    pub region: Region,
    #[prop_or_default]
    pub pins: Vec<MapPin>,
    /// Pin "estás acá"
    #[prop_or_default]
    pub user_location: Option<GeoPoint>,
    /// Región re-emitida cuando el usuario termina de panear/zoomear
    #[prop_or_default]
    pub on_region_change: Callback<Region>,
}

#[function_component(MapContainer)]
pub fn map_container(props: &MapContainerProps) -> Html {
    let initialized = use_state(|| false);

    // Inicializar el widget al montar, con un pequeño delay para que el
    // contenedor ya tenga layout
    {
        let initialized = initialized.clone();
        let region = props.region;
        let user_location = props.user_location;
        use_effect_with((), move |_| {
            Timeout::new(100, move || {
                MapViewModel::initialize_map(MAP_CONTAINER_ID, region);
                if let Some(point) = user_location {
                    MapViewModel::place_user_pin(point);
                }
                initialized.set(true);
            })
            .forget();

            // Limpiar el widget al desmontar (cambio de pantalla)
            || destroy_leaflet_map()
        });
    }

    // Binding en el otro sentido: escuchar regionchanged del glue JS
    {
        let on_region_change = props.on_region_change.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(custom) = event.dyn_ref::<web_sys::CustomEvent>() {
                    match serde_wasm_bindgen::from_value::<Region>(custom.detail()) {
                        Ok(region) => on_region_change.emit(region),
                        Err(err) => {
                            log::error!("❌ Payload de regionchanged inválido: {:?}", err)
                        }
                    }
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            let window = web_sys::window();
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback(
                    "regionchanged",
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(win) = window {
                    let _ = win.remove_event_listener_with_callback(
                        "regionchanged",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Sincronizar el viewport cuando cambia la región
    {
        let ready = *initialized;
        use_effect_with((props.region, ready), move |(region, ready)| {
            if *ready {
                MapViewModel::sync_region(*region);
            }
            || ()
        });
    }

    // Actualizar pins cuando cambian
    {
        let ready = *initialized;
        use_effect_with((props.pins.clone(), ready), move |(pins, ready)| {
            if *ready {
                MapViewModel::update_map_pins(pins.clone());
            }
            || ()
        });
    }

    // Actualizar el pin del usuario cuando cambia
    {
        let ready = *initialized;
        use_effect_with(
            (props.user_location, ready),
            move |(user_location, ready)| {
                if *ready {
                    if let Some(point) = user_location {
                        MapViewModel::place_user_pin(*point);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div id={MAP_CONTAINER_ID} class="map-container"></div>
    }
}
