use yew::prelude::*;

use crate::components::map::MapContainer;
use crate::hooks::use_location;
use crate::models::Region;
use crate::services::geolocation::FetchPolicy;
use crate::utils::constants::FALLBACK_REGION;

/// Pantalla 1: mapa centrado en el usuario con un solo fetch.
/// Sin ubicación (permiso denegado, timeout) el mapa igual se muestra,
/// centrado en la región de arranque.
#[function_component(QuickMapScreen)]
pub fn quick_map_screen() -> Html {
    let location = use_location(FetchPolicy::ONE_SHOT, false);

    let region = match location.user_location() {
        Some(point) => Region::around(
            point,
            FALLBACK_REGION.latitude_delta,
            FALLBACK_REGION.longitude_delta,
        ),
        None => FALLBACK_REGION,
    };

    html! {
        <div class="screen">
            <MapContainer
                region={region}
                user_location={location.user_location()}
            />
        </div>
    }
}
