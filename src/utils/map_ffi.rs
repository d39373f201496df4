// ============================================================================
// MAP FFI - Foreign Function Interface hacia el widget Leaflet
// ============================================================================
// Solo wrappers para funciones JS (assets/map.js) - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initLeafletMap)]
    pub fn init_leaflet_map(container_id: &str, tile_url: &str, is_dark: bool, region_json: &str);

    #[wasm_bindgen(js_name = setMapRegion)]
    pub fn set_map_region(region_json: &str);

    #[wasm_bindgen(js_name = renderMapMarkers)]
    pub fn render_map_markers(markers_json: &str);

    #[wasm_bindgen(js_name = showUserLocation)]
    pub fn show_user_location(latitude: f64, longitude: f64);

    #[wasm_bindgen(js_name = destroyLeafletMap)]
    pub fn destroy_leaflet_map();
}
