//! Round-trip de Region a través del boundary JS, el mismo camino que
//! recorre el detail del CustomEvent `regionchanged`.

#![cfg(target_arch = "wasm32")]

use geopin_pwa::models::Region;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn region_round_trips_through_js_value() {
    let region = Region {
        latitude: -31.42,
        longitude: -64.19,
        latitude_delta: 0.01,
        longitude_delta: 0.01,
    };

    let js = serde_wasm_bindgen::to_value(&region).unwrap();
    let back: Region = serde_wasm_bindgen::from_value(js).unwrap();
    assert_eq!(back, region);
}
