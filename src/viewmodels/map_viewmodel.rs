// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el widget de mapa
// ============================================================================
// SOLO preparación y envío de datos - Sin estado
// ============================================================================

use gloo_timers::callback::Timeout;
use serde::Serialize;

use crate::config::TILE_URL;
use crate::models::{GeoPoint, Marker, Region};
use crate::utils::map_ffi::{
    init_leaflet_map, render_map_markers, set_map_region, show_user_location,
};

/// Pin serializado hacia el widget de mapa
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPin {
    pub id: u32,
    pub label: String,
    pub coords: [f64; 2], // [lat, lng]
}

/// ViewModel del mapa - SOLO lógica de preparación
pub struct MapViewModel;

impl MapViewModel {
    /// Inicializar el widget (detecta dark mode)
    pub fn initialize_map(container_id: &str, region: Region) {
        let is_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|mq| mq.matches())
            .unwrap_or(false);

        log::info!("🗺️ Inicializando mapa (dark mode: {})", is_dark);
        match serde_json::to_string(&region) {
            Ok(json) => init_leaflet_map(container_id, TILE_URL, is_dark, &json),
            Err(_) => log::error!("❌ Error serializando la región inicial"),
        }
    }

    /// Convertir los marcadores del store a pins del mapa
    pub fn prepare_pins(markers: &[Marker]) -> Vec<MapPin> {
        markers
            .iter()
            .map(|marker| MapPin {
                id: marker.id,
                label: marker.label(),
                coords: [marker.position.latitude, marker.position.longitude],
            })
            .collect()
    }

    /// Enviar pins al widget
    pub fn update_map_pins(pins: Vec<MapPin>) {
        match serde_json::to_string(&pins) {
            Ok(json) => {
                log::info!("🗺️ ViewModel: enviando {} pins al mapa", pins.len());
                // Pequeño delay para que el widget termine cualquier layout pendiente
                Timeout::new(100, move || {
                    render_map_markers(&json);
                })
                .forget();
            }
            Err(_) => log::error!("❌ Error serializando pins para el mapa"),
        }
    }

    /// Sincronizar el viewport del widget con la región dada
    pub fn sync_region(region: Region) {
        match serde_json::to_string(&region) {
            Ok(json) => set_map_region(&json),
            Err(_) => log::error!("❌ Error serializando la región"),
        }
    }

    /// Mostrar el pin "estás acá"
    pub fn place_user_pin(point: GeoPoint) {
        show_user_location(point.latitude, point.longitude);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_mirror_markers_in_order() {
        let markers = vec![
            Marker {
                id: 1,
                position: GeoPoint {
                    latitude: -31.421,
                    longitude: -64.187,
                },
            },
            Marker {
                id: 2,
                position: GeoPoint {
                    latitude: -31.419,
                    longitude: -64.190,
                },
            },
        ];

        let pins = MapViewModel::prepare_pins(&markers);
        assert_eq!(pins.len(), 2);
        assert_eq!(pins[0].label, "Marker 1");
        assert_eq!(pins[0].coords, [-31.421, -64.187]);
        assert_eq!(pins[1].label, "Marker 2");
        assert_eq!(pins[1].coords, [-31.419, -64.190]);
    }

    #[test]
    fn empty_store_yields_no_pins() {
        assert!(MapViewModel::prepare_pins(&[]).is_empty());
    }

    #[test]
    fn pin_payload_shape_matches_the_glue() {
        // assets/map.js espera {id, label, coords: [lat, lng]}
        let pins = MapViewModel::prepare_pins(&[Marker {
            id: 1,
            position: GeoPoint {
                latitude: 1.5,
                longitude: -2.5,
            },
        }]);

        let json = serde_json::to_value(&pins).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["label"], "Marker 1");
        assert_eq!(json[0]["coords"][0], 1.5);
        assert_eq!(json[0]["coords"][1], -2.5);
    }
}
