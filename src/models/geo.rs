use serde::{Deserialize, Serialize};

/// Coordenada geográfica
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Viewport del mapa: centro + deltas (equivalente de zoom).
/// Cruza el boundary JS en los dos sentidos: hacia el widget como JSON y
/// de vuelta como detail del CustomEvent `regionchanged`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    /// Región centrada en `center` con los deltas dados
    pub fn around(center: GeoPoint, latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta,
            longitude_delta,
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{
        FALLBACK_REGION, USER_REGION_LAT_DELTA, USER_REGION_LNG_DELTA,
    };

    #[test]
    fn region_around_keeps_center_and_deltas() {
        let center = GeoPoint {
            latitude: -31.42,
            longitude: -64.19,
        };

        let quick = Region::around(
            center,
            FALLBACK_REGION.latitude_delta,
            FALLBACK_REGION.longitude_delta,
        );
        assert_eq!(quick.center(), center);
        assert_eq!(quick.latitude_delta, 0.0922);
        assert_eq!(quick.longitude_delta, 0.0421);

        let user = Region::around(center, USER_REGION_LAT_DELTA, USER_REGION_LNG_DELTA);
        assert_eq!(user.center(), center);
        assert_eq!(user.latitude_delta, 0.01);
        assert_eq!(user.longitude_delta, 0.01);
    }

    #[test]
    fn region_round_trips_through_json() {
        // Mismo shape que el detail de `regionchanged`: guardar y releer
        // devuelve exactamente el mismo valor
        let region = Region {
            latitude: -31.4201,
            longitude: -64.1888,
            latitude_delta: 0.0922,
            longitude_delta: 0.0421,
        };

        let json = serde_json::to_string(&region).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();
        assert_eq!(back, region);
    }
}
