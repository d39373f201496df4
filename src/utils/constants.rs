use crate::models::Region;

/// Región de arranque cuando no hay ubicación (Córdoba, Argentina)
pub const FALLBACK_REGION: Region = Region {
    latitude: -31.4201,
    longitude: -64.1888,
    latitude_delta: 0.0922,
    longitude_delta: 0.0421,
};

/// Deltas de la región derivada de la ubicación del usuario (pantalla de marcadores)
pub const USER_REGION_LAT_DELTA: f64 = 0.01;
pub const USER_REGION_LNG_DELTA: f64 = 0.01;

/// Dispersión total de un marcador aleatorio alrededor del usuario, en grados.
/// El offset resultante queda en ±MARKER_SPREAD/2 por eje.
pub const MARKER_SPREAD: f64 = 0.01;

/// Id del contenedor DOM del widget de mapa
pub const MAP_CONTAINER_ID: &str = "map";
