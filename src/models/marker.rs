use serde::Serialize;

use super::GeoPoint;

/// Marcador colocado por el usuario. Inmutable una vez creado.
/// `id` es un contador monotónico asignado por el store al crearlo,
/// no la posición en el array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub id: u32,
    pub position: GeoPoint,
}

impl Marker {
    /// Etiqueta visible del pin ("Marker 1", "Marker 2", ...)
    pub fn label(&self) -> String {
        format!("Marker {}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_uses_stable_id() {
        let marker = Marker {
            id: 3,
            position: GeoPoint::default(),
        };
        assert_eq!(marker.label(), "Marker 3");
    }
}
