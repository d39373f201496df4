// ============================================================================
// MARKER STORE - Secuencia ordenada de marcadores, append-only
// ============================================================================

use crate::models::{GeoPoint, Marker};
use crate::utils::constants::MARKER_SPREAD;

/// Resultado de un intento de alta de marcador
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AddMarkerOutcome {
    Added(u32),
    /// Sin ubicación conocida: no se muta nada; el caller avisa al usuario
    NoLocation,
}

/// Secuencia de marcadores del usuario. Solo crece; los ids los asigna un
/// contador monotónico arrancando en 1.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStore {
    markers: Vec<Marker>,
    next_id: u32,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self {
            markers: Vec::new(),
            next_id: 1,
        }
    }

    /// Alta de un marcador aleatorio cerca de `origin`.
    ///
    /// `sample` devuelve valores en [0, 1) (producción: js_sys::Math::random);
    /// el offset resultante queda en ±MARKER_SPREAD/2 por eje. Con `origin`
    /// en None no se muta nada.
    pub fn add_random_marker<F>(&mut self, origin: Option<GeoPoint>, mut sample: F) -> AddMarkerOutcome
    where
        F: FnMut() -> f64,
    {
        let origin = match origin {
            Some(point) => point,
            None => return AddMarkerOutcome::NoLocation,
        };

        let id = self.next_id;
        self.next_id += 1;

        let position = GeoPoint {
            latitude: origin.latitude + (sample() - 0.5) * MARKER_SPREAD,
            longitude: origin.longitude + (sample() - 0.5) * MARKER_SPREAD,
        };

        self.markers.push(Marker { id, position });
        AddMarkerOutcome::Added(id)
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: GeoPoint = GeoPoint {
        latitude: -31.42,
        longitude: -64.19,
    };

    #[test]
    fn without_location_nothing_is_appended() {
        let mut store = MarkerStore::new();
        let outcome = store.add_random_marker(None, || 0.5);

        assert_eq!(outcome, AddMarkerOutcome::NoLocation);
        assert!(store.is_empty());
    }

    #[test]
    fn markers_stay_within_half_spread_of_origin() {
        let mut store = MarkerStore::new();

        // Muestras extremas incluidas: 0.0 y 1.0 dan exactamente ±0.005
        let samples = [0.0, 1.0, 0.25, 0.75, 0.5, 0.999, 0.001, 0.5, 0.1, 0.9];
        let mut cursor = samples.iter().cycle().copied();

        for _ in 0..5 {
            store.add_random_marker(Some(ORIGIN), || cursor.next().unwrap());
        }

        assert_eq!(store.len(), 5);
        for marker in store.markers() {
            assert!((marker.position.latitude - ORIGIN.latitude).abs() <= MARKER_SPREAD / 2.0);
            assert!((marker.position.longitude - ORIGIN.longitude).abs() <= MARKER_SPREAD / 2.0);
        }
    }

    #[test]
    fn labels_follow_insertion_order() {
        let mut store = MarkerStore::new();
        for _ in 0..4 {
            store.add_random_marker(Some(ORIGIN), || 0.5);
        }

        let labels: Vec<String> = store.markers().iter().map(|m| m.label()).collect();
        assert_eq!(labels, ["Marker 1", "Marker 2", "Marker 3", "Marker 4"]);
    }

    #[test]
    fn ids_are_stable_and_monotonic() {
        let mut store = MarkerStore::new();

        assert_eq!(
            store.add_random_marker(Some(ORIGIN), || 0.5),
            AddMarkerOutcome::Added(1)
        );
        // Un intento fallido en el medio no consume ids
        assert_eq!(
            store.add_random_marker(None, || 0.5),
            AddMarkerOutcome::NoLocation
        );
        assert_eq!(
            store.add_random_marker(Some(ORIGIN), || 0.5),
            AddMarkerOutcome::Added(2)
        );

        let ids: Vec<u32> = store.markers().iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn centered_sample_lands_on_origin() {
        let mut store = MarkerStore::new();
        store.add_random_marker(Some(ORIGIN), || 0.5);

        let marker = &store.markers()[0];
        assert_eq!(marker.position, ORIGIN);
    }
}
