// ============================================================================
// LOCATION TRACKER - Máquina de estados del Location Provider
// ============================================================================

use crate::models::GeoPoint;
use crate::services::geolocation::LocationError;

/// Fase del fetch de ubicación
#[derive(Debug, Clone, PartialEq)]
pub enum LocationPhase {
    Idle,
    Requesting,
    Resolved(GeoPoint),
    Failed(LocationError),
}

/// Máquina de estados explícita del fetch de ubicación.
///
/// Invariantes:
/// - un solo request en vuelo: `begin_request` rechaza re-entradas
/// - permiso denegado deja la máquina parada: no se inicia ningún fetch más
#[derive(Debug, Clone, PartialEq)]
pub struct LocationTracker {
    phase: LocationPhase,
}

impl LocationTracker {
    pub fn new() -> Self {
        Self {
            phase: LocationPhase::Idle,
        }
    }

    pub fn phase(&self) -> &LocationPhase {
        &self.phase
    }

    /// Intenta iniciar un fetch. Devuelve `false` (sin cambiar de fase) si ya
    /// hay uno en vuelo o si el permiso fue denegado.
    pub fn begin_request(&mut self) -> bool {
        match self.phase {
            LocationPhase::Requesting => false,
            LocationPhase::Failed(LocationError::PermissionDenied) => false,
            _ => {
                self.phase = LocationPhase::Requesting;
                true
            }
        }
    }

    pub fn resolve(&mut self, point: GeoPoint) {
        self.phase = LocationPhase::Resolved(point);
    }

    pub fn fail(&mut self, error: LocationError) {
        self.phase = LocationPhase::Failed(error);
    }

    pub fn deny_permission(&mut self) {
        self.phase = LocationPhase::Failed(LocationError::PermissionDenied);
    }

    /// Ubicación conocida del usuario, si el último fetch resolvió
    pub fn user_location(&self) -> Option<GeoPoint> {
        match &self.phase {
            LocationPhase::Resolved(point) => Some(*point),
            _ => None,
        }
    }

    pub fn is_requesting(&self) -> bool {
        matches!(self.phase, LocationPhase::Requesting)
    }
}

impl Default for LocationTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> GeoPoint {
        GeoPoint {
            latitude: -31.42,
            longitude: -64.19,
        }
    }

    #[test]
    fn happy_path_idle_requesting_resolved() {
        let mut tracker = LocationTracker::new();
        assert_eq!(*tracker.phase(), LocationPhase::Idle);
        assert_eq!(tracker.user_location(), None);

        assert!(tracker.begin_request());
        assert!(tracker.is_requesting());

        tracker.resolve(point());
        assert_eq!(tracker.user_location(), Some(point()));
    }

    #[test]
    fn in_flight_request_rejects_reentry() {
        let mut tracker = LocationTracker::new();
        assert!(tracker.begin_request());
        assert!(!tracker.begin_request());
        assert!(tracker.is_requesting());
    }

    #[test]
    fn permission_denial_halts_the_flow() {
        let mut tracker = LocationTracker::new();
        tracker.deny_permission();

        // Denegado: ningún fetch arranca y nunca hay ubicación
        assert!(!tracker.begin_request());
        assert_eq!(
            *tracker.phase(),
            LocationPhase::Failed(LocationError::PermissionDenied)
        );
        assert_eq!(tracker.user_location(), None);
    }

    #[test]
    fn transient_failure_allows_manual_retry() {
        let mut tracker = LocationTracker::new();
        assert!(tracker.begin_request());
        tracker.fail(LocationError::Timeout);
        assert_eq!(tracker.user_location(), None);

        // Timeout no es terminal: el refresh manual puede reintentar
        assert!(tracker.begin_request());
    }

    #[test]
    fn refresh_after_resolve_is_allowed() {
        let mut tracker = LocationTracker::new();
        assert!(tracker.begin_request());
        tracker.resolve(point());
        assert!(tracker.begin_request());
        assert!(tracker.is_requesting());
    }
}
