// ============================================================================
// GEOLOCATION SERVICE - Fetch de posición contra la API del navegador
// ============================================================================
// Solo el boundary call - Sin estado, sin lógica de UI
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::GeoPoint;

/// Opciones del fetch de posición (espejo de PositionOptions del navegador)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchPolicy {
    pub high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl FetchPolicy {
    /// Pantalla rápida: un solo fetch, sin posiciones cacheadas
    pub const ONE_SHOT: FetchPolicy = FetchPolicy {
        high_accuracy: true,
        timeout_ms: 10_000,
        maximum_age_ms: 0,
    };

    /// Pantalla de marcadores: refresh manual, acepta posiciones de hasta 10s
    pub const MANUAL_REFRESH: FetchPolicy = FetchPolicy {
        high_accuracy: true,
        timeout_ms: 15_000,
        maximum_age_ms: 10_000,
    };
}

/// Error del Location Provider
#[derive(Debug, Clone, PartialEq)]
pub enum LocationError {
    PermissionDenied,
    Unavailable(String),
    Timeout,
    Unsupported,
}

impl std::fmt::Display for LocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationError::PermissionDenied => write!(f, "Location permission denied"),
            LocationError::Unavailable(msg) => write!(f, "Location unavailable: {}", msg),
            LocationError::Timeout => write!(f, "Location request timed out"),
            LocationError::Unsupported => write!(f, "Geolocation is not supported"),
        }
    }
}

impl std::error::Error for LocationError {}

/// Mapea el código de PositionError del navegador a LocationError.
/// Códigos: 1 = PERMISSION_DENIED, 2 = POSITION_UNAVAILABLE, 3 = TIMEOUT.
pub fn classify_position_error(code: u16, message: String) -> LocationError {
    match code {
        1 => LocationError::PermissionDenied,
        3 => LocationError::Timeout,
        _ => LocationError::Unavailable(message),
    }
}

/// Fetch único de la posición actual, envuelto en Promise para poder
/// await-earlo desde el hook.
pub async fn current_position(policy: FetchPolicy) -> Result<GeoPoint, LocationError> {
    let geolocation = web_sys::window()
        .and_then(|w| w.navigator().geolocation().ok())
        .ok_or(LocationError::Unsupported)?;

    let options = web_sys::PositionOptions::new();
    options.set_enable_high_accuracy(policy.high_accuracy);
    options.set_timeout(policy.timeout_ms);
    options.set_maximum_age(policy.maximum_age_ms);

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let on_success = Closure::once_into_js(move |position: web_sys::Position| {
            let _ = resolve.call1(&JsValue::UNDEFINED, &position);
        });

        let reject_on_error = reject.clone();
        let on_error = Closure::once_into_js(move |error: web_sys::PositionError| {
            let _ = reject_on_error.call1(&JsValue::UNDEFINED, &error);
        });

        if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
            on_success.unchecked_ref(),
            Some(on_error.unchecked_ref()),
            &options,
        ) {
            let _ = reject.call1(&JsValue::UNDEFINED, &err);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: web_sys::Position = value.unchecked_into();
            let coords = position.coords();
            Ok(GeoPoint {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            })
        }
        Err(err) => {
            // El reject puede traer un PositionError o un throw de la API
            let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
                .ok()
                .and_then(|v| v.as_f64());
            match code {
                Some(code) => {
                    let error: web_sys::PositionError = err.unchecked_into();
                    Err(classify_position_error(code as u16, error.message()))
                }
                None => Err(LocationError::Unavailable(format!("{:?}", err))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_error_codes_map_to_taxonomy() {
        assert_eq!(
            classify_position_error(1, "denied".into()),
            LocationError::PermissionDenied
        );
        assert_eq!(
            classify_position_error(2, "no fix".into()),
            LocationError::Unavailable("no fix".into())
        );
        assert_eq!(
            classify_position_error(3, "timeout".into()),
            LocationError::Timeout
        );
        // Códigos desconocidos caen en Unavailable
        assert_eq!(
            classify_position_error(7, "weird".into()),
            LocationError::Unavailable("weird".into())
        );
    }

    #[test]
    fn policies_carry_the_configured_bounds() {
        assert_eq!(FetchPolicy::ONE_SHOT.timeout_ms, 10_000);
        assert_eq!(FetchPolicy::ONE_SHOT.maximum_age_ms, 0);
        assert_eq!(FetchPolicy::MANUAL_REFRESH.timeout_ms, 15_000);
        assert_eq!(FetchPolicy::MANUAL_REFRESH.maximum_age_ms, 10_000);
        assert!(FetchPolicy::ONE_SHOT.high_accuracy);
        assert!(FetchPolicy::MANUAL_REFRESH.high_accuracy);
    }
}
