// ============================================================================
// PERMISSION GATE - Permiso de ubicación en primer plano
// ============================================================================
// Solo la consulta a la API del navegador - la reacción vive en los hooks
// ============================================================================

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::models::PermissionStatus;

/// Resuelve el permiso `geolocation` contra la Permissions API.
///
/// `denied` corta el flujo de ubicación; `granted` y `prompt` dejan avanzar
/// (con `prompt`, el navegador levanta su propio diálogo en el primer
/// getCurrentPosition y un rechazo ahí vuelve como PERMISSION_DENIED).
/// Cualquier error de la API se loguea y se trata como denegación.
pub async fn request_location_permission() -> PermissionStatus {
    match query_permission_state().await {
        Ok(web_sys::PermissionState::Denied) => {
            log::warn!("🚫 Permiso de ubicación denegado");
            PermissionStatus::Denied
        }
        Ok(state) => {
            log::info!("✅ Permiso de ubicación: {:?}", state);
            PermissionStatus::Granted
        }
        Err(err) => {
            log::error!("❌ Error consultando la Permissions API: {:?}", err);
            PermissionStatus::Denied
        }
    }
}

async fn query_permission_state() -> Result<web_sys::PermissionState, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let permissions = window.navigator().permissions()?;

    let descriptor = js_sys::Object::new();
    Reflect::set(
        &descriptor,
        &JsValue::from_str("name"),
        &JsValue::from_str("geolocation"),
    )?;

    let status = JsFuture::from(permissions.query(&descriptor)?).await?;
    let status: web_sys::PermissionStatus = status.unchecked_into();
    Ok(status.state())
}
