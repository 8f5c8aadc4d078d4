//! Notifications
//!
//! Permission-gated system notifications.

use escala_core::notify::Alert;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, NotificationPermission};

use super::{js_err, window};

pub fn notifications_supported() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("Notification")).unwrap_or(false))
        .unwrap_or(false)
}

pub fn permission_granted() -> bool {
    notifications_supported() && Notification::permission() == NotificationPermission::Granted
}

/// Ask for permission; `Ok(false)` when the user declines
pub async fn request_permission() -> Result<bool, String> {
    if !notifications_supported() {
        return Err("notifications not supported".to_string());
    }
    if permission_granted() {
        return Ok(true);
    }
    let promise = Notification::request_permission().map_err(js_err)?;
    let answer = JsFuture::from(promise).await.map_err(js_err)?;
    Ok(answer.as_string().as_deref() == Some("granted"))
}

pub fn show_notification(alert: &Alert) -> Result<(), String> {
    if !permission_granted() {
        return Err("notification permission not granted".to_string());
    }
    let options = NotificationOptions::new();
    options.set_body(&alert.body);
    options.set_tag(&alert.entry_id);
    options.set_require_interaction(alert.critical);
    Notification::new_with_options(&alert.title, &options).map(|_| ()).map_err(js_err)
}
