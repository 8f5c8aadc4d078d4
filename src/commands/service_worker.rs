//! Offline Cache
//!
//! Registers `sw.js`, which keeps map tiles and the app shell cached and
//! answers weather requests with an offline body when the network is gone.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use super::{js_err, window};

pub const SERVICE_WORKER_SCRIPT: &str = "./sw.js";

pub async fn register_service_worker() -> Result<(), String> {
    let navigator = window()?.navigator();
    // Missing outside secure contexts
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        return Err("service workers not supported".to_string());
    }
    JsFuture::from(navigator.service_worker().register(SERVICE_WORKER_SCRIPT))
        .await
        .map_err(js_err)?;
    Ok(())
}
