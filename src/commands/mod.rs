//! Browser Capability Wrappers
//!
//! Thin bindings to the platform APIs the app uses, organized by
//! capability. Failures come back as `Result<T, String>`; callers log them
//! and fall back.

mod download;
mod geolocation;
mod leaflet;
mod notify;
mod service_worker;
mod speech;
mod storage;
mod weather;

use wasm_bindgen::JsValue;

/// Readable text for a thrown JS value
fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

// Re-export all public items
pub use download::*;
pub use geolocation::*;
pub use leaflet::*;
pub use notify::*;
pub use service_worker::*;
pub use speech::*;
pub use storage::*;
pub use weather::*;
