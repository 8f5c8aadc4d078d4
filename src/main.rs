//! Escala Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod markdown;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use tracing::{info, warn, Level};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

fn console_sink(level: &Level, line: &str) {
    let line = JsValue::from_str(line);
    match *level {
        Level::ERROR => console::error_1(&line),
        Level::WARN => console::warn_1(&line),
        Level::INFO => console::info_1(&line),
        _ => console::debug_1(&line),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let logs = session_logger::init(console_sink);
    spawn_local(async {
        match commands::register_service_worker().await {
            Ok(()) => info!(script = commands::SERVICE_WORKER_SCRIPT, "offline cache registered"),
            Err(e) => warn!(error = %e, "offline cache unavailable"),
        }
    });
    mount_to_body(move || view! { <App logs=logs.clone() /> });
}
