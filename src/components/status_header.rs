//! Status Header Component
//!
//! Port name, onboard countdown, GPS badge and the notification bell.

use escala_core::countdown::{format_countdown, ON_BOARD};
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusHeader() -> impl IntoView {
    let store = use_app_store();

    let countdown = move || {
        let onboard = store.config().read().onboard_time;
        format_countdown(store.clock().get(), onboard)
    };
    let boarding_now = move || countdown() == ON_BOARD;
    let bell_class = move || {
        if store.trip().read().preferences.enabled { "bell-btn active" } else { "bell-btn" }
    };
    let accuracy = move || {
        store
            .user_location()
            .get()
            .and_then(|loc| loc.accuracy)
            .map(|a| format!("±{:.0} m", a))
            .unwrap_or_default()
    };

    view! {
        <header class="status-header">
            <div class="status-title">
                <h1>{move || store.config().read().port_name.clone()}</h1>
                <span class="status-date">{move || store.config().read().date_label.clone()}</span>
            </div>
            <div class="status-countdown" class:boarding=boarding_now>
                <span class="countdown-label">
                    {move || format!("A bordo {}", store.config().read().onboard_time.format("%H:%M"))}
                </span>
                <span class="countdown-value">{countdown}</span>
            </div>
            <Show when=move || store.user_location().read().is_some()>
                <span class="gps-badge" title="Posición GPS activa">"GPS " {accuracy}</span>
            </Show>
            <button
                class=bell_class
                title="Notificaciones"
                on:click=move |_| store.settings_open().set(true)
            >
                "🔔"
            </button>
        </header>
    }
}
