//! Notification Settings Modal Component
//!
//! Master switch (asks for permission), per-category toggles, lead time,
//! and the recent session log for troubleshooting.

use escala_core::domain::LEAD_TIME_CHOICES;
use escala_core::Action;
use leptos::prelude::*;
use session_logger::LogBuffer;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

const LOG_TAIL: usize = 30;

#[component]
pub fn NotificationSettings() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let logs = use_context::<LogBuffer>();

    let prefs = move || store.trip().read().preferences.clone();
    let close = move |_| store.settings_open().set(false);
    let (log_tail, set_log_tail) = signal(String::new());
    let refresh_log = move |_| {
        if let Some(logs) = &logs {
            let lines = logs.lines();
            let start = lines.len().saturating_sub(LOG_TAIL);
            set_log_tail.set(lines[start..].join("\n"));
        }
    };

    view! {
        <Show when=move || store.settings_open().get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal settings-modal" on:click=|ev| ev.stop_propagation()>
                    <header class="modal-header">
                        <h2>"🔔 Avisos"</h2>
                        <button class="modal-close" on:click=close>"×"</button>
                    </header>

                    <label class="toggle-row">
                        <input
                            type="checkbox"
                            prop:checked=move || prefs().enabled
                            on:change=move |ev| ctx.set_notifications_enabled(event_target_checked(&ev))
                        />
                        <span>"Activar notificaciones"</span>
                    </label>

                    <fieldset class="settings-group" prop:disabled=move || !prefs().enabled>
                        <label class="toggle-row">
                            <input
                                type="checkbox"
                                prop:checked=move || prefs().activity_alerts
                                on:change=move |ev| ctx.dispatch(Action::SetActivityAlerts(event_target_checked(&ev)))
                            />
                            <span>"Actividades"</span>
                        </label>
                        <label class="toggle-row">
                            <input
                                type="checkbox"
                                prop:checked=move || prefs().critical_alerts
                                on:change=move |ev| ctx.dispatch(Action::SetCriticalAlerts(event_target_checked(&ev)))
                            />
                            <span>"Horas críticas (embarque)"</span>
                        </label>
                        <label class="select-row">
                            <span>"Avisar con antelación"</span>
                            <select
                                prop:value=move || prefs().minutes_before.to_string()
                                on:change=move |ev| {
                                    if let Ok(minutes) = event_target_value(&ev).parse::<u32>() {
                                        ctx.dispatch(Action::SetLeadTime(minutes));
                                    }
                                }
                            >
                                {LEAD_TIME_CHOICES
                                    .into_iter()
                                    .map(|m| view! { <option value=m.to_string()>{format!("{} min", m)}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                    </fieldset>

                    <details class="session-log" on:toggle=refresh_log.clone()>
                        <summary>"Registro de la sesión"</summary>
                        <pre>{move || log_tail.get()}</pre>
                    </details>
                </div>
            </div>
        </Show>
    }
}
