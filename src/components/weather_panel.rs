//! Weather Panel Component
//!
//! Daytime hourly strip and five-day outlook, or the offline notice.

use chrono::Local;
use escala_core::weather::{day_label, format_temperature};
use leptos::prelude::*;

use crate::models::WeatherPanel as Panel;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WeatherPanel() -> impl IntoView {
    let store = use_app_store();

    move || match store.weather().get() {
        Panel::Loading => view! { <div class="weather-card loading">"Cargando el tiempo…"</div> }.into_any(),
        Panel::Offline => view! {
            <div class="weather-card offline">
                <span class="weather-offline-icon">"📡"</span>
                <span>"Sin conexión: previsión no disponible"</span>
            </div>
        }
        .into_any(),
        Panel::Ready(data) => {
            let today = Local::now().date_naive();
            let hours = data
                .hourly_window()
                .into_iter()
                .map(|h| {
                    let kind = h.kind();
                    view! {
                        <div class=format!("weather-hour {}", kind.css_class())>
                            <span class="weather-hour-label">{h.hour_label()}</span>
                            <span class="weather-glyph">{kind.glyph()}</span>
                            <span class="weather-temp">{format_temperature(h.temperature)}</span>
                        </div>
                    }
                })
                .collect_view();
            let days = data
                .daily_outlook()
                .iter()
                .map(|d| {
                    let kind = d.kind();
                    view! {
                        <div class=format!("weather-day {}", kind.css_class())>
                            <span class="weather-day-label">{day_label(d.date, today)}</span>
                            <span class="weather-glyph">{kind.glyph()}</span>
                            <span class="weather-range">
                                {format_temperature(d.max)} " / " {format_temperature(d.min)}
                            </span>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div class="weather-card">
                    <div class="weather-hours">{hours}</div>
                    <div class="weather-days">{days}</div>
                </div>
            }
            .into_any()
        }
    }
}
