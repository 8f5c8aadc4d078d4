//! Guide Panel Component
//!
//! Visit summary, weather, SOS share link and the Catalan phrasebook.

use escala_core::catalog::phrasebook;
use escala_core::map::sos_share_url;
use escala_core::speech::SpeechRequest;
use escala_core::summary::VisitSummary;
use leptos::prelude::*;

use super::WeatherPanel;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn SummaryStat(#[prop(into)] label: String, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="summary-stat">
            <span class="summary-value">{value}</span>
            <span class="summary-label">{label}</span>
        </div>
    }
}

#[component]
pub fn GuidePanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let summary = Memo::new(move |_| {
        let trip = store.trip().read();
        VisitSummary::compute(&trip.itinerary, &store.config().read())
    });
    let sos_url = move || {
        let message = store.config().read().sos_message.clone();
        sos_share_url(&message, store.user_location().read().as_ref())
    };

    let phrases = phrasebook()
        .into_iter()
        .map(|phrase| {
            let request = SpeechRequest::phrase(&phrase);
            let key = request.key.clone();
            let playing = move || store.playback().read().is_playing(&key);
            view! {
                <li class="phrase-row">
                    <div class="phrase-text">
                        <span class="phrase-word">{phrase.word.clone()}</span>
                        <span class="phrase-phonetic">{format!("[{}]", phrase.phonetic)}</span>
                        <span class="phrase-meaning">{format!("{} · {}", phrase.meaning, phrase.simplified)}</span>
                    </div>
                    <button
                        class="speak-btn"
                        class:playing=playing.clone()
                        on:click=move |_| ctx.toggle_speech(request.clone())
                    >
                        {let playing = playing.clone(); move || if playing() { "⏹" } else { "🔊" }}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="guide-panel">
            <h3 class="panel-subtitle">"Resumen de la visita"</h3>
            <div class="summary-grid">
                <SummaryStat label="Tiempo en tierra" value=Signal::derive(move || summary.read().total_label()) />
                <SummaryStat label="Horario" value=Signal::derive(move || summary.read().span_label()) />
                <SummaryStat label="En transporte" value=Signal::derive(move || summary.read().transport_label()) />
                <SummaryStat label="Visitas y paseos" value=Signal::derive(move || summary.read().active_label()) />
                <SummaryStat label="A pie" value=Signal::derive(move || summary.read().walking_label()) />
            </div>
            <p class="guide-note">
                "Domingo en Barcelona: la Boquería y muchas tiendas cierran. Los museos y la Sagrada Família abren con horario normal."
            </p>

            <h3 class="panel-subtitle">"El tiempo"</h3>
            <WeatherPanel />

            <a class="sos-btn" href=sos_url target="_blank" rel="noopener">"🆘 Enviar mi ubicación por WhatsApp"</a>

            <h3 class="panel-subtitle">"Frases en catalán"</h3>
            <ul class="phrasebook">{phrases}</ul>
        </section>
    }
}
