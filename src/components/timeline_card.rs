//! Timeline Card Component
//!
//! One itinerary entry: time window, kind, locations, details, price,
//! contingency note and the action row.

use escala_core::domain::{format_distance, EntryStatus, ItineraryEntry};
use escala_core::map::navigation_url;
use escala_core::Action;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::markdown::render_inline;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TimelineCard(entry: ItineraryEntry, status: EntryStatus) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = entry.id.clone();
    let coords = entry.coords;
    let nav_url = navigation_url(&entry);
    let card_class = format!(
        "timeline-card kind-{} {}{}",
        entry.kind.as_str(),
        status.css_class(),
        if entry.critical { " critical" } else { "" }
    );
    let distance = move || {
        store
            .user_location()
            .get()
            .map(|loc| format!("a {}", format_distance(loc.coords.distance_to(&coords))))
    };

    let locations = match &entry.end_location_name {
        Some(end) => format!("{} → {}", entry.location_name, end),
        None => entry.location_name.clone(),
    };
    let description = render_inline(&entry.description);
    let details = (!entry.key_details.is_empty()).then(|| render_inline(&entry.key_details));
    let price = entry.price.is_positive().then(|| entry.price.to_string());
    let has_guide = entry.has_audio_guide();

    let toggle_id = id.clone();
    let guide_id = id.clone();

    view! {
        <article class=card_class>
            <div class="card-time">
                <span class="card-window">{entry.time_window()}</span>
                <span class="card-kind">{entry.kind.label()}</span>
                {entry.critical.then(|| view! { <span class="card-critical">"⚠️ Crítico"</span> })}
                {(status == EntryStatus::InProgress).then(|| view! { <span class="card-live">"En curso"</span> })}
                {(status == EntryStatus::Next).then(|| view! { <span class="card-next">"Siguiente"</span> })}
            </div>
            <h3 class="card-title">{entry.title.clone()}</h3>
            <p class="card-location">
                "📍 " {locations} " "
                <span class="card-distance">{distance}</span>
            </p>
            <p class="card-description" inner_html=description></p>
            {details.map(|html| view! { <p class="card-details" inner_html=html></p> })}
            {price.map(|p| view! { <span class="card-price">{p}</span> })}
            {entry.contingency_note.clone().map(|note| view! {
                <p class="card-contingency">"Plan B: " {note}</p>
            })}
            <div class="card-actions">
                <button
                    class="card-btn complete-btn"
                    on:click=move |_| ctx.dispatch(Action::ToggleCompleted(toggle_id.clone()))
                >
                    {if entry.completed { "↩ Deshacer" } else { "✓ Hecho" }}
                </button>
                <button class="card-btn" on:click=move |_| ctx.focus_on_map(coords)>"🗺️ Ver"</button>
                {has_guide.then(|| view! {
                    <button
                        class="card-btn"
                        on:click=move |_| store.audio_guide().set(Some(guide_id.clone()))
                    >
                        "🎧 Audioguía"
                    </button>
                })}
                <a class="card-btn nav-btn" href=nav_url target="_blank" rel="noopener">"🧭 Ir"</a>
            </div>
        </article>
    }
}
