//! Timeline Component
//!
//! The day's entries in start order, each with its live status, plus the
//! PDF export button.

use escala_core::domain::{sort_by_start, statuses, EntryStatus, ItineraryEntry};
use escala_core::export::{itinerary_pdf, DOWNLOAD_NAME};
use leptos::prelude::*;
use tracing::{info, warn};

use super::TimelineCard;
use crate::commands;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Timeline() -> impl IntoView {
    let store = use_app_store();

    let rows = Memo::new(move |_| {
        let now = store.clock().get();
        let mut entries = store.trip().read().itinerary.clone();
        sort_by_start(&mut entries);
        let statuses = statuses(&entries, now);
        entries.into_iter().zip(statuses).collect::<Vec<(ItineraryEntry, EntryStatus)>>()
    });
    let done_count = move || rows.read().iter().filter(|(e, _)| e.completed).count();

    let on_export = move |_| {
        let bytes = {
            let trip = store.trip().read_untracked();
            let config = store.config().read_untracked();
            itinerary_pdf(&trip.itinerary, &config)
        };
        match commands::download_bytes(&bytes, DOWNLOAD_NAME, "application/pdf") {
            Ok(()) => info!(bytes = bytes.len(), "itinerary exported"),
            Err(e) => warn!(error = %e, "pdf download failed"),
        }
    };

    view! {
        <section class="timeline">
            <div class="timeline-toolbar">
                <span class="timeline-progress">
                    {move || format!("{} / {} completadas", done_count(), rows.read().len())}
                </span>
                <button class="export-btn" on:click=on_export>"📄 Exportar PDF"</button>
            </div>
            <For
                each=move || rows.get()
                key=|(entry, status)| (entry.id.clone(), entry.completed, *status)
                children=move |(entry, status)| view! { <TimelineCard entry=entry status=status /> }
            />
        </section>
    }
}
