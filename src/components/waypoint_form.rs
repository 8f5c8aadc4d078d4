//! Waypoint Form Component
//!
//! Saves the current GPS fix, or the map centre without one, as a named
//! point.

use chrono::Utc;
use escala_core::domain::WaypointDraft;
use escala_core::Action;
use leptos::prelude::*;

use super::map_view::map_center;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WaypointForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let source_hint = move || {
        if store.user_location().read().is_some() {
            "Se guardará tu posición GPS actual"
        } else {
            "Sin GPS: se guardará el centro del mapa"
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let coords = store
            .user_location()
            .get_untracked()
            .map(|loc| loc.coords)
            .or_else(map_center)
            .unwrap_or_else(|| store.config().read_untracked().map_center);
        let draft = WaypointDraft { title: title.get_untracked(), description: description.get_untracked(), coords };
        match ctx.try_dispatch(Action::AddWaypoint { draft, now_ms: Utc::now().timestamp_millis() }) {
            Ok(()) => {
                set_title.set(String::new());
                set_description.set(String::new());
                set_error.set(None);
                set_open.set(false);
            }
            Err(_) => set_error.set(Some("Pon un nombre al punto")),
        }
    };

    view! {
        <Show
            when=move || open.get()
            fallback=move || view! {
                <button class="add-waypoint-btn" on:click=move |_| set_open.set(true)>"📌 Guardar punto aquí"</button>
            }
        >
            <form class="waypoint-form" on:submit=on_submit>
                <p class="form-hint">{source_hint}</p>
                <input
                    type="text"
                    placeholder="Nombre (p. ej. Heladería)"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    placeholder="Nota (opcional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <div class="form-actions">
                    <button type="submit">"Guardar"</button>
                    <button type="button" on:click=move |_| {
                        set_error.set(None);
                        set_open.set(false);
                    }>"Cancelar"</button>
                </div>
            </form>
        </Show>
    }
}
