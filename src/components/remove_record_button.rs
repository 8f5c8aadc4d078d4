//! Two-step removal for user-created records

use leptos::prelude::*;

use crate::models::SavedRecord;

/// `×` that turns into a prompt naming the record; removal runs on confirm
#[component]
pub fn RemoveRecordButton(
    kind: SavedRecord,
    #[prop(into)] label: String,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let tooltip = kind.remove_label(&label);
    let prompt = kind.confirm_prompt(&label);

    move || {
        if !armed.get() {
            return view! {
                <button
                    class="delete-btn"
                    title=tooltip.clone()
                    aria-label=tooltip.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >
                    "×"
                </button>
            }
            .into_any();
        }
        view! {
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(false);
                        on_remove.run(());
                    }
                >
                    "Borrar"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(false);
                    }
                >
                    "Cancelar"
                </button>
            </span>
        }
        .into_any()
    }
}
