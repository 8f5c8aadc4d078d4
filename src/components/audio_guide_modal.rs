//! Audio Guide Modal Component
//!
//! Script of the selected entry with a play/stop button. Closing the modal
//! stops playback.

use escala_core::speech::SpeechRequest;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AudioGuideModal() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let request = Memo::new(move |_| {
        let id = store.audio_guide().get()?;
        let trip = store.trip().read();
        let entry = trip.entry(&id)?;
        Some((entry.title.clone(), SpeechRequest::audio_guide(entry)?))
    });
    let close = move || {
        ctx.stop_speech();
        store.audio_guide().set(None);
    };

    move || {
        request.get().map(|(title, request)| {
            let key = request.key.clone();
            let playing = move || store.playback().read().is_playing(&key);
            let text = request.text.clone();
            view! {
                <div class="modal-backdrop" on:click=move |_| close()>
                    <div class="modal audio-guide-modal" on:click=|ev| ev.stop_propagation()>
                        <header class="modal-header">
                            <h2>"🎧 " {title}</h2>
                            <button class="modal-close" on:click=move |_| close()>"×"</button>
                        </header>
                        <p class="audio-guide-text">{text}</p>
                        <button
                            class="play-btn"
                            class:playing=playing.clone()
                            on:click=move |_| ctx.toggle_speech(request.clone())
                        >
                            {let playing = playing.clone(); move || if playing() { "⏹ Detener" } else { "▶ Escuchar" }}
                        </button>
                    </div>
                </div>
            }
        })
    }
}
