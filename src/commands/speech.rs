//! Speech Synthesis
//!
//! Speaking always cancels what is in flight first. Browsers report a
//! cancelled utterance through `onerror` or `onend`; both go to the same
//! one-shot callback.

use std::cell::RefCell;
use std::rc::Rc;

use escala_core::speech::SpeechRequest;
use wasm_bindgen::prelude::*;
use web_sys::SpeechSynthesisUtterance;

use super::{js_err, window};

pub fn speak(request: &SpeechRequest, on_end: impl FnOnce() + 'static) -> Result<(), String> {
    let synth = window()?.speech_synthesis().map_err(js_err)?;
    synth.cancel();

    let utterance = SpeechSynthesisUtterance::new_with_text(&request.text).map_err(js_err)?;
    utterance.set_lang(request.lang);
    utterance.set_rate(request.rate);

    let pending = Rc::new(RefCell::new(Some(on_end)));
    let finished = Closure::<dyn FnMut()>::new(move || {
        if let Some(f) = pending.borrow_mut().take() {
            f();
        }
    })
    .into_js_value();
    utterance.set_onend(Some(finished.unchecked_ref()));
    utterance.set_onerror(Some(finished.unchecked_ref()));

    synth.speak(&utterance);
    Ok(())
}

pub fn cancel_speech() {
    if let Ok(synth) = window().and_then(|w| w.speech_synthesis().map_err(js_err)) {
        synth.cancel();
    }
}
