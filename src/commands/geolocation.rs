//! Geolocation Watch
//!
//! One continuous high-accuracy watch. The callbacks live in a
//! thread-local for as long as the watch is active.

use std::cell::RefCell;

use escala_core::domain::UserLocation;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};

use super::{js_err, window};

struct Watch {
    id: i32,
    _on_fix: Closure<dyn FnMut(GeolocationPosition)>,
    _on_error: Closure<dyn FnMut(GeolocationPositionError)>,
}

thread_local! {
    static WATCH: RefCell<Option<Watch>> = const { RefCell::new(None) };
}

/// Start watching the position. Replaces any earlier watch.
pub fn watch_position(on_fix: impl Fn(UserLocation) + 'static) -> Result<(), String> {
    clear_position_watch();
    let geolocation = window()?.navigator().geolocation().map_err(js_err)?;

    let on_fix = Closure::<dyn FnMut(GeolocationPosition)>::new(move |pos: GeolocationPosition| {
        let c = pos.coords();
        on_fix(UserLocation::new(c.latitude(), c.longitude(), Some(c.accuracy())));
    });
    let on_error = Closure::<dyn FnMut(GeolocationPositionError)>::new(|err: GeolocationPositionError| {
        warn!(code = err.code(), message = %err.message(), "geolocation error");
    });

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_maximum_age(1000);

    let id = geolocation
        .watch_position_with_error_callback_and_options(
            on_fix.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
            &options,
        );
    info!(id, "geolocation watch started");

    WATCH.with(|w| *w.borrow_mut() = Some(Watch { id, _on_fix: on_fix, _on_error: on_error }));
    Ok(())
}

pub fn clear_position_watch() {
    let Some(watch) = WATCH.with(|w| w.borrow_mut().take()) else {
        return;
    };
    if let Ok(geolocation) = window().and_then(|w| w.navigator().geolocation().map_err(js_err)) {
        geolocation.clear_watch(watch.id);
    }
}
