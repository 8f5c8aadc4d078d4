//! Application Context
//!
//! The single write path into the trip state. Components call `dispatch`
//! with an `Action`; the resulting effects (persist, notify) run here.

use chrono::{Local, NaiveTime};
use escala_core::domain::Coords;
use escala_core::repository::TripRepository;
use escala_core::speech::{PlaybackCommand, SpeechRequest};
use escala_core::{Action, Effect};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{debug, info, warn};

use crate::commands::{self, BrowserStore};
use crate::models::{tab_for_focus, FocusRequest};
use crate::store::{AppStateStoreFields, AppStore};

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    repo: StoredValue<TripRepository<BrowserStore>>,
}

impl AppContext {
    pub fn new(store: AppStore, repo: TripRepository<BrowserStore>) -> Self {
        Self { store, repo: StoredValue::new(repo) }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Apply an action and run its effects. Rejected actions are logged.
    pub fn dispatch(&self, action: Action) {
        let _ = self.try_dispatch(action);
    }

    /// Like `dispatch`, handing the rejection back for display
    pub fn try_dispatch(&self, action: Action) -> Result<(), String> {
        debug!(?action, "dispatch");
        let result = self.store.trip().write().apply(action);
        match result {
            Ok(effects) => {
                self.run_effects(effects);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "action rejected");
                Err(e.to_string())
            }
        }
    }

    /// One notification polling pass against the local clock
    pub fn poll_notifications(&self) {
        let now = local_now();
        // sent log is not displayed; skip the reactive notify
        let effects = self.store.trip().write_untracked().poll_notifications(now);
        self.run_effects(effects);
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::Notify(alert) => {
                    info!(entry = %alert.entry_id, critical = alert.critical, "notification due");
                    if let Err(e) = commands::show_notification(alert) {
                        warn!(error = %e, "notification not shown");
                    }
                }
                _ => {
                    let trip = self.store.trip().read_untracked();
                    self.repo.update_value(|repo| {
                        if let Err(e) = trip.persist(&effect, repo) {
                            warn!(error = %e, "persist failed");
                        }
                    });
                }
            }
        }
    }

    /// Turning notifications on asks for permission first; a refusal
    /// leaves them disabled.
    pub fn set_notifications_enabled(&self, enabled: bool) {
        if !enabled {
            self.dispatch(Action::SetNotificationsEnabled(false));
            return;
        }
        let ctx = *self;
        spawn_local(async move {
            let granted = match commands::request_permission().await {
                Ok(granted) => granted,
                Err(e) => {
                    warn!(error = %e, "notification permission request failed");
                    false
                }
            };
            ctx.dispatch(Action::SetNotificationsEnabled(granted));
        });
    }

    /// Switch to the map and fly to `target`
    pub fn focus_on_map(&self, target: Coords) {
        let previous = self.store.map_focus().get_untracked();
        self.store.map_focus().set(Some(FocusRequest::next(previous, target)));
        // re-setting the same tab would remount the map
        if let Some(tab) = tab_for_focus(self.store.active_tab().get_untracked()) {
            self.store.active_tab().set(tab);
        }
    }

    /// Play/stop for a speech source
    pub fn toggle_speech(&self, request: SpeechRequest) {
        let command = self.store.playback().write().toggle(request);
        self.run_playback(command);
    }

    pub fn stop_speech(&self) {
        let command = self.store.playback().write().stop();
        self.run_playback(command);
    }

    fn run_playback(&self, command: PlaybackCommand) {
        match command {
            PlaybackCommand::Start { request, ticket } => {
                let store = self.store;
                let on_end = move || {
                    store.playback().write().finished(ticket);
                };
                if let Err(e) = commands::speak(&request, on_end) {
                    warn!(error = %e, "speech unavailable");
                    self.store.playback().write().finished(ticket);
                }
            }
            PlaybackCommand::Stop => commands::cancel_speech(),
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

pub fn local_now() -> NaiveTime {
    Local::now().time()
}
