//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The trip state
//! is only ever written through `AppContext::dispatch`.

use chrono::NaiveTime;
use escala_core::domain::UserLocation;
use escala_core::speech::PlaybackState;
use escala_core::{TripConfig, TripState};
use reactive_stores::Store;

use crate::models::{FocusRequest, Tab, WeatherPanel};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub config: TripConfig,
    /// Itinerary, waypoints, expenses and preferences
    pub trip: TripState,
    pub active_tab: Tab,
    /// Local wall clock, refreshed every second
    pub clock: NaiveTime,
    /// Latest GPS fix; `None` until the first one arrives
    pub user_location: Option<UserLocation>,
    pub map_focus: Option<FocusRequest>,
    /// Entry id whose audio guide modal is open
    pub audio_guide: Option<String>,
    pub playback: PlaybackState,
    pub weather: WeatherPanel,
    pub settings_open: bool,
}

impl AppState {
    pub fn new(config: TripConfig, trip: TripState) -> Self {
        Self { config, trip, clock: crate::context::local_now(), ..Default::default() }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    leptos::prelude::expect_context::<AppStore>()
}
