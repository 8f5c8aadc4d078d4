//! Escala Frontend App
//!
//! Single-screen shell: status header, one of four tabs, bottom tab bar and
//! the two modals. Also owns the app-lifetime timers, the geolocation watch
//! and the weather fetch.

use std::cell::RefCell;

use escala_core::TripConfig;
use escala_core::TripState;
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use session_logger::LogBuffer;
use tracing::{info, warn};

use crate::commands;
use crate::components::{
    AudioGuideModal, BudgetPanel, GuidePanel, MapView, NotificationSettings, StatusHeader, TabBar, Timeline,
};
use crate::context::{local_now, AppContext};
use crate::models::{Tab, WeatherPanel};
use crate::store::{AppState, AppStateStoreFields, AppStore};

const COUNTDOWN_TICK_MS: u32 = 1_000;
const NOTIFICATION_POLL_MS: u32 = 30_000;

struct Tickers {
    _clock: Interval,
    _notifications: Interval,
}

thread_local! {
    static TICKERS: RefCell<Option<Tickers>> = const { RefCell::new(None) };
}

fn start_tickers(store: AppStore, ctx: AppContext) {
    let clock = Interval::new(COUNTDOWN_TICK_MS, move || store.clock().set(local_now()));
    let notifications = Interval::new(NOTIFICATION_POLL_MS, move || ctx.poll_notifications());
    TICKERS.with(|slot| {
        *slot.borrow_mut() = Some(Tickers { _clock: clock, _notifications: notifications });
    });
}

fn load_weather(store: AppStore, config: TripConfig) {
    spawn_local(async move {
        let panel = match commands::fetch_forecast(&config).await {
            Ok(data) => {
                info!(hours = data.hourly.len(), days = data.daily.len(), "forecast loaded");
                WeatherPanel::Ready(data)
            }
            Err(e) => {
                warn!(error = %e, "forecast unavailable");
                WeatherPanel::Offline
            }
        };
        store.weather().set(panel);
    });
}

#[component]
pub fn App(logs: LogBuffer) -> impl IntoView {
    let repo = commands::browser_repository();
    let config = repo.load_config();
    let trip = TripState::load(&repo);

    let store = Store::new(AppState::new(config.clone(), trip));
    let ctx = AppContext::new(store, repo);
    provide_context(store);
    provide_context(ctx);
    provide_context(logs);

    start_tickers(store, ctx);
    // first pass right away rather than 30 s in
    ctx.poll_notifications();

    if let Err(e) = commands::watch_position(move |location| store.user_location().set(Some(location))) {
        warn!(error = %e, "geolocation unavailable");
    }
    load_weather(store, config);

    view! {
        <div class="app-shell">
            <StatusHeader />
            <main class="tab-content">
                {move || match store.active_tab().get() {
                    Tab::Timeline => view! { <Timeline /> }.into_any(),
                    Tab::Map => view! { <MapView /> }.into_any(),
                    Tab::Budget => view! { <BudgetPanel /> }.into_any(),
                    Tab::Guide => view! { <GuidePanel /> }.into_any(),
                }}
            </main>
            <TabBar />
            <AudioGuideModal />
            <NotificationSettings />
        </div>
    }
}
