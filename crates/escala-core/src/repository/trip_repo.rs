//! Trip Repository
//!
//! Loads and saves the three persisted records, and reads an optional
//! port-call profile. Loading never fails: absent or unparsable values
//! fall back to the documented default.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::traits::KeyValueStore;
use crate::config::TripConfig;
use crate::domain::{CustomExpense, CustomWaypoint, DomainResult, NotificationPreferences};

pub const PREFERENCES_KEY: &str = "escala.notification_prefs";
pub const WAYPOINTS_KEY: &str = "escala.waypoints";
pub const EXPENSES_KEY: &str = "escala.expenses";
/// Optional profile for a port call other than the built-in one
pub const CONFIG_KEY: &str = "escala.trip_config";

/// Typed access to the persisted trip records
pub struct TripRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> TripRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_config(&self) -> TripConfig {
        let Some(raw) = self.store.get_raw(CONFIG_KEY) else {
            return TripConfig::default();
        };
        TripConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!(key = CONFIG_KEY, error = %e, "ignoring unreadable port-call profile");
            TripConfig::default()
        })
    }

    /// Out-of-range lead times are reset to the default
    pub fn load_preferences(&self) -> NotificationPreferences {
        let mut prefs: NotificationPreferences = self.load_or_default(PREFERENCES_KEY);
        let stored = prefs.minutes_before;
        if prefs.repair_lead_time() {
            warn!(key = PREFERENCES_KEY, minutes_before = stored, "lead time out of range, using default");
        }
        prefs
    }

    pub fn load_waypoints(&self) -> Vec<CustomWaypoint> {
        self.load_or_default(WAYPOINTS_KEY)
    }

    pub fn load_expenses(&self) -> Vec<CustomExpense> {
        self.load_or_default(EXPENSES_KEY)
    }

    pub fn save_preferences(&mut self, prefs: &NotificationPreferences) -> DomainResult<()> {
        self.save(PREFERENCES_KEY, prefs)
    }

    pub fn save_waypoints(&mut self, waypoints: &[CustomWaypoint]) -> DomainResult<()> {
        self.save(WAYPOINTS_KEY, waypoints)
    }

    pub fn save_expenses(&mut self, expenses: &[CustomExpense]) -> DomainResult<()> {
        self.save(EXPENSES_KEY, expenses)
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.store.get_raw(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "discarding unreadable record");
                T::default()
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> DomainResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set_raw(key, &json)
    }
}
