//! Trip state and the actions that change it
//!
//! Views never mutate state directly. They dispatch an `Action`; `apply`
//! changes the state and returns the side effects the caller must run
//! (persisting a record, showing a notification).

use chrono::NaiveTime;
use tracing::info;

use crate::catalog;
use crate::domain::{
    lead_time_valid, position_of, CustomExpense, CustomWaypoint, DomainError, DomainResult, Entity, ExpenseDraft, ItineraryEntry,
    NotificationPreferences, WaypointDraft,
};
use crate::notify::{self, Alert, SentLog};
use crate::repository::{KeyValueStore, TripRepository};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleCompleted(String),
    AddWaypoint { draft: WaypointDraft, now_ms: i64 },
    RemoveWaypoint(String),
    AddExpense { draft: ExpenseDraft, now_ms: i64 },
    RemoveExpense(String),
    SetNotificationsEnabled(bool),
    SetActivityAlerts(bool),
    SetCriticalAlerts(bool),
    SetLeadTime(u32),
}

/// Work the caller performs after an action has been applied
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PersistPreferences,
    PersistWaypoints,
    PersistExpenses,
    Notify(Alert),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripState {
    pub itinerary: Vec<ItineraryEntry>,
    pub waypoints: Vec<CustomWaypoint>,
    pub expenses: Vec<CustomExpense>,
    pub preferences: NotificationPreferences,
    sent: SentLog,
}

impl Default for TripState {
    fn default() -> Self {
        Self::new(catalog::barcelona_itinerary())
    }
}

impl TripState {
    pub fn new(itinerary: Vec<ItineraryEntry>) -> Self {
        Self {
            itinerary,
            waypoints: Vec::new(),
            expenses: Vec::new(),
            preferences: NotificationPreferences::default(),
            sent: SentLog::default(),
        }
    }

    /// Catalog itinerary plus whatever the repository holds
    pub fn load<S: KeyValueStore>(repo: &TripRepository<S>) -> Self {
        let mut state = Self::default();
        state.preferences = repo.load_preferences();
        state.waypoints = repo.load_waypoints();
        state.expenses = repo.load_expenses();
        info!(
            waypoints = state.waypoints.len(),
            expenses = state.expenses.len(),
            notifications = state.preferences.enabled,
            "trip state loaded"
        );
        state
    }

    pub fn entry(&self, id: &str) -> Option<&ItineraryEntry> {
        self.itinerary.iter().find(|e| e.id == id)
    }

    #[cfg(test)]
    pub fn sent_log(&self) -> &SentLog {
        &self.sent
    }

    pub fn apply(&mut self, action: Action) -> DomainResult<Vec<Effect>> {
        match action {
            Action::ToggleCompleted(id) => {
                let idx = position_of(&self.itinerary, &id).ok_or_else(|| DomainError::NotFound(format!("entry {}", id)))?;
                self.itinerary[idx].toggle_completed();
                Ok(Vec::new())
            }
            Action::AddWaypoint { draft, now_ms } => {
                let id = fresh_id("wp", now_ms, &self.waypoints);
                let waypoint = draft.into_waypoint(id, now_ms)?;
                self.waypoints.push(waypoint);
                Ok(vec![Effect::PersistWaypoints])
            }
            Action::RemoveWaypoint(id) => {
                let idx = position_of(&self.waypoints, &id).ok_or_else(|| DomainError::NotFound(format!("waypoint {}", id)))?;
                self.waypoints.remove(idx);
                Ok(vec![Effect::PersistWaypoints])
            }
            Action::AddExpense { draft, now_ms } => {
                let id = fresh_id("exp", now_ms, &self.expenses);
                let expense = draft.into_expense(id, now_ms)?;
                self.expenses.push(expense);
                Ok(vec![Effect::PersistExpenses])
            }
            Action::RemoveExpense(id) => {
                let idx = position_of(&self.expenses, &id).ok_or_else(|| DomainError::NotFound(format!("expense {}", id)))?;
                self.expenses.remove(idx);
                Ok(vec![Effect::PersistExpenses])
            }
            Action::SetNotificationsEnabled(on) => {
                self.preferences.enabled = on;
                Ok(vec![Effect::PersistPreferences])
            }
            Action::SetActivityAlerts(on) => {
                self.preferences.activity_alerts = on;
                Ok(vec![Effect::PersistPreferences])
            }
            Action::SetCriticalAlerts(on) => {
                self.preferences.critical_alerts = on;
                Ok(vec![Effect::PersistPreferences])
            }
            Action::SetLeadTime(minutes) => {
                if !lead_time_valid(minutes) {
                    return Err(DomainError::InvalidInput(format!("lead time {} min", minutes)));
                }
                self.preferences.minutes_before = minutes;
                Ok(vec![Effect::PersistPreferences])
            }
        }
    }

    /// One polling pass of the notification evaluator
    pub fn poll_notifications(&mut self, now: NaiveTime) -> Vec<Effect> {
        notify::evaluate(&self.itinerary, &self.preferences, &mut self.sent, now)
            .into_iter()
            .map(Effect::Notify)
            .collect()
    }

    /// Write the record a persist effect refers to; other effects are ignored
    pub fn persist<S: KeyValueStore>(&self, effect: &Effect, repo: &mut TripRepository<S>) -> DomainResult<()> {
        match effect {
            Effect::PersistPreferences => repo.save_preferences(&self.preferences),
            Effect::PersistWaypoints => repo.save_waypoints(&self.waypoints),
            Effect::PersistExpenses => repo.save_expenses(&self.expenses),
            Effect::Notify(_) => Ok(()),
        }
    }
}

/// `prefix-<ms>`, suffixed when two records land in the same millisecond
fn fresh_id<T: Entity>(prefix: &str, now_ms: i64, existing: &[T]) -> String {
    let base = format!("{}-{}", prefix, now_ms);
    if position_of(existing, &base).is_none() {
        return base;
    }
    (1..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| position_of(existing, candidate).is_none())
        .unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cents, Coords, ExpenseCategory};
    use crate::repository::MemoryStore;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn expense_draft(title: &str, amount: &str) -> ExpenseDraft {
        ExpenseDraft { title: title.into(), amount: amount.into(), category: ExpenseCategory::Other }
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        let mut state = TripState::default();
        let before = state.clone();
        assert!(state.apply(Action::ToggleCompleted("4".into())).unwrap().is_empty());
        assert!(state.entry("4").unwrap().completed);
        state.apply(Action::ToggleCompleted("4".into())).unwrap();
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_unknown_entry_is_not_found() {
        let mut state = TripState::default();
        assert!(matches!(state.apply(Action::ToggleCompleted("99".into())), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_expense_actions_request_persistence() {
        let mut state = TripState::default();
        let effects = state.apply(Action::AddExpense { draft: expense_draft("Helado", "3,20"), now_ms: 10 }).unwrap();
        assert_eq!(effects, vec![Effect::PersistExpenses]);
        assert_eq!(state.expenses[0].id, "exp-10");
        assert_eq!(state.expenses[0].amount, Cents(320));

        let effects = state.apply(Action::RemoveExpense("exp-10".into())).unwrap();
        assert_eq!(effects, vec![Effect::PersistExpenses]);
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn test_invalid_expense_leaves_state_untouched() {
        let mut state = TripState::default();
        assert!(state.apply(Action::AddExpense { draft: expense_draft("", "3"), now_ms: 1 }).is_err());
        assert!(state.expenses.is_empty());
    }

    #[test]
    fn test_ids_are_unique_within_same_millisecond() {
        let mut state = TripState::default();
        let draft = WaypointDraft { title: "Bar".into(), description: String::new(), coords: Coords::new(41.0, 2.0) };
        state.apply(Action::AddWaypoint { draft: draft.clone(), now_ms: 5 }).unwrap();
        state.apply(Action::AddWaypoint { draft, now_ms: 5 }).unwrap();
        assert_eq!(state.waypoints[0].id, "wp-5");
        assert_eq!(state.waypoints[1].id, "wp-5-1");
    }

    #[test]
    fn test_lead_time_validation() {
        let mut state = TripState::default();
        assert!(state.apply(Action::SetLeadTime(0)).is_err());
        assert_eq!(state.apply(Action::SetLeadTime(30)).unwrap(), vec![Effect::PersistPreferences]);
        assert_eq!(state.preferences.minutes_before, 30);
    }

    #[test]
    fn test_poll_notifications_fires_once() {
        let mut state = TripState::default();
        state.apply(Action::SetNotificationsEnabled(true)).unwrap();

        // boarding deadline at 17:30, default lead time 15
        let effects = state.poll_notifications(t(17, 20));
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::Notify(a) if a.entry_id == "12" && a.critical));
        assert!(state.poll_notifications(t(17, 21)).is_empty());
        assert!(state.sent_log().contains("12"));
        assert_eq!(state.sent_log().len(), 1);
    }

    #[test]
    fn test_stored_zero_lead_time_still_alerts() {
        let mut store = MemoryStore::new();
        store.set_raw(crate::repository::PREFERENCES_KEY, r#"{"enabled":true,"minutes_before":0}"#).unwrap();
        let mut state = TripState::load(&TripRepository::new(store));
        assert_eq!(state.preferences.minutes_before, 15);

        let effects = state.poll_notifications(t(17, 29));
        assert!(matches!(&effects[..], [Effect::Notify(a)] if a.entry_id == "12"));
    }

    #[test]
    fn test_persist_and_reload() {
        let mut repo = TripRepository::new(MemoryStore::new());
        let mut state = TripState::load(&repo);

        for effect in state.apply(Action::SetLeadTime(60)).unwrap() {
            state.persist(&effect, &mut repo).unwrap();
        }
        for effect in state.apply(Action::AddExpense { draft: expense_draft("Taxi", "18"), now_ms: 7 }).unwrap() {
            state.persist(&effect, &mut repo).unwrap();
        }

        let reloaded = TripState::load(&repo);
        assert_eq!(reloaded.preferences.minutes_before, 60);
        assert_eq!(reloaded.expenses, state.expenses);
        // completion flags are session-only
        assert!(reloaded.itinerary.iter().all(|e| !e.completed));
    }
}
