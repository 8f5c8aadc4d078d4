//! Repository Integration Tests
//!
//! TripRepository over the in-memory store.

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use crate::config::TripConfig;
    use crate::domain::{Cents, Coords, CustomExpense, CustomWaypoint, ExpenseCategory, NotificationPreferences};
    use crate::repository::{KeyValueStore, MemoryStore, TripRepository, CONFIG_KEY, EXPENSES_KEY, PREFERENCES_KEY, WAYPOINTS_KEY};

    fn setup_repo() -> TripRepository<MemoryStore> {
        TripRepository::new(MemoryStore::new())
    }

    fn seeded(key: &str, raw: &str) -> TripRepository<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set_raw(key, raw).unwrap();
        TripRepository::new(store)
    }

    #[test]
    fn test_empty_store_yields_defaults() {
        let repo = setup_repo();
        assert_eq!(repo.load_preferences(), NotificationPreferences::default());
        assert!(repo.load_waypoints().is_empty());
        assert!(repo.load_expenses().is_empty());
    }

    #[test]
    fn test_corrupt_preferences_yield_default() {
        let repo = seeded(PREFERENCES_KEY, "{enabled: yes");
        assert_eq!(repo.load_preferences(), NotificationPreferences::default());
    }

    #[test]
    fn test_out_of_range_lead_time_falls_back() {
        let repo = seeded(PREFERENCES_KEY, r#"{"enabled":true,"minutes_before":0}"#);
        let prefs = repo.load_preferences();
        assert!(prefs.enabled);
        assert_eq!(prefs.minutes_before, 15);

        let repo = seeded(PREFERENCES_KEY, r#"{"enabled":true,"minutes_before":1441}"#);
        assert_eq!(repo.load_preferences().minutes_before, 15);

        let repo = seeded(PREFERENCES_KEY, r#"{"enabled":true,"minutes_before":1440}"#);
        assert_eq!(repo.load_preferences().minutes_before, 1440);
    }

    #[test]
    fn test_port_call_profile() {
        assert_eq!(setup_repo().load_config(), TripConfig::default());

        let repo = seeded(CONFIG_KEY, r#"{"port_name":"Escala Palma","onboard_time":"16:45:00"}"#);
        let config = repo.load_config();
        assert_eq!(config.port_name, "Escala Palma");
        assert_eq!(config.onboard_time, NaiveTime::from_hms_opt(16, 45, 0).unwrap());

        let repo = seeded(CONFIG_KEY, "{not json");
        assert_eq!(repo.load_config(), TripConfig::default());
    }

    #[test]
    fn test_corrupt_waypoints_yield_empty() {
        let repo = seeded(WAYPOINTS_KEY, r#"[{"id": 3}]"#);
        assert!(repo.load_waypoints().is_empty());
    }

    #[test]
    fn test_wrong_shape_expenses_yield_empty() {
        let repo = seeded(EXPENSES_KEY, r#"{"not":"a list"}"#);
        assert!(repo.load_expenses().is_empty());
        let repo = seeded(EXPENSES_KEY, "null");
        assert!(repo.load_expenses().is_empty());
    }

    #[test]
    fn test_saved_records_load_back() {
        let mut repo = setup_repo();
        let prefs = NotificationPreferences { enabled: true, minutes_before: 30, ..Default::default() };
        let waypoint = CustomWaypoint {
            id: "wp-1".into(),
            title: "Churrería".into(),
            description: Some("Cerca de la Rambla".into()),
            coords: Coords::new(41.381, 2.173),
            timestamp: 1_776_000_000_000,
        };
        let expense = CustomExpense { id: "exp-1".into(), title: "Agua".into(), amount: Cents(150), category: ExpenseCategory::Food, timestamp: 1 };

        repo.save_preferences(&prefs).unwrap();
        repo.save_waypoints(std::slice::from_ref(&waypoint)).unwrap();
        repo.save_expenses(std::slice::from_ref(&expense)).unwrap();

        assert_eq!(repo.load_preferences(), prefs);
        assert_eq!(repo.load_waypoints(), vec![waypoint]);
        assert_eq!(repo.load_expenses(), vec![expense]);
    }

    #[test]
    fn test_records_use_independent_keys() {
        let mut repo = setup_repo();
        repo.save_expenses(&[]).unwrap();
        assert_eq!(repo.store().get_raw(EXPENSES_KEY).as_deref(), Some("[]"));
        assert!(repo.store().get_raw(WAYPOINTS_KEY).is_none());
    }
}
