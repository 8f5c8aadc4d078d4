//! Notification preferences, persisted across reloads.

use serde::{Deserialize, Serialize};

/// Lead times offered in the settings panel, in minutes
pub const LEAD_TIME_CHOICES: [u32; 5] = [5, 10, 15, 30, 60];

/// Longest accepted lead time: one day
pub const MAX_LEAD_TIME: u32 = 24 * 60;

pub fn lead_time_valid(minutes: u32) -> bool {
    (1..=MAX_LEAD_TIME).contains(&minutes)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub enabled: bool,
    /// Alerts for regular entries
    pub activity_alerts: bool,
    /// Alerts for critical entries
    pub critical_alerts: bool,
    pub minutes_before: u32,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            enabled: false,
            activity_alerts: true,
            critical_alerts: true,
            minutes_before: 15,
        }
    }
}

impl NotificationPreferences {
    /// Whether alerts of this category are switched on (ignores `enabled`)
    pub fn category_enabled(&self, critical: bool) -> bool {
        if critical {
            self.critical_alerts
        } else {
            self.activity_alerts
        }
    }

    /// Replace an out-of-range lead time with the default; `true` if it did
    pub fn repair_lead_time(&mut self) -> bool {
        if lead_time_valid(self.minutes_before) {
            return false;
        }
        self.minutes_before = Self::default().minutes_before;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let prefs = NotificationPreferences::default();
        assert!(!prefs.enabled);
        assert_eq!(prefs.minutes_before, 15);
    }

    #[test]
    fn test_lead_time_bounds() {
        assert!(!lead_time_valid(0));
        assert!(lead_time_valid(1));
        assert!(lead_time_valid(MAX_LEAD_TIME));
        assert!(!lead_time_valid(MAX_LEAD_TIME + 1));
        assert!(LEAD_TIME_CHOICES.iter().all(|m| lead_time_valid(*m)));
    }

    #[test]
    fn test_repair_lead_time_keeps_other_fields() {
        let mut prefs = NotificationPreferences { enabled: true, critical_alerts: false, minutes_before: 0, ..Default::default() };
        assert!(prefs.repair_lead_time());
        assert_eq!(prefs.minutes_before, 15);
        assert!(prefs.enabled);
        assert!(!prefs.critical_alerts);
        assert!(!prefs.repair_lead_time());
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let prefs: NotificationPreferences = serde_json::from_str(r#"{"enabled":true}"#).unwrap();
        assert!(prefs.enabled);
        assert!(prefs.critical_alerts);
        assert_eq!(prefs.minutes_before, 15);
    }
}
