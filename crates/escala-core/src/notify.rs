//! Notification trigger evaluator
//!
//! Polled on a fixed interval. An entry alerts once per session when its
//! start falls inside `(now, now + lead_time]`. Windows shorter than the
//! polling interval can be missed.

use std::collections::HashSet;

use chrono::NaiveTime;
use tracing::debug;

use crate::domain::{ItineraryEntry, NotificationPreferences};

/// Entries already alerted in this session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentLog {
    sent: HashSet<String>,
}

impl SentLog {
    pub fn contains(&self, id: &str) -> bool {
        self.sent.contains(id)
    }

    pub fn mark(&mut self, id: &str) {
        self.sent.insert(id.to_string());
    }

    pub fn len(&self) -> usize {
        self.sent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.is_empty()
    }
}

/// A local notification to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub entry_id: String,
    pub title: String,
    pub body: String,
    pub critical: bool,
}

/// Seconds from `now` until `start`; negative once started
pub fn seconds_until(start: NaiveTime, now: NaiveTime) -> i64 {
    (start - now).num_seconds()
}

/// The eligibility rule without the session bookkeeping
pub fn is_eligible(entry: &ItineraryEntry, prefs: &NotificationPreferences, now: NaiveTime) -> bool {
    if !prefs.enabled || entry.completed || !prefs.category_enabled(entry.critical) {
        return false;
    }
    let secs = seconds_until(entry.start, now);
    secs > 0 && secs <= i64::from(prefs.minutes_before) * 60
}

/// Evaluate every entry once; eligible entries are marked sent and returned
pub fn evaluate(
    entries: &[ItineraryEntry],
    prefs: &NotificationPreferences,
    sent: &mut SentLog,
    now: NaiveTime,
) -> Vec<Alert> {
    let mut alerts = Vec::new();
    for entry in entries {
        if sent.contains(&entry.id) || !is_eligible(entry, prefs, now) {
            continue;
        }
        sent.mark(&entry.id);
        let alert = build_alert(entry, now);
        debug!(entry = %entry.id, critical = entry.critical, "notification due");
        alerts.push(alert);
    }
    alerts
}

fn build_alert(entry: &ItineraryEntry, now: NaiveTime) -> Alert {
    // round up so an entry 30 s away reads "1 min"
    let minutes = (seconds_until(entry.start, now) + 59) / 60;
    let title = if entry.critical {
        format!("⚠️ {}", entry.title)
    } else {
        format!("Próximo: {}", entry.title)
    };
    let body = format!(
        "Empieza a las {} en {} (en {} min)",
        entry.start.format("%H:%M"),
        entry.location_name,
        minutes
    );
    Alert {
        entry_id: entry.id.clone(),
        title,
        body,
        critical: entry.critical,
    }
}
