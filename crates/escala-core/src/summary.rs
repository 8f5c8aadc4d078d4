//! Visit summary figures for the guide tab.

use chrono::NaiveTime;

use crate::config::TripConfig;
use crate::countdown::format_minutes;
use crate::domain::{EntryKind, ItineraryEntry};

#[derive(Debug, Clone, PartialEq)]
pub struct VisitSummary {
    pub first_start: Option<NaiveTime>,
    pub onboard: NaiveTime,
    /// First start until the onboard deadline
    pub total_minutes: i64,
    pub transport_minutes: i64,
    /// Sightseeing and walking time
    pub active_minutes: i64,
    pub walking_km: f64,
}

impl VisitSummary {
    pub fn compute(entries: &[ItineraryEntry], config: &TripConfig) -> Self {
        let first_start = entries.iter().map(|e| e.start).min();
        let total_minutes = first_start.map(|s| (config.onboard_time - s).num_minutes().max(0)).unwrap_or(0);
        let minutes_of = |kinds: &[EntryKind]| -> i64 {
            entries.iter().filter(|e| kinds.contains(&e.kind)).map(|e| e.duration_minutes()).sum()
        };
        Self {
            first_start,
            onboard: config.onboard_time,
            total_minutes,
            transport_minutes: minutes_of(&[EntryKind::Transport]),
            active_minutes: minutes_of(&[EntryKind::Sightseeing, EntryKind::Walk]),
            walking_km: config.walking_distance_km,
        }
    }

    pub fn total_label(&self) -> String {
        format_minutes(self.total_minutes)
    }

    pub fn span_label(&self) -> String {
        match self.first_start {
            Some(s) => format!("{} - {}", s.format("%H:%M"), self.onboard.format("%H:%M")),
            None => "--".to_string(),
        }
    }

    pub fn transport_label(&self) -> String {
        format!("~{}", format_minutes(self.transport_minutes))
    }

    pub fn active_label(&self) -> String {
        format!("~{}", format_minutes(self.active_minutes))
    }

    pub fn walking_label(&self) -> String {
        format!("~{:.1} km", self.walking_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::barcelona_itinerary;

    #[test]
    fn test_barcelona_summary() {
        let s = VisitSummary::compute(&barcelona_itinerary(), &TripConfig::default());
        assert_eq!(s.total_label(), "9h 30m");
        assert_eq!(s.span_label(), "08:00 - 17:30");
        assert_eq!(s.transport_label(), "~1h 50m");
        assert_eq!(s.active_label(), "~3h 10m");
        assert_eq!(s.walking_label(), "~5.4 km");
    }

    #[test]
    fn test_empty_itinerary() {
        let s = VisitSummary::compute(&[], &TripConfig::default());
        assert_eq!(s.total_minutes, 0);
        assert_eq!(s.span_label(), "--");
    }
}
