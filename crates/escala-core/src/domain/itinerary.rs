//! Itinerary Entry
//!
//! One scheduled activity of the port call with a time window and location.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::coords::Coords;
use super::entity::Entity;
use super::money::Cents;

/// Category tag of an entry; drives badge colour and budget grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Arrival, boarding and other ship logistics
    #[default]
    Logistics,
    /// Shuttle, metro, taxi
    Transport,
    Sightseeing,
    Walk,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Logistics => "logistics",
            EntryKind::Transport => "transport",
            EntryKind::Sightseeing => "sightseeing",
            EntryKind::Walk => "walk",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "transport" => EntryKind::Transport,
            "sightseeing" => EntryKind::Sightseeing,
            "walk" => EntryKind::Walk,
            _ => EntryKind::Logistics,
        }
    }

    /// Spanish badge label
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::Logistics => "Logística",
            EntryKind::Transport => "Transporte",
            EntryKind::Sightseeing => "Visita",
            EntryKind::Walk => "Paseo",
        }
    }
}

/// A scheduled activity of the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryEntry {
    pub id: String,
    pub title: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location_name: String,
    pub end_location_name: Option<String>,
    pub coords: Coords,
    pub end_coords: Option<Coords>,
    pub description: String,
    pub key_details: String,
    pub price: Cents,
    pub kind: EntryKind,
    pub completed: bool,
    /// Time-sensitive entry (boarding deadline and the like)
    pub critical: bool,
    pub contingency_note: Option<String>,
    /// Curated navigation link; a directions URL is derived when absent
    pub navigation_url: Option<String>,
    pub audio_guide: Option<String>,
}

impl ItineraryEntry {
    /// Create an entry at a single location with no optional extras
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        location_name: impl Into<String>,
        coords: Coords,
        kind: EntryKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            location_name: location_name.into(),
            end_location_name: None,
            coords,
            end_coords: None,
            description: String::new(),
            key_details: String::new(),
            price: Cents::ZERO,
            kind,
            completed: false,
            critical: false,
            contingency_note: None,
            navigation_url: None,
            audio_guide: None,
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Minutes between start and end
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes().max(0)
    }

    /// `HH:MM - HH:MM`, or a single time for point-in-time entries
    pub fn time_window(&self) -> String {
        if self.start == self.end {
            self.start.format("%H:%M").to_string()
        } else {
            format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
        }
    }

    pub fn has_audio_guide(&self) -> bool {
        self.audio_guide.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}

impl Entity for ItineraryEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Where an entry stands relative to the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryStatus {
    Done,
    InProgress,
    /// First pending entry that has not started yet
    Next,
    Upcoming,
    /// Window already over but not ticked off
    Past,
}

impl EntryStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            EntryStatus::Done => "status-done",
            EntryStatus::InProgress => "status-active",
            EntryStatus::Next => "status-next",
            EntryStatus::Upcoming => "status-upcoming",
            EntryStatus::Past => "status-past",
        }
    }
}

/// Sort entries by start time (stable, so equal starts keep catalog order)
pub fn sort_by_start(entries: &mut [ItineraryEntry]) {
    entries.sort_by_key(|e| e.start);
}

/// Status of every entry, in the same order as `entries`
pub fn statuses(entries: &[ItineraryEntry], now: NaiveTime) -> Vec<EntryStatus> {
    let next_idx = entries
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.completed && e.start > now)
        .min_by_key(|(_, e)| e.start)
        .map(|(i, _)| i);

    entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            if e.completed {
                EntryStatus::Done
            } else if e.start <= now && now < e.end {
                EntryStatus::InProgress
            } else if now >= e.end && now >= e.start {
                EntryStatus::Past
            } else if Some(i) == next_idx {
                EntryStatus::Next
            } else {
                EntryStatus::Upcoming
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn entry(id: &str, start: NaiveTime, end: NaiveTime) -> ItineraryEntry {
        ItineraryEntry::new(id, format!("Entry {}", id), start, end, "Somewhere", Coords::new(41.38, 2.17), EntryKind::Walk)
    }

    #[test]
    fn test_toggle_completed_twice_restores_state() {
        let mut e = entry("1", at(10, 0), at(11, 0));
        let original = e.clone();
        e.toggle_completed();
        assert!(e.completed);
        e.toggle_completed();
        assert_eq!(e, original);
    }

    #[test]
    fn test_time_window() {
        assert_eq!(entry("1", at(8, 0), at(8, 0)).time_window(), "08:00");
        assert_eq!(entry("1", at(9, 45), at(10, 15)).time_window(), "09:45 - 10:15");
        assert_eq!(entry("1", at(9, 45), at(10, 15)).duration_minutes(), 30);
    }

    #[test]
    fn test_kind_serialization() {
        assert_eq!(EntryKind::Sightseeing.as_str(), "sightseeing");
        assert_eq!(EntryKind::from_str("walk"), EntryKind::Walk);
        assert_eq!(EntryKind::from_str("unknown"), EntryKind::Logistics);
        assert_eq!(serde_json::to_string(&EntryKind::Transport).unwrap(), "\"transport\"");
    }

    #[test]
    fn test_statuses() {
        let mut entries = vec![
            entry("a", at(9, 0), at(10, 0)),
            entry("b", at(10, 0), at(11, 0)),
            entry("c", at(11, 0), at(12, 0)),
            entry("d", at(12, 0), at(13, 0)),
        ];
        entries[2].completed = true;

        let s = statuses(&entries, at(10, 30));
        assert_eq!(s, vec![EntryStatus::Past, EntryStatus::InProgress, EntryStatus::Done, EntryStatus::Next]);
    }

    #[test]
    fn test_sort_by_start_is_stable() {
        let mut entries = vec![entry("late", at(12, 0), at(12, 0)), entry("x", at(8, 0), at(8, 0)), entry("y", at(8, 0), at(8, 0))];
        sort_by_start(&mut entries);
        let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y", "late"]);
    }

    #[test]
    fn test_audio_guide_blank_is_absent() {
        let mut e = entry("1", at(8, 0), at(9, 0));
        assert!(!e.has_audio_guide());
        e.audio_guide = Some("  ".into());
        assert!(!e.has_audio_guide());
        e.audio_guide = Some("Hola".into());
        assert!(e.has_audio_guide());
    }
}
