//! Frontend Models
//!
//! View-only state that has no place in the core trip state.

use escala_core::domain::Coords;
use escala_core::weather::WeatherData;

/// Bottom navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Timeline,
    Map,
    Budget,
    Guide,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Timeline, Tab::Map, Tab::Budget, Tab::Guide];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Timeline => "Itinerario",
            Tab::Map => "Mapa",
            Tab::Budget => "Gastos",
            Tab::Guide => "Guía",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Timeline => "🕒",
            Tab::Map => "🗺️",
            Tab::Budget => "💶",
            Tab::Guide => "ℹ️",
        }
    }
}

/// Weather panel lifecycle; any fetch failure ends in `Offline`
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherPanel {
    #[default]
    Loading,
    Ready(WeatherData),
    Offline,
}

/// Request for the map to fly somewhere. `seq` makes repeated requests
/// for the same spot distinct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusRequest {
    pub seq: u32,
    pub target: Coords,
}

impl FocusRequest {
    pub fn next(previous: Option<FocusRequest>, target: Coords) -> Self {
        Self { seq: previous.map_or(1, |p| p.seq.wrapping_add(1)), target }
    }
}

/// User-created records that can be removed from their list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedRecord {
    Expense,
    Waypoint,
}

/// Longest record title quoted in a removal prompt, in characters
const PROMPT_LABEL_MAX: usize = 24;

impl SavedRecord {
    fn noun(&self) -> &'static str {
        match self {
            SavedRecord::Expense => "el gasto",
            SavedRecord::Waypoint => "el punto",
        }
    }

    fn quoted(label: &str) -> String {
        let label = label.trim();
        if label.chars().count() <= PROMPT_LABEL_MAX {
            return format!("«{}»", label);
        }
        let cut: String = label.chars().take(PROMPT_LABEL_MAX - 1).collect();
        format!("«{}…»", cut.trim_end())
    }

    /// Tooltip of the remove button
    pub fn remove_label(&self, label: &str) -> String {
        format!("Borrar {} {}", self.noun(), Self::quoted(label))
    }

    pub fn confirm_prompt(&self, label: &str) -> String {
        format!("¿Borrar {} {}?", self.noun(), Self::quoted(label))
    }
}

/// Tab to switch to when the map is asked to focus; `None` if already there
pub fn tab_for_focus(current: Tab) -> Option<Tab> {
    (current != Tab::Map).then_some(Tab::Map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_have_distinct_labels() {
        let labels: std::collections::HashSet<_> = Tab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(Tab::default(), Tab::Timeline);
    }

    #[test]
    fn test_focus_from_map_keeps_tab() {
        assert_eq!(tab_for_focus(Tab::Map), None);
        assert_eq!(tab_for_focus(Tab::Timeline), Some(Tab::Map));
        assert_eq!(tab_for_focus(Tab::Budget), Some(Tab::Map));
    }

    #[test]
    fn test_removal_prompts_name_the_record() {
        assert_eq!(SavedRecord::Expense.confirm_prompt(" Agua "), "¿Borrar el gasto «Agua»?");
        assert_eq!(SavedRecord::Waypoint.remove_label("Churrería"), "Borrar el punto «Churrería»");
    }

    #[test]
    fn test_long_titles_are_shortened_in_prompts() {
        let prompt = SavedRecord::Waypoint.confirm_prompt("Mirador del Parc de Montjuïc, cerca del castillo");
        assert_eq!(prompt, "¿Borrar el punto «Mirador del Parc de Mon…»?");
    }

    #[test]
    fn test_focus_requests_are_sequenced() {
        let spot = Coords::new(41.4, 2.17);
        let first = FocusRequest::next(None, spot);
        let second = FocusRequest::next(Some(first), spot);
        assert_eq!(first.seq, 1);
        assert_eq!(second.seq, 2);
        assert_ne!(first, second);
    }
}
