//! Text layout for the printable itinerary: wrapped lines grouped per entry
//! and flowed onto A4 pages.

use crate::config::TripConfig;
use crate::domain::{sort_by_start, ItineraryEntry};

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 50.0;
pub const LINE_HEIGHT: f32 = 14.0;
/// Space kept at the bottom for the page footer
pub const FOOTER_SPACE: f32 = 20.0;
/// Characters per wrapped body line at 10pt Helvetica
pub const WRAP_WIDTH: usize = 90;

pub fn lines_per_page() -> usize {
    ((PAGE_HEIGHT - 2.0 * MARGIN - FOOTER_SPACE) / LINE_HEIGHT) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    Heading,
    Body,
    Blank,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self { text: text.into(), style }
    }

    fn blank() -> Self {
        Self::new(LineStyle::Blank, "")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<Line>,
}

/// Greedy word wrap by character count. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Drop inline emphasis markers
fn plain(text: &str) -> String {
    text.replace("**", "").replace('*', "")
}

fn push_wrapped(block: &mut Vec<Line>, prefix: &str, text: &str) {
    let text = plain(text);
    if text.trim().is_empty() {
        return;
    }
    for line in wrap_text(&format!("{prefix}{text}"), WRAP_WIDTH) {
        block.push(Line::new(LineStyle::Body, line));
    }
}

fn entry_block(entry: &ItineraryEntry) -> Vec<Line> {
    let mut block = Vec::new();
    let marker = if entry.critical { " (!)" } else { "" };
    for line in wrap_text(&format!("{}  {}{}", entry.time_window(), entry.title, marker), WRAP_WIDTH - 10) {
        block.push(Line::new(LineStyle::Heading, line));
    }
    let location = match &entry.end_location_name {
        Some(end) => format!("{} - {}", entry.location_name, end),
        None => entry.location_name.clone(),
    };
    push_wrapped(&mut block, &format!("{} · ", entry.kind.label()), &location);
    push_wrapped(&mut block, "", &entry.description);
    push_wrapped(&mut block, "Detalles: ", &entry.key_details);
    if entry.price.is_positive() {
        block.push(Line::new(LineStyle::Body, format!("Precio: {}", entry.price)));
    }
    if let Some(note) = &entry.contingency_note {
        push_wrapped(&mut block, "Plan B: ", note);
    }
    block.push(Line::blank());
    block
}

/// Flow the itinerary onto pages, in start-time order
///
/// An entry block moves whole to the next page when it does not fit in
/// what is left, unless it is taller than a page on its own.
pub fn layout_itinerary(entries: &[ItineraryEntry], config: &TripConfig) -> Vec<Page> {
    let mut sorted = entries.to_vec();
    sort_by_start(&mut sorted);

    let per_page = lines_per_page();
    let mut pages = vec![Page::default()];
    let header = vec![
        Line::new(LineStyle::Title, format!("Itinerario - {}", config.port_name)),
        Line::new(
            LineStyle::Body,
            format!(
                "{} · A bordo: {} · Zarpe: {}",
                config.date_label,
                config.onboard_time.format("%H:%M"),
                config.departure_time.format("%H:%M")
            ),
        ),
        Line::blank(),
    ];

    for block in std::iter::once(header).chain(sorted.iter().map(entry_block)) {
        let used = pages.last().map_or(0, |p| p.lines.len());
        if used > 0 && used + block.len() > per_page && block.len() <= per_page {
            pages.push(Page::default());
        }
        for line in block {
            if pages.last().map_or(0, |p| p.lines.len()) >= per_page {
                pages.push(Page::default());
            }
            if let Some(page) = pages.last_mut() {
                page.lines.push(line);
            }
        }
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::barcelona_itinerary;

    #[test]
    fn test_wrap_respects_width() {
        let text = "Compra la tarjeta Hola Barcelona en la máquina del metro antes de bajar al andén";
        let lines = wrap_text(text, 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("ab abcdefghij", 4);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_layout_paginates_within_page_height() {
        let pages = layout_itinerary(&barcelona_itinerary(), &TripConfig::default());
        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| !p.lines.is_empty() && p.lines.len() <= lines_per_page()));
        assert_eq!(pages[0].lines[0].style, LineStyle::Title);
    }

    #[test]
    fn test_layout_is_time_ordered() {
        let mut entries = barcelona_itinerary();
        entries.reverse();
        let pages = layout_itinerary(&entries, &TripConfig::default());
        let headings: Vec<&str> = pages
            .iter()
            .flat_map(|p| p.lines.iter())
            .filter(|l| l.style == LineStyle::Heading)
            .map(|l| l.text.as_str())
            .collect();
        assert!(headings[0].starts_with("08:00"));
        assert!(headings.last().is_some_and(|h| h.contains("Zarpe")));
    }

    #[test]
    fn test_markdown_markers_are_stripped() {
        let mut entry = barcelona_itinerary().remove(0);
        entry.key_details = "Llevar **pasaporte** y *tarjeta*".into();
        let block = entry_block(&entry);
        assert!(block.iter().any(|l| l.text == "Detalles: Llevar pasaporte y tarjeta"));
    }
}
