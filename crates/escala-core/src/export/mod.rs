//! Printable itinerary export

mod layout;
mod pdf;

pub use layout::{layout_itinerary, lines_per_page, wrap_text, Line, LineStyle, Page};
pub use pdf::{encode_win_ansi, render_pdf, DOWNLOAD_NAME};

use crate::config::TripConfig;
use crate::domain::ItineraryEntry;

/// Lay out and render the itinerary in one step
pub fn itinerary_pdf(entries: &[ItineraryEntry], config: &TripConfig) -> Vec<u8> {
    let pages = layout_itinerary(entries, config);
    render_pdf(&pages, &format!("Itinerario {}", config.port_name))
}
