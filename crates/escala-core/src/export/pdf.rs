//! PDF rendering of laid-out pages with the two standard Helvetica faces.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::debug;

use super::layout::{LineStyle, Page, FOOTER_SPACE, LINE_HEIGHT, MARGIN, PAGE_HEIGHT, PAGE_WIDTH};

pub const DOWNLOAD_NAME: &str = "escala-itinerario.pdf";

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Map text onto WinAnsiEncoding bytes; unmappable characters become `?`
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}

fn style_font(style: LineStyle) -> (Name<'static>, f32) {
    match style {
        LineStyle::Title => (BOLD, 16.0),
        LineStyle::Heading => (BOLD, 11.0),
        LineStyle::Body | LineStyle::Blank => (REGULAR, 10.0),
    }
}

fn page_content(page: &Page, number: usize, total: usize) -> Vec<u8> {
    let mut content = Content::new();
    let mut y = PAGE_HEIGHT - MARGIN;
    for line in &page.lines {
        y -= LINE_HEIGHT;
        if line.style == LineStyle::Blank {
            continue;
        }
        let (font, size) = style_font(line.style);
        content.begin_text();
        content.set_font(font, size);
        content.next_line(MARGIN, y);
        content.show(Str(&encode_win_ansi(&line.text)));
        content.end_text();
    }

    let footer = format!("Página {number} / {total}");
    content.begin_text();
    content.set_font(REGULAR, 8.0);
    content.next_line(PAGE_WIDTH - MARGIN - 60.0, MARGIN - FOOTER_SPACE);
    content.show(Str(&encode_win_ansi(&footer)));
    content.end_text();
    content.finish()
}

/// Serialize the pages into a complete PDF document
pub fn render_pdf(pages: &[Page], title: &str) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let mut next = || alloc.bump();

    let catalog_id = next();
    let tree_id = next();
    let info_id = next();
    let regular_id = next();
    let bold_id = next();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (next(), next())).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().map(|(page, _)| *page))
        .count(page_ids.len() as i32);
    pdf.document_info(info_id).title(TextStr(title));
    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let total = pages.len();
    for (index, (page, (page_id, content_id))) in pages.iter().zip(&page_ids).enumerate() {
        let mut writer = pdf.page(*page_id);
        writer.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
        writer.parent(tree_id);
        writer.contents(*content_id);
        writer.resources().fonts().pair(REGULAR, regular_id).pair(BOLD, bold_id);
        writer.finish();

        pdf.stream(*content_id, &page_content(page, index + 1, total));
    }

    let bytes = pdf.finish();
    debug!(pages = total, bytes = bytes.len(), "rendered itinerary pdf");
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::barcelona_itinerary;
    use crate::config::TripConfig;
    use crate::export::layout::layout_itinerary;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_win_ansi_mapping() {
        assert_eq!(encode_win_ansi("Página"), b"P\xe1gina".to_vec());
        assert_eq!(encode_win_ansi("€4.50"), b"\x804.50".to_vec());
        assert_eq!(encode_win_ansi("a — b"), b"a \x97 b".to_vec());
        assert_eq!(encode_win_ansi("⚠ ok"), b"? ok".to_vec());
    }

    #[test]
    fn test_render_produces_pdf_with_all_pages() {
        let pages = layout_itinerary(&barcelona_itinerary(), &TripConfig::default());
        let bytes = render_pdf(&pages, "Itinerario");
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Helvetica-Bold"));
        assert!(contains(&bytes, format!("/Count {}", pages.len()).as_bytes()));
    }
}
