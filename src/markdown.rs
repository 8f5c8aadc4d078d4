//! Inline Markdown
//!
//! Entry descriptions and key details carry `**bold**`, `*em*` and the odd
//! link. Rendered with pulldown-cmark, with:
//! - raw HTML shown as text
//! - images dropped (alt text included)
//! - links opened in a new tab

use pulldown_cmark::{html::push_html, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd};

enum State {
    Normal,
    InImage { dropped_depth: usize },
}

/// Render Markdown for inline use (outer `<p>` stripped)
pub fn render_inline(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH);
    let mut html = String::new();
    push_html(&mut html, transform_events(parser).into_iter());

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                Event::Start(Tag::Image { .. }) => state = State::InImage { dropped_depth: 0 },
                Event::Start(Tag::Link { link_type: LinkType::Email, dest_url, title, id }) => {
                    events.push(Event::Start(Tag::Link { link_type: LinkType::Email, dest_url, title, id }));
                }
                Event::Start(Tag::Link { dest_url, title, .. }) => {
                    let html = format!(
                        r#"<a href="{}" title="{}" target="_blank" rel="noopener">"#,
                        escape_attr(&dest_url),
                        escape_attr(&title)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                }
                Event::End(TagEnd::Link) => events.push(Event::Html(CowStr::from("</a>"))),
                other => events.push(other),
            },
            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emphasis_renders_inline() {
        assert_eq!(
            render_inline("Billete **T-Casual** o *Hola BCN*"),
            "Billete <strong>T-Casual</strong> o <em>Hola BCN</em>"
        );
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_inline("hola <script>x</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_links_open_in_new_tab_and_images_drop() {
        let html = render_inline("[mapa](https://maps.example/a) ![foto](x.png)");
        assert!(html.contains(r#"<a href="https://maps.example/a" title="" target="_blank" rel="noopener">mapa</a>"#));
        assert!(!html.contains("img"));
        assert!(!html.contains("foto"));
    }
}
