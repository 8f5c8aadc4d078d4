//! Static and user layers of the map, as plain data the view turns into
//! Leaflet layers.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::{Coords, CustomWaypoint, GpxWaypoint, ItineraryEntry, UserLocation};

/// Zoom used when focusing a single location
pub const FOCUS_ZOOM: f64 = 16.0;
/// Fly-to animation length, seconds
pub const FOCUS_DURATION: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub enum MapFeature {
    /// Itinerary entry pin with a popup and navigation link
    ActivityMarker { id: String, coords: Coords, popup_html: String },
    /// Red circle for a curated GPX point
    GpxPoint { coords: Coords, popup_html: String },
    /// Dashed planned walking line
    Track { points: Vec<Coords> },
    /// Traveller-saved point
    UserWaypoint { id: String, coords: Coords, popup_html: String },
}

/// Escape text for inclusion in popup HTML
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Curated link when the entry has one, otherwise a directions URL
pub fn navigation_url(entry: &ItineraryEntry) -> String {
    match &entry.navigation_url {
        Some(url) => url.clone(),
        None => directions_url(&entry.coords),
    }
}

pub fn directions_url(coords: &Coords) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={},{}", coords.lat, coords.lng)
}

/// WhatsApp share link carrying the message and, when known, a maps link
pub fn sos_share_url(message: &str, location: Option<&UserLocation>) -> String {
    let text = match location {
        Some(loc) => format!(
            "{} https://www.google.com/maps?q={:.6},{:.6}",
            message, loc.coords.lat, loc.coords.lng
        ),
        None => message.to_string(),
    };
    format!("https://wa.me/?text={}", utf8_percent_encode(&text, NON_ALPHANUMERIC))
}

fn activity_popup(entry: &ItineraryEntry) -> String {
    format!(
        concat!(
            r#"<div class="map-popup">"#,
            r#"<h3 class="map-popup-title">{}</h3>"#,
            r#"<p class="map-popup-text">{}</p>"#,
            r#"<a class="map-popup-nav" href="{}" target="_blank" rel="noopener">INICIAR RUTA</a>"#,
            "</div>"
        ),
        escape_html(&entry.title),
        escape_html(&entry.description),
        escape_html(&navigation_url(entry)),
    )
}

/// Activity markers, GPX points and the planned track, in draw order
pub fn static_features(entries: &[ItineraryEntry], gpx: &[GpxWaypoint], track: &[Coords]) -> Vec<MapFeature> {
    let markers = entries.iter().map(|e| MapFeature::ActivityMarker {
        id: e.id.clone(),
        coords: e.coords,
        popup_html: activity_popup(e),
    });
    let points = gpx.iter().map(|w| MapFeature::GpxPoint {
        coords: w.coords,
        popup_html: format!(r#"<div class="map-popup-gpx">{}</div>"#, escape_html(&w.name)),
    });
    let track = (track.len() > 1).then(|| MapFeature::Track { points: track.to_vec() });
    markers.chain(points).chain(track).collect()
}

pub fn waypoint_features(waypoints: &[CustomWaypoint]) -> Vec<MapFeature> {
    waypoints
        .iter()
        .map(|w| {
            let description = w
                .description
                .as_deref()
                .map(|d| format!(r#"<p class="map-popup-text">{}</p>"#, escape_html(d)))
                .unwrap_or_default();
            MapFeature::UserWaypoint {
                id: w.id.clone(),
                coords: w.coords,
                popup_html: format!(
                    r#"<div class="map-popup"><h3 class="map-popup-title">{}</h3>{}<a class="map-popup-nav" href="{}" target="_blank" rel="noopener">IR</a></div>"#,
                    escape_html(&w.title),
                    description,
                    escape_html(&directions_url(&w.coords)),
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{barcelona_itinerary, gpx_waypoints, planned_track};

    #[test]
    fn test_static_features_cover_all_sources() {
        let entries = barcelona_itinerary();
        let features = static_features(&entries, &gpx_waypoints(), &planned_track());
        let markers = features.iter().filter(|f| matches!(f, MapFeature::ActivityMarker { .. })).count();
        let gpx = features.iter().filter(|f| matches!(f, MapFeature::GpxPoint { .. })).count();
        assert_eq!(markers, 13);
        assert_eq!(gpx, 14);
        assert!(matches!(features.last(), Some(MapFeature::Track { .. })));
    }

    #[test]
    fn test_navigation_prefers_curated_link() {
        let entries = barcelona_itinerary();
        assert_eq!(navigation_url(&entries[2]), "https://maps.app.goo.gl/pcdyeNVY2btj4WPS8");
        assert_eq!(
            navigation_url(&entries[0]),
            "https://www.google.com/maps/dir/?api=1&destination=41.362895,2.181948"
        );
    }

    #[test]
    fn test_popup_escapes_user_text() {
        let wp = CustomWaypoint {
            id: "wp-1".into(),
            title: "<b>Bar & co</b>".into(),
            description: None,
            coords: Coords::new(41.0, 2.0),
            timestamp: 0,
        };
        let features = waypoint_features(&[wp]);
        let MapFeature::UserWaypoint { popup_html, .. } = &features[0] else { panic!("expected waypoint") };
        assert!(popup_html.contains("&lt;b&gt;Bar &amp; co&lt;/b&gt;"));
    }

    #[test]
    fn test_sos_url_includes_position() {
        let loc = UserLocation::new(41.38, 2.17, Some(12.0));
        let url = sos_share_url("SOS Barcelona", Some(&loc));
        assert!(url.starts_with("https://wa.me/?text=SOS%20Barcelona%20https%3A%2F%2F"));
        assert!(url.contains("41%2E380000%2C2%2E170000"));
        assert_eq!(sos_share_url("SOS", None), "https://wa.me/?text=SOS");
    }
}
