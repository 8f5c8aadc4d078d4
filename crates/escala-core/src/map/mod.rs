//! Map layer planning
//!
//! Pure descriptions of what the map shows. The Leaflet view applies them.

mod features;
mod sync;

pub use features::{
    directions_url, escape_html, navigation_url, sos_share_url, static_features, waypoint_features, MapFeature,
    FOCUS_DURATION, FOCUS_ZOOM,
};
pub use sync::{FlyTo, IndicatorOp, PositionIndicator, WaypointLayerSync};
