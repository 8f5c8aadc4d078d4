//! Reconciliation of the live layers against the one mutable map view.
//!
//! The static layer is drawn once per map mount and never reconciled. Per
//! mount, the waypoint layer redraws only when the set of saved points
//! changes and the position indicator is created once and then moved.

use crate::domain::{Coords, CustomWaypoint, UserLocation};

use super::features::{waypoint_features, MapFeature, FOCUS_DURATION, FOCUS_ZOOM};

/// Tracks what the waypoint layer currently shows
#[derive(Debug, Clone, Default)]
pub struct WaypointLayerSync {
    shown: Option<Vec<(String, [u64; 2])>>,
}

impl WaypointLayerSync {
    fn fingerprint(waypoints: &[CustomWaypoint]) -> Vec<(String, [u64; 2])> {
        waypoints
            .iter()
            .map(|w| (w.id.clone(), [w.coords.lat.to_bits(), w.coords.lng.to_bits()]))
            .collect()
    }

    /// Features to redraw, or `None` when the layer is already current
    pub fn update(&mut self, waypoints: &[CustomWaypoint]) -> Option<Vec<MapFeature>> {
        let fingerprint = Self::fingerprint(waypoints);
        if self.shown.as_ref() == Some(&fingerprint) {
            return None;
        }
        self.shown = Some(fingerprint);
        Some(waypoint_features(waypoints))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorOp {
    /// First fix: add marker and accuracy circle
    Create { coords: Coords, accuracy: f64 },
    /// Later fixes: move both; radius only changes when reported
    Move { coords: Coords, accuracy: Option<f64> },
}

/// Lifecycle of the pulsing user-position marker
#[derive(Debug, Clone, Default)]
pub struct PositionIndicator {
    created: bool,
}

impl PositionIndicator {
    pub fn update(&mut self, location: &UserLocation) -> IndicatorOp {
        if self.created {
            IndicatorOp::Move { coords: location.coords, accuracy: location.accuracy }
        } else {
            self.created = true;
            IndicatorOp::Create { coords: location.coords, accuracy: location.accuracy.unwrap_or(0.0) }
        }
    }
}

/// Animated camera move to a focused location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlyTo {
    pub target: Coords,
    pub zoom: f64,
    pub duration: f64,
}

impl FlyTo {
    pub fn focus(target: Coords) -> Self {
        Self { target, zoom: FOCUS_ZOOM, duration: FOCUS_DURATION }
    }
}
