//! Waypoints
//!
//! Curated GPX points that ship with the route, and points the traveller
//! saves during the day.

use serde::{Deserialize, Serialize};

use super::coords::Coords;
use super::entity::{DomainError, DomainResult, Entity};

/// Named point from the planned GPX route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpxWaypoint {
    pub name: String,
    pub coords: Coords,
}

/// A user-added point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomWaypoint {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub coords: Coords,
    /// Creation time, epoch milliseconds
    pub timestamp: i64,
}

/// Form input for a new waypoint, validated before it becomes a record
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointDraft {
    pub title: String,
    pub description: String,
    pub coords: Coords,
}

impl WaypointDraft {
    pub fn into_waypoint(self, id: String, timestamp: i64) -> DomainResult<CustomWaypoint> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("waypoint title is empty".to_string()));
        }
        let description = Some(self.description.trim()).filter(|d| !d.is_empty()).map(str::to_string);
        Ok(CustomWaypoint {
            id,
            title: title.to_string(),
            description,
            coords: self.coords,
            timestamp,
        })
    }
}

impl Entity for CustomWaypoint {
    fn id(&self) -> &str {
        &self.id
    }
}
