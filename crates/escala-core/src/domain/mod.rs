//! Domain Layer
//!
//! Records of the port-call day and their validation rules.
//! No platform dependencies; everything here runs natively in tests.

mod coords;
mod entity;
mod expense;
mod itinerary;
mod money;
mod phrase;
mod preferences;
mod waypoint;

pub use coords::{format_distance, path_length, Coords, UserLocation};
pub use entity::{position_of, DomainError, DomainResult, Entity};
pub use expense::{CustomExpense, ExpenseCategory, ExpenseDraft};
pub use itinerary::{sort_by_start, statuses, EntryKind, EntryStatus, ItineraryEntry};
pub use money::Cents;
pub use phrase::Pronunciation;
pub use preferences::{lead_time_valid, NotificationPreferences, LEAD_TIME_CHOICES, MAX_LEAD_TIME};
pub use waypoint::{CustomWaypoint, GpxWaypoint, WaypointDraft};
