//! Repository Layer
//!
//! Persistence of preferences, waypoints and expenses, plus the optional
//! port-call profile.

mod memory;
mod traits;
mod trip_repo;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
pub use traits::KeyValueStore;
pub use trip_repo::{TripRepository, CONFIG_KEY, EXPENSES_KEY, PREFERENCES_KEY, WAYPOINTS_KEY};
