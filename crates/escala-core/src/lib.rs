//! Escala Core
//!
//! Layered architecture:
//! - domain: records of the day and their validation rules
//! - repository: persisted records over a key-value store
//! - state: the owned trip state and its actions
//! - everything else: pure views over the state (notifications, budget,
//!   countdown, summary, weather, map layers, speech, export)

pub mod budget;
pub mod catalog;
pub mod config;
pub mod countdown;
pub mod domain;
pub mod export;
pub mod map;
pub mod notify;
pub mod repository;
pub mod speech;
pub mod state;
pub mod summary;
pub mod weather;

pub use config::TripConfig;
pub use domain::{DomainError, DomainResult};
pub use state::{Action, Effect, TripState};
