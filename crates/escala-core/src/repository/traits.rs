//! Repository Layer - Core Traits
//!
//! Abstract key-value storage the trip records are persisted into.
//! The browser build uses local storage; tests use `MemoryStore`.

use crate::domain::DomainResult;

/// Raw text storage keyed by string
pub trait KeyValueStore {
    /// Stored text for `key`, `None` when absent
    fn get_raw(&self, key: &str) -> Option<String>;

    /// Replace the value at `key`
    fn set_raw(&mut self, key: &str, value: &str) -> DomainResult<()>;
}
