//! Local Storage
//!
//! `KeyValueStore` over the browser's local storage. Values are stored as
//! the JSON text the repository produces.

use escala_core::domain::{DomainError, DomainResult};
use escala_core::repository::{KeyValueStore, TripRepository};
use gloo_storage::{LocalStorage, Storage};

use super::js_err;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_raw(&mut self, key: &str, value: &str) -> DomainResult<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("{}: {}", key, js_err(e))))
    }
}

pub fn browser_repository() -> TripRepository<BrowserStore> {
    TripRepository::new(BrowserStore)
}
