//! Browser persistence for the plan list.
//!
//! This module provides the `localStorage` implementation of
//! [`PlanStorage`] and a switchable adapter the plan context uses.

use wanderlust_core::constants::PLANS_STORAGE_KEY;
use wanderlust_core::{MemoryStorage, Plan, PlanStorage, decode_plans, encode_plans};

use crate::dom;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Plan list kept under a single `localStorage` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStoragePlans {
    key: String,
}

impl Default for LocalStoragePlans {
    fn default() -> Self {
        Self::with_key(PLANS_STORAGE_KEY)
    }
}

impl LocalStoragePlans {
    #[must_use]
    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Drop the stored entry entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if `localStorage` is unavailable.
    pub fn clear(&self) -> Result<(), WebStorageError> {
        let storage = dom::local_storage().map_err(storage_error)?;
        storage.remove_item(&self.key).map_err(storage_error)
    }
}

fn storage_error(value: wasm_bindgen::JsValue) -> WebStorageError {
    WebStorageError::Storage(dom::js_error_message(&value))
}

impl PlanStorage for LocalStoragePlans {
    type Error = WebStorageError;

    fn load(&self) -> Result<Option<Vec<Plan>>, Self::Error> {
        let storage = dom::local_storage().map_err(storage_error)?;
        match storage.get_item(&self.key).map_err(storage_error)? {
            Some(raw) => Ok(Some(decode_plans(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, plans: &[Plan]) -> Result<(), Self::Error> {
        let raw = encode_plans(plans)?;
        let storage = dom::local_storage().map_err(storage_error)?;
        storage.set_item(&self.key, &raw).map_err(storage_error)
    }
}

/// Storage backing the plan context: the browser in production, memory
/// in native tests and previews.
#[derive(Debug, Clone)]
pub enum WebPlanStorage {
    Local(LocalStoragePlans),
    Memory(MemoryStorage),
}

impl Default for WebPlanStorage {
    fn default() -> Self {
        Self::Local(LocalStoragePlans::default())
    }
}

impl PlanStorage for WebPlanStorage {
    type Error = WebStorageError;

    fn load(&self) -> Result<Option<Vec<Plan>>, Self::Error> {
        match self {
            Self::Local(local) => local.load(),
            Self::Memory(memory) => memory
                .load()
                .map_err(|err| WebStorageError::Storage(err.to_string())),
        }
    }

    fn save(&self, plans: &[Plan]) -> Result<(), Self::Error> {
        match self {
            Self::Local(local) => local.save(plans),
            Self::Memory(memory) => memory
                .save(plans)
                .map_err(|err| WebStorageError::Storage(err.to_string())),
        }
    }
}
