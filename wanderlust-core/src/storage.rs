//! Persistence seam for the plan list.
//!
//! Platforms provide a [`PlanStorage`] (browser `localStorage`, a JSON file,
//! …). [`MemoryStorage`] keeps the serialized list in memory and is what the
//! tests use.
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::plan::Plan;

/// Load/save of the full plan list as one unit.
pub trait PlanStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the persisted list. `Ok(None)` means nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored state cannot be read or parsed.
    fn load(&self) -> Result<Option<Vec<Plan>>, Self::Error>;

    /// Replace the persisted list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be serialized or written.
    fn save(&self, plans: &[Plan]) -> Result<(), Self::Error>;
}

/// Serialize a plan list to the persisted JSON array layout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_plans(plans: &[Plan]) -> Result<String, serde_json::Error> {
    serde_json::to_string(plans)
}

/// Parse the persisted JSON array layout.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of plans.
pub fn decode_plans(raw: &str) -> Result<Vec<Plan>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryStorageError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage is read-only")]
    ReadOnly,
}

/// In-memory storage holding the serialized list. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    raw: Rc<RefCell<Option<String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from arbitrary stored text, e.g. a corrupted entry.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let storage = Self::default();
        *storage.raw.borrow_mut() = Some(raw.into());
        storage
    }

    /// The stored text as last written.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }

    /// Make subsequent saves fail, like a full storage quota.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl PlanStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn load(&self) -> Result<Option<Vec<Plan>>, Self::Error> {
        match self.raw.borrow().as_deref() {
            Some(raw) => Ok(Some(decode_plans(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, plans: &[Plan]) -> Result<(), Self::Error> {
        if self.read_only.get() {
            return Err(MemoryStorageError::ReadOnly);
        }
        let encoded = encode_plans(plans)?;
        *self.raw.borrow_mut() = Some(encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_loads_none() {
        assert!(MemoryStorage::new().load().unwrap().is_none());
    }

    #[test]
    fn clones_share_the_same_slot() {
        let storage = MemoryStorage::new();
        let alias = storage.clone();
        storage.save(&[]).unwrap();
        assert_eq!(alias.raw().as_deref(), Some("[]"));
        assert_eq!(alias.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn corrupt_text_surfaces_as_error() {
        let storage = MemoryStorage::with_raw("{not json");
        assert!(matches!(
            storage.load(),
            Err(MemoryStorageError::Serialization(_))
        ));
    }

    #[test]
    fn read_only_rejects_saves() {
        let storage = MemoryStorage::new();
        storage.set_read_only(true);
        assert!(matches!(storage.save(&[]), Err(MemoryStorageError::ReadOnly)));
        assert!(storage.raw().is_none());
    }
}
