//! Plan persistence in a JSON file on disk.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wanderlust_core::{Plan, PlanStorage, decode_plans};

#[derive(Debug, thiserror::Error)]
pub enum FileStorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The plan list stored as a JSON array in a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlanStorage {
    path: PathBuf,
}

impl FilePlanStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> FileStorageError {
        FileStorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PlanStorage for FilePlanStorage {
    type Error = FileStorageError;

    fn load(&self) -> Result<Option<Vec<Plan>>, Self::Error> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(self.io_error(err)),
        };
        Ok(Some(decode_plans(&raw)?))
    }

    fn save(&self, plans: &[Plan]) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        let raw = serde_json::to_string_pretty(plans)?;
        fs::write(&self.path, raw).map_err(|err| self.io_error(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::temp_path;
    use wanderlust_core::{Destination, PlanStore, Region};

    #[test]
    fn missing_file_loads_none() {
        let storage = FilePlanStorage::new(temp_path("missing").join("plans.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn saves_create_parent_dirs_and_reload() {
        let path = temp_path("nested").join("deeper").join("plans.json");
        let storage = FilePlanStorage::new(&path);
        let mut store = PlanStore::open(storage.clone());
        store.add_plan(Destination::new("Hampi", Region::Karnataka, 88, "Adventurous"));

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded, store.plans());
        assert!(path.exists());
    }

    #[test]
    fn garbage_file_is_a_serialization_error() {
        let path = temp_path("garbage");
        fs::write(&path, "definitely not json").unwrap();
        let storage = FilePlanStorage::new(&path);
        assert!(matches!(
            storage.load(),
            Err(FileStorageError::Serialization(_))
        ));
        assert!(PlanStore::open(storage).is_empty());
    }
}
