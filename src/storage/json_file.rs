//! JSON-file storage backend.
//!
//! Stores the annotation database as one pretty-printed JSON file,
//! creating parent directories on first save.

use super::Storage;
use crate::store::Db;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed storage: one JSON file per project.
pub struct JsonFileStorage {
    /// Path of the database file.
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend for the given database file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the database file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Db> {
        if !self.path.exists() {
            return Ok(Db::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| Error::OperationFailed {
            operation: "load_db".to_string(),
            cause: e.to_string(),
        })?;
        serde_json::from_str(&raw).map_err(|e| Error::OperationFailed {
            operation: "parse_db".to_string(),
            cause: e.to_string(),
        })
    }

    fn save(&self, db: &Db) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::OperationFailed {
                operation: "create_db_dir".to_string(),
                cause: e.to_string(),
            })?;
        }
        let raw = serde_json::to_string_pretty(db).map_err(|e| Error::OperationFailed {
            operation: "serialize_db".to_string(),
            cause: e.to_string(),
        })?;
        fs::write(&self.path, raw).map_err(|e| Error::OperationFailed {
            operation: "save_db".to_string(),
            cause: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpaceKind;

    #[test]
    fn test_missing_file_loads_empty_db() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("annotations.json"));
        let db = storage.load().unwrap();
        assert!(db.terms.is_empty());
        assert_eq!(db.current_interpretation_number, 0);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("annotations.json"));

        let mut db = Db::default();
        db.spaces.standard_space(SpaceKind::Time, "t0", 0).unwrap();
        db.current_interpretation_number = 1;
        storage.save(&db).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded, db);
    }
}
