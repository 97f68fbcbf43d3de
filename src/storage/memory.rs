//! In-memory storage backend, used by tests and throwaway sessions.

use super::Storage;
use crate::store::Db;
use crate::{Error, Result};
use std::sync::Mutex;

/// Storage backend that keeps the database in memory.
#[derive(Default)]
pub struct MemoryStorage {
    db: Mutex<Option<Db>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a save has been observed, for asserting flush behavior
    /// in tests.
    pub fn saved(&self) -> bool {
        self.db.lock().is_ok_and(|g| g.is_some())
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Db> {
        let guard = self.db.lock().map_err(|_| Error::OperationFailed {
            operation: "load_db".to_string(),
            cause: "storage mutex poisoned".to_string(),
        })?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, db: &Db) -> Result<()> {
        let mut guard = self.db.lock().map_err(|_| Error::OperationFailed {
            operation: "save_db".to_string(),
            cause: "storage mutex poisoned".to_string(),
        })?;
        *guard = Some(db.clone());
        Ok(())
    }
}
