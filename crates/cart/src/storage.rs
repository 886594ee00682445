//! Durable client-side storage for the cart collection.
//!
//! The persisted layout is a single JSON array of line items under a
//! well-known key (`cart`) in a key-value data directory - the serialized
//! form round-trips through the same [`LineItem`] structure the in-memory
//! collection uses. Writes are small and infrequent (one per mutation), so
//! the backend is plain synchronous file I/O invoked from inside the actor
//! turn.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use crate::model::LineItem;

/// Well-known storage key for the serialized cart.
pub const CART_KEY: &str = "cart";

/// Errors that can occur reading or writing the persisted store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem read/write failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Persisted state did not deserialize into the cart structure.
    #[error("corrupt persisted state: {0}")]
    Corrupt(String),
}

/// Durable key-value storage for the cart collection.
///
/// Implementations must be write-through safe: after `save` returns, a
/// subsequent `load` (from this or any other handle over the same backing
/// store) observes exactly the saved items.
pub trait CartStorage: Send + Sync {
    /// Load the persisted line items, or `None` when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` when persisted state fails to
    /// deserialize, `StorageError::Io` on read failures.
    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError>;

    /// Persist the given line items, replacing any previous state.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` on write failures.
    fn save(&self, items: &[LineItem]) -> Result<(), StorageError>;

    /// Remove the persisted state entirely.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` on delete failures.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed storage: one `<key>.json` file per key in a data directory.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage for the cart key inside `data_dir`.
    ///
    /// The directory is created on first save, not here.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{CART_KEY}.json")),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let items = serde_json::from_str(&raw)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        Ok(Some(items))
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string(items)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), count = items.len(), "Persisted cart");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage for tests.
///
/// Holds the serialized JSON rather than the items themselves so tests
/// exercise the same round-trip the file backend does.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    raw: Mutex<Option<String>>,
}

impl MemoryStorage {
    /// Create empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<LineItem>>, StorageError> {
        let guard = self.raw.lock().map_or_else(|e| e.into_inner(), |g| g);
        guard
            .as_deref()
            .map(|raw| {
                serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))
            })
            .transpose()
    }

    fn save(&self, items: &[LineItem]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        let mut guard = self.raw.lock().map_or_else(|e| e.into_inner(), |g| g);
        *guard = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self.raw.lock().map_or_else(|e| e.into_inner(), |g| g);
        *guard = None;
        Ok(())
    }
}
