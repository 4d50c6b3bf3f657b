//! Durable key/value port and stock adapters
//!
//! The browser analogue is `localStorage`: a small, synchronous, local
//! string-to-string map where a missing key is a normal state. Adapters that
//! cannot reach their backing medium report `StorageUnavailable`; callers
//! recover by running memory-only for the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::info;

use crate::constants::storage;
use crate::error::Error;

/// Synchronous local key/value storage
///
/// `get` returning `Ok(None)` means the key is absent, which is valid;
/// `Err` means the medium itself could not be reached.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// In-memory store backed by a shared map
///
/// Cloning yields a second handle onto the same map, so a test can hold one
/// handle across simulated reloads while a fresh editor gets the other.
/// Single-threaded by design, like everything in this crate.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// File-backed store with one file per key
///
/// Keeping each key in its own file means damage to one file can never
/// corrupt the values of the others.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at the per-user config location
    pub fn new() -> Self {
        let mut root = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        root.push(storage::APP_DIR);
        Self { root }
    }

    /// Store rooted at an explicit directory (tests point this at a temp dir)
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::StorageUnavailable(format!(
                "read {:?}: {e}",
                self.key_path(key)
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        fs::create_dir_all(&self.root).map_err(|e| {
            Error::StorageUnavailable(format!("create {:?}: {e}", self.root))
        })?;
        let path = self.key_path(key);
        fs::write(&path, value)
            .map_err(|e| Error::StorageUnavailable(format!("write {path:?}: {e}")))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(path = ?path, "Removed stored key");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::StorageUnavailable(format!("remove {path:?}: {e}"))),
        }
    }
}

/// Store whose every operation fails, for exercising memory-only mode
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct FailingStore;

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, Error> {
        Err(Error::StorageUnavailable("test store is down".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), Error> {
        Err(Error::StorageUnavailable("test store is down".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), Error> {
        Err(Error::StorageUnavailable("test store is down".to_string()))
    }
}
