//! Raw key-value storage backends

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use gitguide_core::prelude::*;

/// Persistent string-to-string storage.
///
/// Implementations persist synchronously: once `write` returns `Ok`, a
/// fresh `read_all` (from this or another process) sees the value.
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend: Send {
    /// Load every stored entry
    fn read_all(&self) -> Result<BTreeMap<String, String>>;

    /// Store a single entry, replacing any previous value
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a single entry; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;

    /// File backing this storage, if any. Watched for external changes.
    fn location(&self) -> Option<PathBuf>;
}

/// Volatile backend. Clones share the same entries, which lets tests stand
/// in for two application instances writing to one store.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated backend
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(Mutex::new(map)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| Error::storage("memory storage lock poisoned"))
    }
}

impl StorageBackend for MemoryBackend {
    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        Ok(self.lock()?.clone())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        None
    }
}
