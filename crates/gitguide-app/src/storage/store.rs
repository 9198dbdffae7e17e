//! Preference store: cached, typed access over a storage backend

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use gitguide_core::prelude::*;

use super::backend::{MemoryBackend, StorageBackend};
use super::value::StoredValue;

/// In-memory cache of raw entries with synchronous write-through.
///
/// Every failure is absorbed here: reads fall back to the caller's default,
/// writes always update the cache and only log when persistence fails.
pub struct PreferenceStore {
    backend: Option<Box<dyn StorageBackend>>,
    cache: BTreeMap<String, String>,
    /// Keys whose last write never reached the backend
    unsaved: BTreeSet<String>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("available", &self.is_available())
            .field("location", &self.location())
            .field("entries", &self.cache.len())
            .field("unsaved", &self.unsaved.len())
            .finish()
    }
}

impl PreferenceStore {
    /// Wrap a backend and load its current contents
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        let cache = match backend.read_all() {
            Ok(entries) => {
                debug!("Loaded {} stored preference(s)", entries.len());
                entries
            }
            Err(e) => {
                warn!("Stored preferences unreadable, using defaults: {}", e);
                BTreeMap::new()
            }
        };
        Self {
            backend: Some(backend),
            cache,
            unsaved: BTreeSet::new(),
        }
    }

    /// Store with no persistence at all; state lives only in memory
    pub fn unavailable() -> Self {
        Self {
            backend: None,
            cache: BTreeMap::new(),
            unsaved: BTreeSet::new(),
        }
    }

    /// Store backed by a fresh [`MemoryBackend`]
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryBackend::new()))
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    pub fn location(&self) -> Option<PathBuf> {
        self.backend.as_ref().and_then(|b| b.location())
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.cache.get(key).map(String::as_str)
    }

    /// Typed read. Absent or malformed values yield `default`.
    pub fn get<T: StoredValue>(&self, key: &str, default: T) -> T {
        match self.cache.get(key) {
            None => default,
            Some(raw) => match T::decode(raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Ignoring malformed stored value for '{}': {}", key, e);
                    default
                }
            },
        }
    }

    /// Typed write. The cache is updated even if persisting fails.
    pub fn set<T: StoredValue>(&mut self, key: &str, value: &T) {
        let raw = value.encode();
        self.cache.insert(key.to_string(), raw.clone());

        if let Some(backend) = self.backend.as_mut() {
            match backend.write(key, &raw) {
                Ok(()) => {
                    self.unsaved.remove(key);
                }
                Err(e) => {
                    warn!("Failed to persist '{}': {}", key, e);
                    self.unsaved.insert(key.to_string());
                }
            }
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.cache.remove(key);
        self.unsaved.remove(key);

        if let Some(backend) = self.backend.as_mut() {
            if let Err(e) = backend.remove(key) {
                warn!("Failed to remove '{}' from storage: {}", key, e);
            }
        }
    }

    /// Re-read the backend after an external change.
    ///
    /// Returns the keys whose raw value differs from the cache, including
    /// keys that disappeared. The backend wins, except for keys whose last
    /// local write failed and that the backend holds no value for: those keep
    /// the cached value so a failed save is not silently reverted.
    pub fn resync(&mut self) -> Vec<String> {
        let Some(backend) = self.backend.as_ref() else {
            return Vec::new();
        };

        let mut fresh = match backend.read_all() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping storage resync, read failed: {}", e);
                return Vec::new();
            }
        };

        self.unsaved.retain(|k| !fresh.contains_key(k));
        for key in &self.unsaved {
            if let Some(value) = self.cache.get(key) {
                fresh.insert(key.clone(), value.clone());
            }
        }

        let mut changed: Vec<String> = fresh
            .iter()
            .filter(|(k, v)| self.cache.get(*k) != Some(*v))
            .map(|(k, _)| k.clone())
            .collect();
        changed.extend(
            self.cache
                .keys()
                .filter(|k| !fresh.contains_key(*k))
                .cloned(),
        );

        if !changed.is_empty() {
            debug!("Storage resync changed keys: {:?}", changed);
        }
        self.cache = fresh;
        changed
    }
}
