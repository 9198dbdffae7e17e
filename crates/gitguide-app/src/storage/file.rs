//! JSON file backend
//!
//! The store is a single JSON object of string values. Writes take an
//! exclusive advisory lock, re-read the file so entries written by another
//! instance survive, then replace the file atomically (temp + rename).

use std::collections::BTreeMap;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use gitguide_core::prelude::*;

use super::backend::StorageBackend;

/// File name used under the data directory
pub const STORAGE_FILENAME: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Open (or prepare to create) the store at `path`.
    ///
    /// Fails only when the parent directory cannot be created; a missing
    /// file is simply an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    warn!("Cannot create storage directory {:?}: {}", parent, e);
                    Error::storage_unavailable(parent)
                })?;
            }
        }
        Ok(Self { path })
    }

    /// Default location: `<data_local_dir>/git-guide/storage.json`
    pub fn default_path() -> PathBuf {
        gitguide_core::logging::data_directory().join(STORAGE_FILENAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".lock");
        PathBuf::from(name)
    }

    fn read_map(path: &Path) -> Result<BTreeMap<String, String>> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Read the current file, apply `edit`, and atomically replace it
    fn modify<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.lock_path())?;
        lock_file
            .lock_exclusive()
            .map_err(|e| Error::storage(format!("Failed to lock storage: {}", e)))?;

        let result = self.modify_locked(edit);

        if let Err(e) = FileExt::unlock(&lock_file) {
            debug!("Failed to unlock storage: {}", e);
        }
        result
    }

    fn modify_locked<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut map = match Self::read_map(&self.path) {
            Ok(map) => map,
            Err(e) => {
                warn!(
                    "Discarding unreadable storage file {:?}: {}",
                    self.path, e
                );
                BTreeMap::new()
            }
        };
        edit(&mut map);

        let content = serde_json::to_string_pretty(&map)?;
        let temp_path = self.path.with_extension("json.tmp");
        write_synced(&temp_path, &content)?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::storage(format!("Failed to rename temp file: {}", e)))?;
        Ok(())
    }
}

fn write_synced(path: &Path, content: &str) -> Result<()> {
    use std::io::Write;

    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;
    Ok(())
}

impl StorageBackend for FileBackend {
    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        Self::read_map(&self.path)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.modify(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.modify(|map| {
            map.remove(key);
        })
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
