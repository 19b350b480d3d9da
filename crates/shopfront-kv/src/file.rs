//! File-backed store: one JSON object per file.

use crate::{KvError, KvStore};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store persisted as a single JSON object on disk.
///
/// The whole document is rewritten on every `set`, through a temp file and
/// an atomic rename so a crashed write never truncates the durable copy. A
/// missing file reads as an empty store; an unreadable document also starts
/// empty rather than refusing to open.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, creating parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, KvError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| KvError::Open(e.to_string()))?;
            }
        }
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => HashMap::new(),
        };
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), KvError> {
        let raw = serde_json::to_string_pretty(&self.entries).map_err(|e| KvError::Write {
            key: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw).map_err(|e| KvError::Write {
            key: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| KvError::Write {
            key: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
