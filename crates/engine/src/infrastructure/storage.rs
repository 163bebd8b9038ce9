//! File-backed key-value preference storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use directories::ProjectDirs;

use crate::infrastructure::ports::{StorageError, StoragePort};

/// Storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file, by default at:
/// - Linux: ~/.config/zonedex/storage.json
/// - macOS: ~/Library/Application Support/io.zonedex.zonedex/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\zonedex\zonedex\config\storage.json
#[derive(Clone)]
pub struct FileStorage {
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStorage {
    /// Platform config path for the storage file.
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("io", "zonedex", "zonedex") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("zonedex_storage.json")
        }
    }

    /// Open the storage file, loading existing data if it exists.
    ///
    /// An unreadable or corrupt file is logged and treated as empty.
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to parse storage file");
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read storage file");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!(path = ?storage_path, "Storage initialized");

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    /// Persist the cache to disk
    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StorageError::Io(e.to_string()))?;
            }
        }

        let data = {
            let cache = self.cache.read().map_err(|_| StorageError::Poisoned)?;
            serde_json::to_string_pretty(&*cache)
                .map_err(|e| StorageError::Serialization(e.to_string()))?
        };

        fs::write(&self.storage_path, data).map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl StoragePort for FileStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        {
            let mut guard = self.cache.write().map_err(|_| StorageError::Poisoned)?;
            guard.insert(key.to_string(), value.to_string());
        }
        self.persist()
    }

    fn load(&self, key: &str) -> Option<String> {
        match self.cache.read() {
            Ok(guard) => guard.get(key).cloned(),
            Err(_) => {
                tracing::error!("Failed to acquire read lock for storage");
                None
            }
        }
    }
}
