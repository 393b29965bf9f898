//! Pluggable persistence backends
//!
//! Collections speak to storage through the [`StorageBackend`] trait: a
//! whole-value key/value store over raw bytes. The [`FileBackend`] maps
//! each key to a JSON file and writes atomically so a crash mid-write
//! never corrupts data. The [`MemoryBackend`] backs tests.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::{LinealError, LinealResult};

/// Whole-value key/value persistence
///
/// `write` must replace the stored value completely; partial results must
/// never become visible to a later `read`.
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, or `None` if nothing was written yet
    fn read(&self, key: &str) -> LinealResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn write(&self, key: &str, bytes: &[u8]) -> LinealResult<()>;
}

/// File-per-key backend storing each value as `{key}.json`
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `data_dir`, creating the directory if needed
    pub fn new(data_dir: impl Into<PathBuf>) -> LinealResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir).map_err(|e| {
            LinealError::StorageUnavailable(format!(
                "Failed to create directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;
        Ok(Self { data_dir })
    }

    fn file_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Write to a temp file, sync, then rename over the target
    ///
    /// This ensures the file is either completely written or not modified
    /// at all, preventing corruption on crashes or power failures.
    fn write_atomic(path: &Path, bytes: &[u8]) -> LinealResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                LinealError::StorageUnavailable(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory (important for atomic rename)
        let temp_path = path.with_extension("json.tmp");

        let file = File::create(&temp_path).map_err(|e| {
            LinealError::StorageUnavailable(format!("Failed to create temp file: {}", e))
        })?;

        let mut writer = BufWriter::new(file);
        writer.write_all(bytes).map_err(|e| {
            LinealError::StorageUnavailable(format!("Failed to write data: {}", e))
        })?;

        writer.flush().map_err(|e| {
            LinealError::StorageUnavailable(format!("Failed to flush data: {}", e))
        })?;

        // Sync to disk before rename
        writer.get_ref().sync_all().map_err(|e| {
            LinealError::StorageUnavailable(format!("Failed to sync data: {}", e))
        })?;

        fs::rename(&temp_path, path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            LinealError::StorageUnavailable(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> LinealResult<Option<Vec<u8>>> {
        let path = self.file_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| {
            LinealError::StorageUnavailable(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Some(bytes))
    }

    fn write(&self, key: &str, bytes: &[u8]) -> LinealResult<()> {
        Self::write_atomic(&self.file_path(key), bytes)
    }
}

/// In-memory backend for tests, counting writes so idempotence is checkable
#[derive(Default)]
pub struct MemoryBackend {
    data: Mutex<HashMap<String, Vec<u8>>>,
    writes: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `write` calls made since creation
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> LinealResult<Option<Vec<u8>>> {
        let data = self
            .data
            .lock()
            .map_err(|_| LinealError::StorageUnavailable("Failed to acquire read lock".into()))?;
        Ok(data.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> LinealResult<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|_| LinealError::StorageUnavailable("Failed to acquire write lock".into()))?;
        data.insert(key.to_string(), bytes.to_vec());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
