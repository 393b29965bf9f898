//! Generic record collections
//!
//! A [`Collection`] stores one kind of record under one backend key. Reads
//! load the whole collection; mutations load, modify, and write the whole
//! collection back under a per-collection lock, so each mutation is a
//! single read-modify-write cycle.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{LinealError, LinealResult};
use crate::storage::backend::StorageBackend;

/// A record that can live in a [`Collection`]
pub trait Record {
    /// Stable unique identifier of this record
    fn id(&self) -> &str;
}

/// A typed collection of records persisted under a single backend key
pub struct Collection<T> {
    key: &'static str,
    backend: Arc<dyn StorageBackend>,
    write_lock: Mutex<()>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Record + Serialize + DeserializeOwned + Clone,
{
    pub fn new(key: &'static str, backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            key,
            backend,
            write_lock: Mutex::new(()),
            _marker: PhantomData,
        }
    }

    /// All records in insertion order; an absent key reads as empty
    pub fn list(&self) -> LinealResult<Vec<T>> {
        self.load()
    }

    /// Find a record by its identifier
    pub fn get_by_id(&self, id: &str) -> LinealResult<Option<T>> {
        Ok(self.load()?.into_iter().find(|r| r.id() == id))
    }

    /// Insert or replace a record, matched by id, and persist
    ///
    /// An existing record is replaced in place; a new one is appended.
    /// Returns the record as stored.
    pub fn upsert(&self, record: T) -> LinealResult<T> {
        let _guard = self.lock()?;

        let mut records = self.load()?;
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record.clone(),
            None => records.push(record.clone()),
        }
        self.store(&records)?;
        Ok(record)
    }

    /// Remove a record by id and persist; returns whether a record was removed
    ///
    /// The collection is written back even when nothing matched.
    pub fn remove(&self, id: &str) -> LinealResult<bool> {
        let _guard = self.lock()?;

        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        let removed = records.len() < before;
        self.store(&records)?;
        Ok(removed)
    }

    /// Replace the entire collection contents
    pub fn replace_all(&self, records: Vec<T>) -> LinealResult<()> {
        let _guard = self.lock()?;
        self.store(&records)
    }

    /// Number of records currently stored
    pub fn count(&self) -> LinealResult<usize> {
        Ok(self.load()?.len())
    }

    fn load(&self) -> LinealResult<Vec<T>> {
        match self.backend.read(self.key)? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                LinealError::StorageUnavailable(format!(
                    "Failed to parse collection '{}': {}",
                    self.key, e
                ))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, records: &[T]) -> LinealResult<()> {
        let bytes = serde_json::to_vec_pretty(records).map_err(|e| {
            LinealError::StorageUnavailable(format!(
                "Failed to serialize collection '{}': {}",
                self.key, e
            ))
        })?;
        self.backend.write(self.key, &bytes)
    }

    fn lock(&self) -> LinealResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| LinealError::StorageUnavailable("Failed to acquire write lock".into()))
    }
}
