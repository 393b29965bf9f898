//! Bounded audit log
//!
//! Keeps the most recent entries newest-first under a single backend key.
//! Appends prepend and then truncate, so the log never grows past
//! [`MAX_ENTRIES`] and readers always see the latest activity first.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{LinealError, LinealResult};
use crate::storage::backend::StorageBackend;

use super::entry::AuditEntry;

/// Collection key for the audit log
pub const AUDIT_LOG_KEY: &str = "auditLog";

/// Maximum number of entries retained; the oldest fall off first
pub const MAX_ENTRIES: usize = 1000;

/// The audit log, stored newest-first
pub struct AuditLog {
    backend: Arc<dyn StorageBackend>,
    write_lock: Mutex<()>,
}

impl AuditLog {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// Record a new entry and persist the bounded log
    ///
    /// The entry lands at the front; anything past [`MAX_ENTRIES`] is
    /// dropped from the tail. Returns the entry as written.
    pub fn append(
        &self,
        action: impl Into<String>,
        details: impl Into<String>,
        performed_by: impl Into<String>,
    ) -> LinealResult<AuditEntry> {
        let entry = AuditEntry::new(action, details, performed_by);

        let _guard = self.lock()?;
        let mut entries = self.load()?;
        entries.insert(0, entry.clone());
        entries.truncate(MAX_ENTRIES);
        self.store(&entries)?;

        Ok(entry)
    }

    /// All retained entries, newest first
    pub fn list(&self) -> LinealResult<Vec<AuditEntry>> {
        self.load()
    }

    /// Entries matching `term` in action, details, or attribution,
    /// case-insensitively, newest first
    pub fn search(&self, term: &str) -> LinealResult<Vec<AuditEntry>> {
        Ok(self.load()?.into_iter().filter(|e| e.matches(term)).collect())
    }

    /// Drop every entry
    ///
    /// The purge itself is not recorded here; callers append a SYSTEM
    /// entry right after so the purge leaves a trace.
    pub fn clear(&self) -> LinealResult<()> {
        let _guard = self.lock()?;
        self.store(&[])
    }

    /// Number of retained entries
    pub fn entry_count(&self) -> LinealResult<usize> {
        Ok(self.load()?.len())
    }

    fn load(&self) -> LinealResult<Vec<AuditEntry>> {
        match self.backend.read(AUDIT_LOG_KEY)? {
            Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                LinealError::StorageUnavailable(format!("Failed to parse audit log: {}", e))
            }),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, entries: &[AuditEntry]) -> LinealResult<()> {
        let bytes = serde_json::to_vec_pretty(entries).map_err(|e| {
            LinealError::StorageUnavailable(format!("Failed to serialize audit log: {}", e))
        })?;
        self.backend.write(AUDIT_LOG_KEY, &bytes)
    }

    fn lock(&self) -> LinealResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| LinealError::StorageUnavailable("Failed to acquire write lock".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{AuditAction, SYSTEM_PRINCIPAL};
    use crate::storage::backend::MemoryBackend;
    use chrono::Utc;

    fn create_test_log() -> AuditLog {
        AuditLog::new(Arc::new(MemoryBackend::new()))
    }

    #[test]
    fn test_empty_log() {
        let log = create_test_log();
        assert!(log.list().unwrap().is_empty());
        assert_eq!(log.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_append_keeps_newest_first() {
        let log = create_test_log();
        log.append(AuditAction::Create, "first", "admin@agency.gov")
            .unwrap();
        log.append(AuditAction::Update, "second", "admin@agency.gov")
            .unwrap();

        let entries = log.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].details, "second");
        assert_eq!(entries[1].details, "first");
    }

    #[test]
    fn test_log_is_bounded() {
        let backend = Arc::new(MemoryBackend::new());

        // Seed a full log directly so the cap is exercised without a
        // thousand append cycles.
        let seeded: Vec<AuditEntry> = (0..MAX_ENTRIES)
            .map(|i| AuditEntry {
                id: i.to_string(),
                action: "CREATE".to_string(),
                details: format!("entry {}", i),
                performed_by: "admin@agency.gov".to_string(),
                timestamp: Utc::now(),
            })
            .collect();
        backend
            .write(AUDIT_LOG_KEY, &serde_json::to_vec(&seeded).unwrap())
            .unwrap();

        let log = AuditLog::new(backend);
        log.append(AuditAction::Login, "newest", "admin@agency.gov")
            .unwrap();

        let entries = log.list().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].details, "newest");
        // The oldest seeded entry fell off the tail
        assert_eq!(entries.last().unwrap().details, format!("entry {}", MAX_ENTRIES - 2));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let log = create_test_log();
        log.append(AuditAction::Login, "User logged in", "reyes@agency.gov")
            .unwrap();
        log.append(AuditAction::Delete, "Deleted Personnel: JO1 Cruz, Pedro", "admin@agency.gov")
            .unwrap();

        let hits = log.search("CRUZ").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].action, "DELETE");

        let hits = log.search("reyes").unwrap();
        assert_eq!(hits.len(), 1);

        assert!(log.search("promotion").unwrap().is_empty());
        assert_eq!(log.search("").unwrap().len(), 2);
    }

    #[test]
    fn test_clear() {
        let log = create_test_log();
        log.append(AuditAction::Create, "entry", "admin@agency.gov")
            .unwrap();

        log.clear().unwrap();
        assert_eq!(log.entry_count().unwrap(), 0);

        // Convention: the purge itself gets a SYSTEM entry afterwards,
        // attributed to the system principal when no operator is present
        log.append(AuditAction::System, "Audit logs cleared manually", SYSTEM_PRINCIPAL)
            .unwrap();

        let entries = log.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].performed_by, SYSTEM_PRINCIPAL);
    }
}
