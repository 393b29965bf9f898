//! Personnel roster service
//!
//! Business logic for roster management: validation, seniority ordering,
//! and the audit trail every mutation leaves behind.

use crate::audit::{diff_summary, AuditAction, PERSONNEL_FIELDS};
use crate::error::{LinealError, LinealResult};
use crate::models::Personnel;
use crate::storage::Storage;

/// Service for roster management
pub struct PersonnelService<'a> {
    storage: &'a Storage,
}

impl<'a> PersonnelService<'a> {
    /// Create a new personnel service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List the roster in insertion order
    pub fn list(&self) -> LinealResult<Vec<Personnel>> {
        self.storage.personnel.list()
    }

    /// List the roster in seniority order, most senior rank first
    ///
    /// The sort is stable and considers rank alone, so members sharing a
    /// rank keep their insertion order.
    pub fn list_by_seniority(&self) -> LinealResult<Vec<Personnel>> {
        let mut roster = self.storage.personnel.list()?;
        roster.sort_by_key(|p| p.rank);
        Ok(roster)
    }

    /// Get a record by ID
    pub fn get(&self, id: &str) -> LinealResult<Option<Personnel>> {
        self.storage.personnel.get_by_id(id)
    }

    /// Add a record to the roster
    pub fn create(&self, record: Personnel, performed_by: &str) -> LinealResult<Personnel> {
        record
            .validate()
            .map_err(|e| LinealError::Validation(e.to_string()))?;

        let stored = self.storage.personnel.upsert(record)?;

        self.storage.audit.append(
            AuditAction::Create,
            diff_summary(None, &stored, &PERSONNEL_FIELDS),
            performed_by,
        )?;

        Ok(stored)
    }

    /// Save changes to a record
    ///
    /// The audit entry describes every changed field against the stored
    /// version. Saving an ID with no stored version still goes through,
    /// with an entry that names the ID instead of listing changes.
    pub fn update(&self, record: Personnel, performed_by: &str) -> LinealResult<Personnel> {
        record
            .validate()
            .map_err(|e| LinealError::Validation(e.to_string()))?;

        let previous = self.storage.personnel.get_by_id(&record.id)?;
        let details = match &previous {
            Some(previous) => diff_summary(Some(previous), &record, &PERSONNEL_FIELDS),
            None => format!("Updated personnel ID {}", record.id),
        };

        let stored = self.storage.personnel.upsert(record)?;
        self.storage
            .audit
            .append(AuditAction::Update, details, performed_by)?;

        Ok(stored)
    }

    /// Remove a record from the roster
    ///
    /// Returns whether a record was actually removed; only then is an
    /// entry appended.
    pub fn delete(&self, id: &str, performed_by: &str) -> LinealResult<bool> {
        let existing = self.storage.personnel.get_by_id(id)?;
        let removed = self.storage.personnel.remove(id)?;

        if removed {
            let details = match existing {
                Some(record) => format!("Deleted Personnel: {}", record.short_label()),
                None => format!("Deleted personnel ID {}", id),
            };
            self.storage
                .audit
                .append(AuditAction::Delete, details, performed_by)?;
        }

        Ok(removed)
    }

    /// Count roster records
    pub fn count(&self) -> LinealResult<usize> {
        self.storage.personnel.count()
    }
}
