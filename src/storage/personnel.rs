//! Personnel roster repository
//!
//! Persists roster records under the `personnel` collection key.

use std::sync::Arc;

use crate::error::LinealResult;
use crate::models::Personnel;
use crate::storage::backend::StorageBackend;
use crate::storage::collection::{Collection, Record};

/// Collection key for roster records
pub const PERSONNEL_KEY: &str = "personnel";

impl Record for Personnel {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Repository for roster persistence
pub struct PersonnelRepository {
    collection: Collection<Personnel>,
}

impl PersonnelRepository {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            collection: Collection::new(PERSONNEL_KEY, backend),
        }
    }

    /// All records in insertion order
    pub fn list(&self) -> LinealResult<Vec<Personnel>> {
        self.collection.list()
    }

    /// Get a record by ID
    pub fn get_by_id(&self, id: &str) -> LinealResult<Option<Personnel>> {
        self.collection.get_by_id(id)
    }

    /// Insert or update a record
    pub fn upsert(&self, record: Personnel) -> LinealResult<Personnel> {
        self.collection.upsert(record)
    }

    /// Delete a record; returns whether one was removed
    pub fn remove(&self, id: &str) -> LinealResult<bool> {
        self.collection.remove(id)
    }

    /// Replace the entire roster
    pub fn replace_all(&self, records: Vec<Personnel>) -> LinealResult<()> {
        self.collection.replace_all(records)
    }

    /// Count records
    pub fn count(&self) -> LinealResult<usize> {
        self.collection.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Rank};
    use crate::storage::backend::MemoryBackend;
    use chrono::NaiveDate;

    fn create_test_repo() -> PersonnelRepository {
        PersonnelRepository::new(Arc::new(MemoryBackend::new()))
    }

    fn sample_personnel(last_name: &str) -> Personnel {
        Personnel::new(
            Rank::Jo1,
            last_name,
            "Pedro",
            Gender::Male,
            NaiveDate::from_ymd_opt(1990, 3, 14).unwrap(),
            NaiveDate::from_ymd_opt(2015, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_upsert_and_get() {
        let repo = create_test_repo();
        let member = sample_personnel("Cruz");
        let id = member.id.clone();

        repo.upsert(member).unwrap();

        let retrieved = repo.get_by_id(&id).unwrap().unwrap();
        assert_eq!(retrieved.last_name, "Cruz");
    }

    #[test]
    fn test_replace_all() {
        let repo = create_test_repo();
        repo.upsert(sample_personnel("Cruz")).unwrap();

        repo.replace_all(vec![sample_personnel("Santos"), sample_personnel("Reyes")])
            .unwrap();

        let records = repo.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].last_name, "Santos");
    }

    #[test]
    fn test_remove() {
        let repo = create_test_repo();
        let member = sample_personnel("Cruz");
        let id = member.id.clone();
        repo.upsert(member).unwrap();

        assert!(repo.remove(&id).unwrap());
        assert!(!repo.remove(&id).unwrap());
    }
}
