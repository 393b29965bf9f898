//! Storage layer for Lineal
//!
//! Typed record collections persisted as whole JSON documents through a
//! pluggable backend, plus a coordinator giving access to every
//! repository and the audit log.

pub mod backend;
pub mod collection;
pub mod init;
pub mod personnel;
pub mod users;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use collection::{Collection, Record};
pub use init::initialize_storage;
pub use personnel::{PersonnelRepository, PERSONNEL_KEY};
pub use users::{UserRepository, USERS_KEY};

use std::sync::Arc;

use crate::audit::AuditLog;
use crate::config::paths::LinealPaths;
use crate::error::LinealResult;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub users: UserRepository,
    pub personnel: PersonnelRepository,
    pub audit: AuditLog,
}

impl Storage {
    /// Create a coordinator over any backend
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            users: UserRepository::new(backend.clone()),
            personnel: PersonnelRepository::new(backend.clone()),
            audit: AuditLog::new(backend),
        }
    }

    /// Open file-backed storage rooted at the configured data directory
    pub fn open(paths: &LinealPaths) -> LinealResult<Self> {
        paths.ensure_directories()?;
        let backend = FileBackend::new(paths.data_dir())?;
        Ok(Self::new(Arc::new(backend)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinealPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::open(&paths).unwrap();
        assert!(paths.data_dir().exists());
        assert_eq!(storage.users.count().unwrap(), 0);
    }

    #[test]
    fn test_repositories_share_one_backend() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinealPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::open(&paths).unwrap();
        initialize_storage(&storage).unwrap();

        assert!(paths.collection_file(USERS_KEY).exists());
        assert!(paths.collection_file(PERSONNEL_KEY).exists());

        // A fresh coordinator over the same directory sees the same data
        let reopened = Storage::open(&paths).unwrap();
        assert_eq!(reopened.users.count().unwrap(), 2);
    }
}
