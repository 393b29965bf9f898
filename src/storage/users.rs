//! User account repository
//!
//! Persists administrative accounts under the `users` collection key.
//! Records here carry credentials; callers that serve listings must
//! convert to `UserProfile` first.

use std::sync::Arc;

use crate::error::LinealResult;
use crate::models::UserAccount;
use crate::storage::backend::StorageBackend;
use crate::storage::collection::{Collection, Record};

/// Collection key for administrative accounts
pub const USERS_KEY: &str = "users";

impl Record for UserAccount {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Repository for administrative account persistence
pub struct UserRepository {
    collection: Collection<UserAccount>,
}

impl UserRepository {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            collection: Collection::new(USERS_KEY, backend),
        }
    }

    /// All accounts, credentials included, in insertion order
    pub fn list(&self) -> LinealResult<Vec<UserAccount>> {
        self.collection.list()
    }

    /// Get an account by ID
    pub fn get_by_id(&self, id: &str) -> LinealResult<Option<UserAccount>> {
        self.collection.get_by_id(id)
    }

    /// Find an account by its exact email (case-sensitive, first match wins)
    pub fn find_by_email(&self, email: &str) -> LinealResult<Option<UserAccount>> {
        Ok(self.collection.list()?.into_iter().find(|u| u.email == email))
    }

    /// Check whether any account uses this email
    pub fn email_exists(&self, email: &str) -> LinealResult<bool> {
        Ok(self.find_by_email(email)?.is_some())
    }

    /// Insert or update an account
    pub fn upsert(&self, account: UserAccount) -> LinealResult<UserAccount> {
        self.collection.upsert(account)
    }

    /// Delete an account; returns whether one was removed
    pub fn remove(&self, id: &str) -> LinealResult<bool> {
        self.collection.remove(id)
    }

    /// Count accounts
    pub fn count(&self) -> LinealResult<usize> {
        self.collection.count()
    }
}
