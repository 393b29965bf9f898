//! Storage initialization
//!
//! Handles first-run setup: default administrative accounts and the
//! starter roster.

use crate::error::LinealResult;
use crate::seed;

use super::Storage;

/// Initialize storage for a fresh installation
///
/// Seeds the default administrative accounts (each skipped if its email
/// already exists) and, when the roster is empty, the starter personnel.
/// Safe to call on every startup: a second run touches nothing and
/// performs no writes.
pub fn initialize_storage(storage: &Storage) -> LinealResult<()> {
    for account in seed::default_accounts() {
        if storage.users.find_by_email(&account.email)?.is_none() {
            storage.users.upsert(account)?;
        }
    }

    if storage.personnel.count()? == 0 {
        storage.personnel.replace_all(seed::starter_personnel())?;
    }

    Ok(())
}
