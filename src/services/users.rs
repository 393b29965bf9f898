//! Administrative account service
//!
//! Business logic for account management. Listings hand out credential-
//! free profiles; saves preserve the stored password when the incoming
//! record carries none; every mutation leaves one audit entry.

use crate::audit::{diff_summary, field_changes, summarize, AuditAction, USER_FIELDS};
use crate::error::{LinealError, LinealResult};
use crate::models::{UserAccount, UserProfile};
use crate::storage::Storage;

/// Service for administrative account management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all accounts as credential-free profiles
    pub fn list(&self) -> LinealResult<Vec<UserProfile>> {
        Ok(self
            .storage
            .users
            .list()?
            .into_iter()
            .map(UserProfile::from)
            .collect())
    }

    /// Get a credential-free profile by ID
    pub fn get(&self, id: &str) -> LinealResult<Option<UserProfile>> {
        Ok(self.storage.users.get_by_id(id)?.map(UserProfile::from))
    }

    /// Create or update an account
    ///
    /// A blank password on an existing account keeps the stored one; a
    /// non-blank password is taken as a deliberate reset and surfaces in
    /// the audit entry as `Password: (Updated)`, never as the value
    /// itself. New accounts must arrive with a password already applied.
    pub fn save(&self, mut account: UserAccount, performed_by: &str) -> LinealResult<UserAccount> {
        account
            .validate()
            .map_err(|e| LinealError::Validation(e.to_string()))?;

        let previous = self.storage.users.get_by_id(&account.id)?;
        let (action, details) = match &previous {
            Some(previous) => {
                let password_supplied = !account.password.is_empty();
                if !password_supplied {
                    account.password = previous.password.clone();
                }

                let mut fragments = field_changes(previous, &account, USER_FIELDS.fields);
                if password_supplied {
                    fragments.push("Password: (Updated)".to_string());
                }
                (
                    AuditAction::UserUpdate,
                    summarize(&previous.display_name(), &fragments),
                )
            }
            None => {
                if account.password.is_empty() {
                    return Err(LinealError::PasswordRequired);
                }
                (
                    AuditAction::UserCreate,
                    diff_summary(None, &account, &USER_FIELDS),
                )
            }
        };

        let stored = self.storage.users.upsert(account)?;
        self.storage.audit.append(action, details, performed_by)?;

        Ok(stored)
    }

    /// Flip an account between active and disabled
    pub fn toggle_status(&self, id: &str, performed_by: &str) -> LinealResult<UserAccount> {
        let mut account = self
            .storage
            .users
            .get_by_id(id)?
            .ok_or_else(|| LinealError::user_not_found(id))?;

        account.is_active = !account.is_active;
        let stored = self.storage.users.upsert(account)?;

        let status = if stored.is_active { "Active" } else { "Inactive" };
        self.storage.audit.append(
            AuditAction::UserStatus,
            format!("Changed status of {} to {}", stored.email, status),
            performed_by,
        )?;

        Ok(stored)
    }

    /// Delete an account
    ///
    /// Returns whether an account was actually removed; only then is an
    /// entry appended.
    pub fn delete(&self, id: &str, performed_by: &str) -> LinealResult<bool> {
        let existing = self.storage.users.get_by_id(id)?;
        let removed = self.storage.users.remove(id)?;

        if removed {
            let details = match existing {
                Some(account) => format!("Deleted User: {}", account.short_label()),
                None => format!("Deleted user ID {}", id),
            };
            self.storage
                .audit
                .append(AuditAction::UserDelete, details, performed_by)?;
        }

        Ok(removed)
    }

    /// Save an operator's edits to their own account
    ///
    /// Same blank-password-keeps-stored merge as [`save`](Self::save),
    /// but the entry is attributed to the account itself.
    pub fn update_self(&self, mut account: UserAccount) -> LinealResult<UserAccount> {
        account
            .validate()
            .map_err(|e| LinealError::Validation(e.to_string()))?;

        let previous = self
            .storage
            .users
            .get_by_id(&account.id)?
            .ok_or_else(|| LinealError::user_not_found(account.id.as_str()))?;

        if account.password.is_empty() {
            account.password = previous.password.clone();
        }

        let stored = self.storage.users.upsert(account)?;
        self.storage.audit.append(
            AuditAction::SelfUpdate,
            "User updated own profile details",
            stored.email.as_str(),
        )?;

        Ok(stored)
    }

    /// Count accounts
    pub fn count(&self) -> LinealResult<usize> {
        self.storage.users.count()
    }
}
