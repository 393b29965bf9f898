//! Authentication and credential handling
//!
//! Login resolves to either an established session or a forced password
//! rotation, and the rotation can only complete through the
//! [`PendingRotation`] returned by login. Credential edits on existing
//! accounts go through [`change_own_password`] and
//! [`set_or_reset_password`], which apply the same complexity policy.
//!
//! The service records nothing in the audit log itself; the embedding
//! appends LOGIN and LOGOUT entries once the session outcome is known.

pub mod policy;

pub use policy::validate_complexity;

use crate::error::{LinealError, LinealResult};
use crate::models::UserAccount;
use crate::storage::Storage;

/// What a successful credential check leads to
#[derive(Debug)]
pub enum LoginOutcome {
    /// Session established; the full account record
    Established(UserAccount),
    /// Credentials were valid but the password must be rotated first
    RotationRequired(PendingRotation),
}

/// Proof that a login passed the credential check but still owes a
/// password rotation
///
/// Consumed by [`AuthService::rotate_password`]; a failed rotation means
/// logging in again.
#[derive(Debug)]
pub struct PendingRotation {
    account: UserAccount,
}

impl PendingRotation {
    /// Email of the account awaiting rotation
    pub fn email(&self) -> &str {
        &self.account.email
    }
}

/// Login and rotation flows over shared storage
pub struct AuthService<'a> {
    storage: &'a Storage,
}

impl<'a> AuthService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Check credentials and resolve the session outcome
    ///
    /// Unknown emails and wrong passwords fail identically so attempts
    /// cannot probe which accounts exist. The active check runs only
    /// after the credential check, and the rotation requirement comes
    /// last.
    pub fn login(&self, email: &str, password: &str) -> LinealResult<LoginOutcome> {
        let account = match self.storage.users.find_by_email(email)? {
            Some(account) if account.password_matches(password) => account,
            _ => return Err(LinealError::InvalidCredentials),
        };

        if !account.is_active {
            return Err(LinealError::AccountDisabled);
        }

        if account.must_change_password {
            return Ok(LoginOutcome::RotationRequired(PendingRotation { account }));
        }

        Ok(LoginOutcome::Established(account))
    }

    /// Complete a forced rotation and persist the new credential
    ///
    /// The confirmation check runs before the complexity policy, so a
    /// mismatched pair reports as a mismatch even when both entries are
    /// weak. Clears the rotation flag on success.
    pub fn rotate_password(
        &self,
        pending: PendingRotation,
        new_password: &str,
        confirm: &str,
    ) -> LinealResult<UserAccount> {
        if new_password != confirm {
            return Err(LinealError::PasswordMismatch);
        }
        policy::validate_complexity(new_password)?;

        let mut account = pending.account;
        account.password = new_password.to_string();
        account.must_change_password = false;
        self.storage.users.upsert(account)
    }
}

/// Apply a self-chosen password change to an account
///
/// Pure credential application: checks the confirmation and the policy,
/// then returns the updated record for the caller to persist. Does not
/// force a later rotation.
pub fn change_own_password(
    account: &UserAccount,
    new_password: &str,
    confirm: &str,
) -> LinealResult<UserAccount> {
    if new_password != confirm {
        return Err(LinealError::PasswordMismatch);
    }
    policy::validate_complexity(new_password)?;

    let mut updated = account.clone();
    updated.password = new_password.to_string();
    Ok(updated)
}

/// Apply an administrator-set password to an account form
///
/// A blank pair on an existing account means "keep the stored password"
/// and returns the form unchanged, with its password field still blank
/// for the save merge to resolve. New accounts must receive a password.
/// Setting one flags the account for rotation at its next login.
pub fn set_or_reset_password(
    account: &UserAccount,
    new_password: &str,
    confirm: &str,
    is_new_account: bool,
) -> LinealResult<UserAccount> {
    if new_password.is_empty() && confirm.is_empty() {
        if is_new_account {
            return Err(LinealError::PasswordRequired);
        }
        return Ok(account.clone());
    }

    if new_password != confirm {
        return Err(LinealError::PasswordMismatch);
    }
    policy::validate_complexity(new_password)?;

    let mut updated = account.clone();
    updated.password = new_password.to_string();
    updated.must_change_password = true;
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditAction;
    use crate::models::{Rank, Role};
    use crate::seed;
    use crate::storage::{initialize_storage, MemoryBackend, Storage};
    use std::sync::Arc;

    fn create_test_storage() -> Storage {
        let storage = Storage::new(Arc::new(MemoryBackend::new()));
        initialize_storage(&storage).unwrap();
        storage
    }

    #[test]
    fn test_unknown_email_and_wrong_password_fail_identically() {
        let storage = create_test_storage();
        let auth = AuthService::new(&storage);

        let unknown = auth.login("nobody@agency.gov", "Admin@123").unwrap_err();
        let wrong = auth.login(seed::ADMIN_EMAIL, "WrongPass1").unwrap_err();

        assert!(matches!(unknown, LinealError::InvalidCredentials));
        assert!(matches!(wrong, LinealError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[test]
    fn test_disabled_account_is_rejected_after_credential_check() {
        let storage = create_test_storage();
        let mut admin = storage.users.find_by_email(seed::ADMIN_EMAIL).unwrap().unwrap();
        admin.is_active = false;
        storage.users.upsert(admin).unwrap();

        let auth = AuthService::new(&storage);

        let err = auth.login(seed::ADMIN_EMAIL, seed::DEFAULT_PASSWORD).unwrap_err();
        assert!(matches!(err, LinealError::AccountDisabled));

        // Wrong password on a disabled account still reads as bad credentials
        let err = auth.login(seed::ADMIN_EMAIL, "WrongPass1").unwrap_err();
        assert!(matches!(err, LinealError::InvalidCredentials));
    }

    #[test]
    fn test_first_login_requires_rotation_then_establishes() {
        let storage = create_test_storage();
        let auth = AuthService::new(&storage);

        let pending = match auth.login(seed::SUPER_ADMIN_EMAIL, seed::DEFAULT_PASSWORD).unwrap() {
            LoginOutcome::RotationRequired(pending) => pending,
            LoginOutcome::Established(_) => panic!("seeded account must rotate first"),
        };
        assert_eq!(pending.email(), seed::SUPER_ADMIN_EMAIL);

        let rotated = auth.rotate_password(pending, "Fresh123", "Fresh123").unwrap();
        assert!(!rotated.must_change_password);
        assert!(rotated.password_matches("Fresh123"));

        // The new credential is persisted; the old one is gone
        match auth.login(seed::SUPER_ADMIN_EMAIL, "Fresh123").unwrap() {
            LoginOutcome::Established(account) => {
                assert_eq!(account.email, seed::SUPER_ADMIN_EMAIL)
            }
            LoginOutcome::RotationRequired(_) => panic!("rotation flag should be cleared"),
        }
        let err = auth.login(seed::SUPER_ADMIN_EMAIL, seed::DEFAULT_PASSWORD).unwrap_err();
        assert!(matches!(err, LinealError::InvalidCredentials));
    }

    #[test]
    fn test_rotation_mismatch_reported_before_policy() {
        let storage = create_test_storage();
        let auth = AuthService::new(&storage);

        let pending = match auth.login(seed::ADMIN_EMAIL, seed::DEFAULT_PASSWORD).unwrap() {
            LoginOutcome::RotationRequired(pending) => pending,
            LoginOutcome::Established(_) => panic!("seeded account must rotate first"),
        };

        // Both entries are weak, but they also differ: mismatch wins
        let err = auth.rotate_password(pending, "weak", "weaker").unwrap_err();
        assert!(matches!(err, LinealError::PasswordMismatch));

        // A failed rotation consumed the pending proof; log in again
        let pending = match auth.login(seed::ADMIN_EMAIL, seed::DEFAULT_PASSWORD).unwrap() {
            LoginOutcome::RotationRequired(pending) => pending,
            LoginOutcome::Established(_) => panic!("rotation still owed"),
        };
        let err = auth.rotate_password(pending, "weak", "weak").unwrap_err();
        assert!(matches!(err, LinealError::WeakPassword));

        // Nothing persisted along the way
        let stored = storage.users.find_by_email(seed::ADMIN_EMAIL).unwrap().unwrap();
        assert!(stored.must_change_password);
        assert!(stored.password_matches(seed::DEFAULT_PASSWORD));
    }

    #[test]
    fn test_change_own_password() {
        let mut account =
            UserAccount::new("Maria", "Reyes", "reyes@agency.gov", Role::Admin, Rank::Sjo2);
        account.password = "Current1".to_string();

        let err = change_own_password(&account, "NewPass01", "Different1").unwrap_err();
        assert!(matches!(err, LinealError::PasswordMismatch));

        let err = change_own_password(&account, "", "").unwrap_err();
        assert!(matches!(err, LinealError::WeakPassword));

        let updated = change_own_password(&account, "NewPass01", "NewPass01").unwrap();
        assert!(updated.password_matches("NewPass01"));
        assert!(!updated.must_change_password);
        // The input record is untouched
        assert!(account.password_matches("Current1"));
    }

    #[test]
    fn test_set_or_reset_password() {
        let account =
            UserAccount::new("Maria", "Reyes", "reyes@agency.gov", Role::Admin, Rank::Sjo2);

        // New accounts cannot be saved without a credential
        let err = set_or_reset_password(&account, "", "", true).unwrap_err();
        assert!(matches!(err, LinealError::PasswordRequired));

        // Blank pair on an existing account keeps the form as-is
        let kept = set_or_reset_password(&account, "", "", false).unwrap();
        assert!(kept.password.is_empty());

        // A half-filled pair is a mismatch, not a keep
        let err = set_or_reset_password(&account, "", "NewPass01", false).unwrap_err();
        assert!(matches!(err, LinealError::PasswordMismatch));

        let set = set_or_reset_password(&account, "NewPass01", "NewPass01", false).unwrap();
        assert!(set.password_matches("NewPass01"));
        assert!(set.must_change_password);
    }

    #[test]
    fn test_embedding_records_login_after_outcome() {
        let storage = create_test_storage();
        let auth = AuthService::new(&storage);

        let pending = match auth.login(seed::ADMIN_EMAIL, seed::DEFAULT_PASSWORD).unwrap() {
            LoginOutcome::RotationRequired(pending) => pending,
            LoginOutcome::Established(_) => panic!("seeded account must rotate first"),
        };
        let account = auth.rotate_password(pending, "Fresh123", "Fresh123").unwrap();

        // Convention: the embedding appends LOGIN once the session exists,
        // including after a rotation
        storage
            .audit
            .append(AuditAction::Login, "User logged in", account.email.as_str())
            .unwrap();

        let entries = storage.audit.list().unwrap();
        assert_eq!(entries[0].action, "LOGIN");
        assert_eq!(entries[0].performed_by, seed::ADMIN_EMAIL);
    }
}
