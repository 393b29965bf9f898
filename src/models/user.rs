//! Administrative account models
//!
//! Accounts come in two shapes: the credentialed [`UserAccount`] that only
//! storage and authentication handle, and the [`UserProfile`] projection
//! with the password stripped, which is what listings return.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::rank::Rank;

/// Access role of an administrative account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
}

impl Role {
    /// Parse a role from its code
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "SUPER_ADMIN" => Some(Self::SuperAdmin),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuperAdmin => write!(f, "SUPER_ADMIN"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

/// An administrative account including its credential
///
/// This is the internal, credentialed view. It never crosses a listing
/// boundary; convert to [`UserProfile`] before handing records out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Unique identifier, caller-assigned and stable across updates
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    /// Name suffix such as "Jr." or "III"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Login key; matched case-sensitively, uniqueness not enforced
    pub email: String,

    /// Stored credential, compared as-is (see `password_matches`)
    #[serde(default)]
    pub password: String,

    pub role: Role,

    pub rank: Rank,

    /// Disabled accounts cannot log in
    pub is_active: bool,

    /// Forces a password rotation at next login
    #[serde(default)]
    pub must_change_password: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,

    /// Identity of the super admin who created this account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl UserAccount {
    /// Create a new active account with a generated identity
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        rank: Rank,
    ) -> Self {
        Self {
            id: format!("user-{}", Uuid::new_v4()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            middle_name: None,
            extension: None,
            email: email.into(),
            password: String::new(),
            role,
            rank,
            is_active: true,
            must_change_password: false,
            last_login: None,
            created_at: Utc::now(),
            created_by: None,
        }
    }

    /// The name operators know the account by: first, optional middle, last
    pub fn display_name(&self) -> String {
        match self.middle_name.as_deref() {
            Some(middle) if !middle.is_empty() => {
                format!("{} {} {}", self.first_name, middle, self.last_name)
            }
            _ => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Short roster label, e.g. `SJO2 Reyes (reyes@agency.gov)`
    pub fn short_label(&self) -> String {
        format!("{} {} ({})", self.rank, self.last_name, self.email)
    }

    /// Compare a supplied password against the stored credential.
    ///
    /// Plain equality, matching the data this store holds. The comparison
    /// lives here alone so a hash verifier can replace it without touching
    /// call sites.
    pub fn password_matches(&self, supplied: &str) -> bool {
        self.password == supplied
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(UserValidationError::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(UserValidationError::EmptyLastName);
        }
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(UserValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for UserAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.rank, self.last_name, self.first_name)
    }
}

/// Validation errors for user accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyFirstName,
    EmptyLastName,
    InvalidEmail(String),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFirstName => write!(f, "First name cannot be empty"),
            Self::EmptyLastName => write!(f, "Last name cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Public projection of a [`UserAccount`] with the credential stripped
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    pub email: String,
    pub role: Role,
    pub rank: Rank,
    pub is_active: bool,
    #[serde(default)]
    pub must_change_password: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl From<UserAccount> for UserProfile {
    fn from(account: UserAccount) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            middle_name: account.middle_name,
            extension: account.extension,
            email: account.email,
            role: account.role,
            rank: account.rank,
            is_active: account.is_active,
            must_change_password: account.must_change_password,
            last_login: account.last_login,
            created_at: account.created_at,
            created_by: account.created_by,
        }
    }
}
