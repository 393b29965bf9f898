//! Audit entry data structures
//!
//! Defines the shape of audit log entries: the well-known action codes,
//! the entry format itself, and the attribution every entry carries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Attribution for entries recorded by the system itself rather than an
/// operator, such as the entry written after a manual log purge
pub const SYSTEM_PRINCIPAL: &str = "System";

/// Well-known action codes for audit entries
///
/// Entries store the code as free text so the log survives additions to
/// this list; these variants cover everything the core itself records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    /// Roster record created
    Create,
    /// Roster record updated
    Update,
    /// Roster record deleted
    Delete,
    /// Operator signed in
    Login,
    /// Operator signed out
    Logout,
    /// Administrative account created
    UserCreate,
    /// Administrative account updated
    UserUpdate,
    /// Administrative account deleted
    UserDelete,
    /// Administrative account enabled or disabled
    UserStatus,
    /// Operator edited their own profile
    SelfUpdate,
    /// Recorded by the system itself
    System,
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditAction::Create => write!(f, "CREATE"),
            AuditAction::Update => write!(f, "UPDATE"),
            AuditAction::Delete => write!(f, "DELETE"),
            AuditAction::Login => write!(f, "LOGIN"),
            AuditAction::Logout => write!(f, "LOGOUT"),
            AuditAction::UserCreate => write!(f, "USER_CREATE"),
            AuditAction::UserUpdate => write!(f, "USER_UPDATE"),
            AuditAction::UserDelete => write!(f, "USER_DELETE"),
            AuditAction::UserStatus => write!(f, "USER_STATUS"),
            AuditAction::SelfUpdate => write!(f, "SELF_UPDATE"),
            AuditAction::System => write!(f, "SYSTEM"),
        }
    }
}

impl From<AuditAction> for String {
    fn from(action: AuditAction) -> Self {
        action.to_string()
    }
}

/// A single audit log entry
///
/// Records one operation: what happened, a human-readable summary of the
/// change, and who performed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// Entry identifier, the creation time in epoch milliseconds
    pub id: String,

    /// Action code, e.g. `CREATE` or `LOGIN`
    pub action: String,

    /// Human-readable description of what changed
    pub details: String,

    /// Who performed the operation, usually an operator email
    pub performed_by: String,

    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    /// Create a new entry stamped with the current time
    pub fn new(
        action: impl Into<String>,
        details: impl Into<String>,
        performed_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            action: action.into(),
            details: details.into(),
            performed_by: performed_by.into(),
            timestamp: now,
        }
    }

    /// Case-insensitive match against action, details, or attribution
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.action.to_lowercase().contains(&needle)
            || self.details.to_lowercase().contains(&needle)
            || self.performed_by.to_lowercase().contains(&needle)
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        format!(
            "[{}] {} by {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action,
            self.performed_by,
            self.details
        )
    }
}
