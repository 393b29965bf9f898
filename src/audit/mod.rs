//! Audit logging for Lineal
//!
//! Every roster and account mutation leaves exactly one human-readable
//! entry in a bounded, newest-first log.
//!
//! # Architecture
//!
//! The audit system consists of three components:
//!
//! - `AuditEntry`: a single log entry with an action code, a
//!   human-readable summary, attribution, and timestamp.
//! - `AuditLog`: the bounded newest-first log itself; appends prepend and
//!   truncate so it never exceeds `MAX_ENTRIES`.
//! - Field tables (`PERSONNEL_FIELDS`, `USER_FIELDS`) with `diff_summary`:
//!   typed field-by-field descriptions of what changed in a save.
//!
//! # Example
//!
//! ```rust,ignore
//! use lineal::audit::{diff_summary, AuditAction, AuditLog, PERSONNEL_FIELDS};
//!
//! let log = AuditLog::new(backend);
//!
//! // Record an update with a field-level summary
//! let details = diff_summary(Some(&before), &after, &PERSONNEL_FIELDS);
//! log.append(AuditAction::Update, details, "admin@agency.gov")?;
//!
//! // Newest entries come back first
//! for entry in log.search("cruz")? {
//!     println!("{}", entry.format_human_readable());
//! }
//! ```

mod diff;
mod entry;
mod log;

pub use diff::{diff_summary, field_changes, summarize, FieldDescriptor, FieldTable, PERSONNEL_FIELDS, USER_FIELDS};
pub use entry::{AuditAction, AuditEntry, SYSTEM_PRINCIPAL};
pub use log::{AuditLog, AUDIT_LOG_KEY, MAX_ENTRIES};
