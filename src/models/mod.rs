//! Core data models for Lineal
//!
//! This module contains the data structures that represent the roster
//! domain: ranks, personnel records, and administrative accounts.

pub mod personnel;
pub mod rank;
pub mod user;

pub use personnel::{Gender, Personnel, PersonnelStatus, PersonnelValidationError};
pub use rank::Rank;
pub use user::{Role, UserAccount, UserProfile, UserValidationError};
