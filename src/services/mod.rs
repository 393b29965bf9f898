//! Service layer for Lineal
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, ordering, credential-free projections, and the audit entry
//! every mutation leaves behind.

pub mod personnel;
pub mod users;

pub use personnel::PersonnelService;
pub use users::UserService;
