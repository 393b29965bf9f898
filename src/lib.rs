//! Lineal - Personnel roster management core
//!
//! This library provides the core functionality for Lineal, a roster
//! information system with seniority tracking. It keeps a personnel
//! roster and its administrative accounts in pluggable record storage,
//! leaves a field-level audit entry for every mutation, and gates access
//! behind password-policy authentication with forced first-login
//! rotation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (ranks, personnel, accounts)
//! - `storage`: Record collections over a pluggable backend
//! - `audit`: Bounded audit log and field-level change summaries
//! - `auth`: Login, forced rotation, and the password policy
//! - `services`: Business logic layer
//! - `seed`: Default accounts and the starter roster
//!
//! # Example
//!
//! ```rust,ignore
//! use lineal::auth::{AuthService, LoginOutcome};
//! use lineal::config::paths::LinealPaths;
//! use lineal::storage::{initialize_storage, Storage};
//!
//! let paths = LinealPaths::new()?;
//! let storage = Storage::open(&paths)?;
//! initialize_storage(&storage)?;
//!
//! let auth = AuthService::new(&storage);
//! match auth.login("superadmin@agency.gov", "Admin@123")? {
//!     LoginOutcome::Established(account) => println!("welcome, {}", account.display_name()),
//!     LoginOutcome::RotationRequired(pending) => {
//!         auth.rotate_password(pending, "Fresh123", "Fresh123")?;
//!     }
//! }
//! ```

pub mod audit;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;

pub use error::{LinealError, LinealResult};
