//! Configuration module for Lineal
//!
//! Provides XDG-compliant path resolution for the on-disk store.

pub mod paths;

pub use paths::LinealPaths;
