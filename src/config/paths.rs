//! Path management for Lineal
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `LINEAL_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/lineal` or `~/.config/lineal`
//! 3. Windows: `%APPDATA%\lineal`

use std::path::PathBuf;

use crate::error::LinealError;

/// Manages all paths used by Lineal
#[derive(Debug, Clone)]
pub struct LinealPaths {
    /// Base directory for all Lineal data
    base_dir: PathBuf,
}

impl LinealPaths {
    /// Create a new LinealPaths instance
    ///
    /// Path resolution:
    /// 1. `LINEAL_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/lineal` or `~/.config/lineal`
    /// 3. Windows: `%APPDATA%\lineal`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LinealError> {
        let base_dir = if let Ok(custom) = std::env::var("LINEAL_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LinealPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/lineal/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/lineal/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path of a stored collection blob, e.g. `data/users.json`
    pub fn collection_file(&self, key: &str) -> PathBuf {
        self.data_dir().join(format!("{}.json", key))
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/lineal/)
    /// - Data directory (~/.config/lineal/data/)
    pub fn ensure_directories(&self) -> Result<(), LinealError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            LinealError::StorageUnavailable(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            LinealError::StorageUnavailable(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LinealError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("lineal"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LinealError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA").map_err(|_| {
        LinealError::StorageUnavailable("Could not determine APPDATA directory".into())
    })?;
    Ok(PathBuf::from(appdata).join("lineal"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinealPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        // Set the env var
        env::set_var("LINEAL_DATA_DIR", custom_path);

        let paths = LinealPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        // Clean up
        env::remove_var("LINEAL_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinealPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_collection_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinealPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(
            paths.collection_file("users"),
            temp_dir.path().join("data").join("users.json")
        );
        assert_eq!(
            paths.collection_file("auditLog"),
            temp_dir.path().join("data").join("auditLog.json")
        );
    }
}
