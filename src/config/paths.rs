//! Path management for expense-guard
//!
//! Every table lives in its own `<table>.json` file inside a single data
//! directory, next to the `config.json` settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_GUARD_DATA_DIR` environment variable (if set)
//! 2. The process working directory

use std::path::{Path, PathBuf};

use crate::error::GuardError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_GUARD_DATA_DIR";

/// Manages all paths used by expense-guard
#[derive(Debug, Clone)]
pub struct GuardPaths {
    /// Directory holding the table files and settings
    base_dir: PathBuf,
}

impl GuardPaths {
    /// Create a new GuardPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    pub fn new() -> Result<Self, GuardError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => std::env::current_dir().map_err(|e| {
                GuardError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create GuardPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path backing a table, `<base>/<name>.json`
    pub fn table_file(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", name))
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), GuardError> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}
