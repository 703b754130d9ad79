//! Configuration module for expense-guard
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (monthly budget ceiling, currency label)

pub mod paths;
pub mod settings;

pub use paths::GuardPaths;
pub use settings::Settings;
