//! expense-guard - Terminal expense tracker with a monthly budget ceiling
//!
//! This library records expenses against categories, keeps them in small
//! JSON-backed tables, and reports how much of the month's budget is gone.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `storage`: JSON file record store (`Table`) with schema checks
//! - `models`: Typed expense and category views, budget zones
//! - `services`: Budget reporting and expense logging rules
//! - `display`: Plain-text formatting for the terminal
//! - `cli`: Command handlers for the `guard` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_guard::config::{GuardPaths, Settings};
//! use expense_guard::services::BudgetService;
//! use expense_guard::storage::Storage;
//!
//! let paths = GuardPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths)?;
//!
//! let budget = BudgetService::new(&storage, settings.monthly_budget);
//! println!("{} spent, status {}", budget.total_spent(), budget.budget_status());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{GuardError, GuardResult};
