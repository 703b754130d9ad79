//! Storage layer for expense-guard
//!
//! Provides the JSON-backed `Table` record store, its column schemas, and the
//! `Storage` coordinator that opens the expense and category tables.

pub mod file_io;
pub mod init;
pub mod schema;
pub mod table;

pub use file_io::{load_rows, save_rows};
pub use init::seed_default_categories;
pub use schema::{Column, ColumnType, Schema};
pub use table::{Record, Table};

use crate::config::paths::GuardPaths;
use crate::error::GuardError;
use crate::models::{Category, Expense, CATEGORY_TABLE, EXPENSE_TABLE};

/// Main storage coordinator that owns both tables
///
/// The two tables are written independently; there is no transaction
/// spanning them.
pub struct Storage {
    pub expenses: Table,
    pub categories: Table,
}

impl Storage {
    /// Open both tables, seeding default categories on first run
    pub fn open(paths: &GuardPaths) -> Result<Self, GuardError> {
        paths.ensure_directories()?;

        let expenses = Table::open(
            EXPENSE_TABLE,
            Expense::schema()?,
            paths.table_file(EXPENSE_TABLE),
        )?;
        let mut categories = Table::open(
            CATEGORY_TABLE,
            Category::schema()?,
            paths.table_file(CATEGORY_TABLE),
        )?;

        seed_default_categories(&mut categories)?;

        Ok(Self {
            expenses,
            categories,
        })
    }
}
