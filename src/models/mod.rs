//! Core data models for expense-guard
//!
//! Typed views over the records held by the expense and category tables,
//! plus the budget zone classification.

pub mod budget;
pub mod category;
pub mod expense;

pub use budget::BudgetZone;
pub use category::{Category, DefaultCategory, CATEGORY_TABLE, FALLBACK_CATEGORY};
pub use expense::{Expense, NewExpense, EXPENSE_TABLE};
