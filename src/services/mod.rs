//! Service layer for expense-guard
//!
//! The service layer provides business logic on top of the storage layer:
//! budget totals and zones, the expense/category join, and the rules for
//! logging expenses.

pub mod budget;
pub mod expense;

pub use budget::{BalanceSummary, BudgetService, HistoryEntry};
pub use expense::ExpenseService;
