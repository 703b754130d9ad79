//! Expense service
//!
//! Provides business logic for logging, repricing and removing expenses.
//! Logging refuses any expense larger than what is left of the budget.

use serde_json::json;
use tracing::{info, warn};

use super::budget::BudgetService;
use crate::error::{GuardError, GuardResult};
use crate::models::{Expense, NewExpense};
use crate::storage::{Record, Storage};

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
    monthly_budget: f64,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a mut Storage, monthly_budget: f64) -> Self {
        Self {
            storage,
            monthly_budget,
        }
    }

    /// Record a purchase and return its id
    pub fn log(&mut self, item: &str, amount: f64, cat_id: i64) -> GuardResult<i64> {
        let item = item.trim();
        if item.is_empty() {
            return Err(GuardError::Validation("Item cannot be empty".into()));
        }
        validate_amount(amount)?;

        let available = BudgetService::new(&*self.storage, self.monthly_budget).remaining();
        if amount > available {
            return Err(GuardError::InsufficientFunds {
                needed: amount,
                available,
            });
        }

        let id = self
            .storage
            .expenses
            .insert(NewExpense::new(item, amount, cat_id).to_record())?;

        info!(id, item, amount, cat_id, "logged expense");
        Ok(id)
    }

    /// Change the amount of an existing expense
    pub fn update_amount(&mut self, id: i64, amount: f64) -> GuardResult<()> {
        validate_amount(amount)?;

        let mut fields = Record::new();
        fields.insert("amount".into(), json!(amount));
        self.storage.expenses.update(id, fields)
    }

    /// Remove an expense
    pub fn delete(&mut self, id: i64) -> GuardResult<()> {
        self.storage.expenses.delete(id)
    }

    /// All expenses that still decode cleanly, in insertion order
    pub fn list(&self) -> Vec<Expense> {
        self.storage
            .expenses
            .iter()
            .filter_map(|record| {
                let expense = Expense::from_record(record);
                if expense.is_none() {
                    warn!(id = ?record.get("id"), "skipping malformed expense record");
                }
                expense
            })
            .collect()
    }
}

fn validate_amount(amount: f64) -> GuardResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(GuardError::Validation(format!(
            "Amount must be a positive number, got {}",
            amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::GuardPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = GuardPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_log_and_list() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage, 1_000.0);

        let first = service.log("  Mandazi ", 20.0, 1).unwrap();
        let second = service.log("Boda", 100.0, 2).unwrap();

        assert_eq!((first, second), (1, 2));
        let expenses = service.list();
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses[0].item, "Mandazi");
        assert_eq!(expenses[1].cat_id, 2);
    }

    #[test]
    fn test_log_rejects_bad_input() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage, 1_000.0);

        assert!(service.log("   ", 10.0, 1).unwrap_err().is_validation());
        assert!(service.log("Tea", 0.0, 1).unwrap_err().is_validation());
        assert!(service.log("Tea", -5.0, 1).unwrap_err().is_validation());
        assert!(service.log("Tea", f64::NAN, 1).unwrap_err().is_validation());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_log_denied_over_remaining_budget() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage, 1_000.0);
        service.log("Shopping", 900.0, 3).unwrap();

        let err = service.log("Shoes", 150.0, 3).unwrap_err();
        match err {
            GuardError::InsufficientFunds { needed, available } => {
                assert_eq!(needed, 150.0);
                assert_eq!(available, 100.0);
            }
            other => panic!("expected insufficient funds, got {:?}", other),
        }

        // Spending exactly what is left is allowed
        service.log("Socks", 100.0, 3).unwrap();
        assert_eq!(service.list().len(), 2);
    }

    #[test]
    fn test_update_amount() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage, 1_000.0);
        let id = service.log("Unga", 200.0, 1).unwrap();

        service.update_amount(id, 180.0).unwrap();
        assert_eq!(service.list()[0].amount, 180.0);

        assert!(service.update_amount(99, 10.0).unwrap_err().is_not_found());
        assert!(service.update_amount(id, -1.0).unwrap_err().is_validation());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage, 1_000.0);
        let id = service.log("Unga", 200.0, 1).unwrap();

        assert!(service.delete(id + 1).unwrap_err().is_not_found());
        service.delete(id).unwrap();
        assert!(service.list().is_empty());
    }
}
