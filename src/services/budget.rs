//! Budget service
//!
//! Derives spending totals and the budget zone from the expense table, and
//! joins expenses with their category names for history views.

use serde_json::Value;
use tracing::warn;

use crate::models::{BudgetZone, Category, FALLBACK_CATEGORY};
use crate::storage::{Record, Storage};

/// Service for budget reporting
pub struct BudgetService<'a> {
    storage: &'a Storage,
    monthly_budget: f64,
}

/// Snapshot of the month's spending against the ceiling
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSummary {
    pub monthly_budget: f64,
    pub spent: f64,
    pub remaining: f64,
    pub percent_used: f64,
    pub zone: BudgetZone,
}

/// An expense paired with the name of its category
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expense: Record,
    pub category_name: String,
}

impl HistoryEntry {
    pub fn id(&self) -> Option<i64> {
        self.expense.get("id").and_then(Value::as_i64)
    }

    pub fn item(&self) -> &str {
        self.expense
            .get("item")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn amount(&self) -> Option<f64> {
        self.expense.get("amount").and_then(Value::as_f64)
    }
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    ///
    /// `monthly_budget` is the ceiling spending is measured against; it should
    /// be positive (see `Settings::validate`).
    pub fn new(storage: &'a Storage, monthly_budget: f64) -> Self {
        Self {
            storage,
            monthly_budget,
        }
    }

    pub fn monthly_budget(&self) -> f64 {
        self.monthly_budget
    }

    /// Sum of `amount` over every expense
    ///
    /// Amounts that are not numbers (an update can store anything) are left
    /// out of the total.
    pub fn total_spent(&self) -> f64 {
        self.storage
            .expenses
            .iter()
            .filter_map(|record| match record.get("amount").and_then(Value::as_f64) {
                Some(amount) => Some(amount),
                None => {
                    warn!(
                        id = ?record.get("id"),
                        "expense has a non-numeric amount, leaving it out of the total"
                    );
                    None
                }
            })
            .sum()
    }

    /// What is left of the ceiling; negative once overspent
    pub fn remaining(&self) -> f64 {
        self.monthly_budget - self.total_spent()
    }

    /// Share of the ceiling spent, as a percentage. Not clamped at 100.
    pub fn percent_used(&self) -> f64 {
        (self.total_spent() / self.monthly_budget) * 100.0
    }

    /// Current budget zone
    pub fn budget_status(&self) -> BudgetZone {
        BudgetZone::from_percent_used(self.percent_used())
    }

    /// Spent, remaining and zone in one pass
    pub fn summary(&self) -> BalanceSummary {
        let spent = self.total_spent();
        let percent_used = (spent / self.monthly_budget) * 100.0;

        BalanceSummary {
            monthly_budget: self.monthly_budget,
            spent,
            remaining: self.monthly_budget - spent,
            percent_used,
            zone: BudgetZone::from_percent_used(percent_used),
        }
    }

    /// Every expense with its category name, in insertion order
    ///
    /// An expense whose `cat_id` matches no category gets the
    /// `"General"` label.
    pub fn joined_history(&self) -> Vec<HistoryEntry> {
        self.storage
            .expenses
            .iter()
            .map(|expense| {
                let category_name = expense
                    .get("cat_id")
                    .and_then(Value::as_i64)
                    .and_then(|cat_id| self.storage.categories.get(cat_id))
                    .and_then(Category::from_record)
                    .map(|category| category.name)
                    .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

                HistoryEntry {
                    expense: expense.clone(),
                    category_name,
                }
            })
            .collect()
    }
}
