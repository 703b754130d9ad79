//! Expense model
//!
//! One spending event: what was bought, how much it cost and which category
//! it belongs to.

use serde::{Deserialize, Serialize};

use crate::error::GuardResult;
use crate::storage::schema::{ColumnType, Schema};
use crate::storage::table::Record;

/// Name of the expense table (and of its `expenses.json` file)
pub const EXPENSE_TABLE: &str = "expenses";

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub item: String,
    pub amount: f64,
    pub cat_id: i64,
}

impl Expense {
    /// Columns of the expense table
    pub fn schema() -> GuardResult<Schema> {
        Schema::new([
            ("id", ColumnType::Integer),
            ("item", ColumnType::Text),
            ("amount", ColumnType::Float),
            ("cat_id", ColumnType::Integer),
        ])
    }

    /// Decode a stored record. Returns `None` when a field no longer has the
    /// expected shape, which updates are allowed to cause.
    pub fn from_record(record: &Record) -> Option<Self> {
        serde_json::from_value(record.clone().into()).ok()
    }
}

/// An expense that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub item: String,
    pub amount: f64,
    pub cat_id: i64,
}

impl NewExpense {
    pub fn new(item: impl Into<String>, amount: f64, cat_id: i64) -> Self {
        Self {
            item: item.into(),
            amount,
            cat_id,
        }
    }

    /// Encode as a record without an `id`, so the table assigns one
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("item".into(), self.item.clone().into());
        record.insert("amount".into(), self.amount.into());
        record.insert("cat_id".into(), self.cat_id.into());
        record
    }
}
