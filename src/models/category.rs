//! Category model
//!
//! Categories are the spending buckets expenses point at through `cat_id`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::GuardResult;
use crate::storage::schema::{ColumnType, Schema};
use crate::storage::table::Record;

/// Name of the category table (and of its `categories.json` file)
pub const CATEGORY_TABLE: &str = "categories";

/// Label used for expenses whose category does not exist
pub const FALLBACK_CATEGORY: &str = "General";

/// A spending bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Columns of the category table
    pub fn schema() -> GuardResult<Schema> {
        Schema::new([("id", ColumnType::Integer), ("name", ColumnType::Text)])
    }

    /// Decode a stored record
    pub fn from_record(record: &Record) -> Option<Self> {
        serde_json::from_value(record.clone().into()).ok()
    }

    /// Encode as a record ready for insertion
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("id".into(), self.id.into());
        record.insert("name".into(), self.name.clone().into());
        record
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Categories created on first run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Food,
    Fare,
    Others,
}

impl DefaultCategory {
    /// Get all default categories in order
    pub fn all() -> &'static [Self] {
        &[Self::Food, Self::Fare, Self::Others]
    }

    /// Fixed id of this default category
    pub fn id(&self) -> i64 {
        match self {
            Self::Food => 1,
            Self::Fare => 2,
            Self::Others => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Fare => "Fare",
            Self::Others => "Others",
        }
    }

    pub fn to_category(&self) -> Category {
        Category::new(self.id(), self.name())
    }
}
