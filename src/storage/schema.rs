//! Column schemas for tables
//!
//! A schema is the fixed list of columns a table expects on every inserted
//! record, each tagged with a primitive type. Type checks are exact: an
//! integer is not accepted where a float is declared.

use std::fmt;

use serde_json::Value;

use super::table::Record;
use crate::error::{GuardError, GuardResult};

/// Name of the primary key column every schema must declare
pub const ID_COLUMN: &str = "id";

/// Primitive type a column accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// A 64-bit signed integer
    Integer,
    /// A 64-bit floating-point number
    Float,
    /// A UTF-8 string
    Text,
}

impl ColumnType {
    /// Check a JSON value against this type
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Integer, Value::Number(n)) => n.is_i64(),
            (Self::Float, Value::Number(n)) => n.is_f64(),
            (Self::Text, Value::String(_)) => true,
            _ => false,
        }
    }

    /// Name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Float => "float",
            Self::Text => "str",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

/// The declared shape of a table's records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Build a schema from `(name, type)` pairs
    ///
    /// # Errors
    ///
    /// Returns a validation error if a column name is blank or repeated, or if
    /// there is no integer `id` column.
    pub fn new<'a, I>(columns: I) -> GuardResult<Self>
    where
        I: IntoIterator<Item = (&'a str, ColumnType)>,
    {
        let mut built: Vec<Column> = Vec::new();

        for (name, column_type) in columns {
            let name = name.trim();
            if name.is_empty() {
                return Err(GuardError::Validation(
                    "Column name cannot be empty".into(),
                ));
            }
            if built.iter().any(|c| c.name == name) {
                return Err(GuardError::Validation(format!(
                    "Column '{}' is declared twice",
                    name
                )));
            }
            built.push(Column::new(name, column_type));
        }

        match built.iter().find(|c| c.name == ID_COLUMN) {
            Some(c) if c.column_type == ColumnType::Integer => {}
            Some(c) => {
                return Err(GuardError::Validation(format!(
                    "Column '{}' must be int, not {}",
                    ID_COLUMN, c.column_type
                )))
            }
            None => {
                return Err(GuardError::Validation(format!(
                    "Schema must declare an '{}' column",
                    ID_COLUMN
                )))
            }
        }

        Ok(Self { columns: built })
    }

    /// Check that every declared column is present with the declared type.
    /// Extra fields on the record are allowed.
    pub fn check(&self, table: &str, record: &Record) -> GuardResult<()> {
        for column in &self.columns {
            let ok = record
                .get(&column.name)
                .is_some_and(|value| column.column_type.matches(value));

            if !ok {
                return Err(GuardError::TypeMismatch {
                    table: table.to_string(),
                    column: column.name.clone(),
                    expected: column.column_type.name(),
                });
            }
        }
        Ok(())
    }
}
