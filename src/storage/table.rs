//! JSON-backed record table
//!
//! A `Table` keeps every record of one logical collection in memory, keyed by
//! its integer `id`, and mirrors them to `<name>.json` as a JSON array. Each
//! successful insert, update or delete rewrites the whole file.
//!
//! ## Id assignment
//!
//! A record inserted without an `id` gets `max(existing ids) + 1`, or `1` when
//! the table is empty. This is a max-scan over the ids present right now, not
//! a persistent counter: gaps left by deleted records are never refilled, but
//! deleting the record holding the highest id lets the next insert take that
//! id again.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::file_io::{load_rows, save_rows};
use super::schema::{Schema, ID_COLUMN};
use crate::error::{GuardError, GuardResult};

/// A single row: field name to JSON value
pub type Record = Map<String, Value>;

/// A named collection of records sharing one schema
#[derive(Debug)]
pub struct Table {
    name: String,
    path: PathBuf,
    schema: Schema,
    rows: IndexMap<i64, Record>,
}

impl Table {
    /// Open a table, loading `path` if it exists
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, is not a JSON array
    /// of objects, or holds a record without an integer `id`.
    pub fn open(name: impl Into<String>, schema: Schema, path: PathBuf) -> GuardResult<Self> {
        let name = name.into();
        let file_rows = load_rows(&name, &path)?;

        let mut rows = IndexMap::with_capacity(file_rows.len());
        for (index, record) in file_rows.into_iter().enumerate() {
            let id = record
                .get(ID_COLUMN)
                .and_then(Value::as_i64)
                .ok_or_else(|| {
                    GuardError::Storage(format!(
                        "Record #{} in {} has no integer '{}'",
                        index,
                        path.display(),
                        ID_COLUMN
                    ))
                })?;

            if rows.insert(id, record).is_some() {
                warn!(table = %name, id, "duplicate id on disk, keeping the later record");
            }
        }

        debug!(table = %name, rows = rows.len(), "loaded {}", path.display());

        Ok(Self {
            name,
            path,
            schema,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }

    /// Get a record by primary key
    pub fn get(&self, id: i64) -> Option<&Record> {
        self.rows.get(&id)
    }

    /// All records in insertion order
    pub fn get_all(&self) -> Vec<Record> {
        self.rows.values().cloned().collect()
    }

    /// Iterate records in insertion order without cloning
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.rows.values()
    }

    /// Insert a record and return its id
    ///
    /// A missing or `null` id is assigned automatically. The record is rejected
    /// without any change if its id is already taken or if a schema column is
    /// missing or of the wrong type.
    pub fn insert(&mut self, mut record: Record) -> GuardResult<i64> {
        let id = match record.get(ID_COLUMN) {
            None | Some(Value::Null) => {
                let id = self.next_id();
                record.insert(ID_COLUMN.to_string(), Value::from(id));
                id
            }
            Some(value) => value.as_i64().ok_or_else(|| GuardError::TypeMismatch {
                table: self.name.clone(),
                column: ID_COLUMN.to_string(),
                expected: "int",
            })?,
        };

        if self.rows.contains_key(&id) {
            return Err(GuardError::DuplicateKey {
                table: self.name.clone(),
                key: id.to_string(),
            });
        }

        self.schema.check(&self.name, &record)?;

        self.rows.insert(id, record);
        if let Err(e) = self.save() {
            self.rows.shift_remove(&id);
            return Err(e);
        }

        debug!(table = %self.name, id, "inserted record");
        Ok(id)
    }

    /// Merge `fields` into an existing record
    ///
    /// Field types are not checked against the schema here. Changing the
    /// record's `id` is refused because the id is its key.
    pub fn update(&mut self, id: i64, fields: Record) -> GuardResult<()> {
        let Some(row) = self.rows.get_mut(&id) else {
            return Err(GuardError::not_found(self.name.clone(), id));
        };

        if let Some(new_id) = fields.get(ID_COLUMN) {
            if new_id.as_i64() != Some(id) {
                return Err(GuardError::Validation(format!(
                    "Cannot change '{}' of record {} in table '{}'",
                    ID_COLUMN, id, self.name
                )));
            }
        }

        let previous = row.clone();
        row.extend(fields);

        if let Err(e) = self.save() {
            self.rows.insert(id, previous);
            return Err(e);
        }

        debug!(table = %self.name, id, "updated record");
        Ok(())
    }

    /// Remove a record
    pub fn delete(&mut self, id: i64) -> GuardResult<()> {
        let Some((index, _, removed)) = self.rows.shift_remove_full(&id) else {
            return Err(GuardError::not_found(self.name.clone(), id));
        };

        if let Err(e) = self.save() {
            self.rows.shift_insert(index, id, removed);
            return Err(e);
        }

        debug!(table = %self.name, id, "deleted record");
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.rows
            .keys()
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    fn save(&self) -> GuardResult<()> {
        let rows: Vec<&Record> = self.rows.values().collect();
        save_rows(&self.name, &self.path, &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::schema::ColumnType;
    use serde_json::json;
    use tempfile::TempDir;

    fn rec(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    fn expense_schema() -> Schema {
        Schema::new([
            ("id", ColumnType::Integer),
            ("item", ColumnType::Text),
            ("amount", ColumnType::Float),
            ("cat_id", ColumnType::Integer),
        ])
        .unwrap()
    }

    fn create_test_table() -> (TempDir, Table) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        let table = Table::open("expenses", expense_schema(), path).unwrap();
        (temp_dir, table)
    }

    fn expense(item: &str, amount: f64) -> Record {
        rec(json!({"item": item, "amount": amount, "cat_id": 1}))
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let (temp_dir, table) = create_test_table();
        assert!(table.is_empty());
        assert_eq!(table.name(), "expenses");
        assert!(!temp_dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_first_insert_gets_id_one() {
        let (_temp_dir, mut table) = create_test_table();
        let id = table.insert(expense("Chapati", 30.0)).unwrap();

        assert_eq!(id, 1);
        assert_eq!(table.get(1).unwrap()["id"], json!(1));
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let (_temp_dir, mut table) = create_test_table();

        let mut explicit = expense("Rent", 4000.0);
        explicit.insert("id".into(), json!(10));
        table.insert(explicit).unwrap();

        let id = table.insert(expense("Tea", 20.0)).unwrap();
        assert_eq!(id, 11);
    }

    #[test]
    fn test_null_id_is_assigned() {
        let (_temp_dir, mut table) = create_test_table();
        let record = rec(json!({"id": null, "item": "Bread", "amount": 60.0, "cat_id": 1}));

        assert_eq!(table.insert(record).unwrap(), 1);
    }

    #[test]
    fn test_deleted_max_id_is_reused() {
        let (_temp_dir, mut table) = create_test_table();
        table.insert(expense("A", 1.0)).unwrap();
        table.insert(expense("B", 2.0)).unwrap();
        let third = table.insert(expense("C", 3.0)).unwrap();

        table.delete(third).unwrap();
        assert_eq!(table.insert(expense("D", 4.0)).unwrap(), third);

        // A gap below the max stays a gap
        table.delete(1).unwrap();
        assert_eq!(table.insert(expense("E", 5.0)).unwrap(), 4);
        assert!(!table.contains(1));
    }

    #[test]
    fn test_duplicate_key_rejected_without_change() {
        let (_temp_dir, mut table) = create_test_table();
        table.insert(expense("Lunch", 150.0)).unwrap();
        let before = table.get_all();

        let mut dup = expense("Dinner", 200.0);
        dup.insert("id".into(), json!(1));
        let err = table.insert(dup).unwrap_err();

        assert!(err.is_duplicate_key());
        assert_eq!(table.get_all(), before);
    }

    #[test]
    fn test_type_mismatch_rejected_without_change() {
        let (temp_dir, mut table) = create_test_table();

        let wrong_type = rec(json!({"item": "Fare", "amount": 100, "cat_id": 2}));
        assert!(table.insert(wrong_type).unwrap_err().is_type_mismatch());

        let missing = rec(json!({"item": "Fare", "amount": 100.0}));
        assert!(table.insert(missing).unwrap_err().is_type_mismatch());

        let bad_id = rec(json!({"id": "7", "item": "Fare", "amount": 100.0, "cat_id": 2}));
        assert!(table.insert(bad_id).unwrap_err().is_type_mismatch());

        assert!(table.is_empty());
        assert!(!temp_dir.path().join("expenses.json").exists());
    }

    #[test]
    fn test_get_all_keeps_insertion_order() {
        let (_temp_dir, mut table) = create_test_table();

        let mut high = expense("First", 1.0);
        high.insert("id".into(), json!(5));
        table.insert(high).unwrap();
        let mut low = expense("Second", 2.0);
        low.insert("id".into(), json!(2));
        table.insert(low).unwrap();

        let items: Vec<_> = table.get_all().iter().map(|r| r["item"].clone()).collect();
        assert_eq!(items, vec![json!("First"), json!("Second")]);
    }

    #[test]
    fn test_update_merges_without_revalidation() {
        let (_temp_dir, mut table) = create_test_table();
        let id = table.insert(expense("Milk", 55.0)).unwrap();

        table
            .update(id, rec(json!({"amount": "a lot", "note": "late night"})))
            .unwrap();

        let row = table.get(id).unwrap();
        assert_eq!(row["amount"], json!("a lot"));
        assert_eq!(row["item"], json!("Milk"));
        assert_eq!(row["note"], json!("late night"));
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let (_temp_dir, mut table) = create_test_table();
        table.insert(expense("Milk", 55.0)).unwrap();
        let before = table.get_all();

        let err = table.update(99, rec(json!({"amount": 1.0}))).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(table.get_all(), before);
    }

    #[test]
    fn test_update_cannot_change_id() {
        let (_temp_dir, mut table) = create_test_table();
        let id = table.insert(expense("Milk", 55.0)).unwrap();

        let err = table.update(id, rec(json!({"id": 42}))).unwrap_err();
        assert!(err.is_validation());
        assert!(table.contains(id));

        // Restating the same id is harmless
        table.update(id, rec(json!({"id": id, "amount": 60.0}))).unwrap();
        assert_eq!(table.get(id).unwrap()["amount"], json!(60.0));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, mut table) = create_test_table();
        table.insert(expense("A", 1.0)).unwrap();
        table.insert(expense("B", 2.0)).unwrap();

        assert!(table.delete(7).unwrap_err().is_not_found());
        assert_eq!(table.len(), 2);

        table.delete(1).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get(1).is_none());
        assert!(table.get(2).is_some());
    }

    #[test]
    fn test_reload_round_trip() {
        let (temp_dir, mut table) = create_test_table();
        table.insert(expense("Lunch", 150.0)).unwrap();
        table.insert(expense("Matatu", 80.5)).unwrap();
        table.update(2, rec(json!({"cat_id": 2}))).unwrap();
        table.insert(expense("Airtime", 100.0)).unwrap();
        table.delete(1).unwrap();

        let path = temp_dir.path().join("expenses.json");
        let reloaded = Table::open("expenses", expense_schema(), path).unwrap();

        assert_eq!(reloaded.get_all(), table.get_all());
        assert_eq!(reloaded.get(3).unwrap()["amount"], json!(100.0));
    }

    #[test]
    fn test_file_is_json_array_of_objects() {
        let (temp_dir, mut table) = create_test_table();
        table.insert(expense("Lunch", 150.0)).unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("expenses.json")).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();

        assert_eq!(
            value,
            json!([{"item": "Lunch", "amount": 150.0, "cat_id": 1, "id": 1}])
        );
    }

    #[test]
    fn test_open_rejects_record_without_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(&path, r#"[{"item": "Lunch", "amount": 150.0, "cat_id": 1}]"#).unwrap();

        let err = Table::open("expenses", expense_schema(), path).unwrap_err();
        assert!(matches!(err, GuardError::Storage(_)));
    }

    #[test]
    fn test_open_keeps_later_duplicate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "item": "Old"}, {"id": 1, "item": "New"}]"#,
        )
        .unwrap();

        let table = Table::open("expenses", expense_schema(), path).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1).unwrap()["item"], json!("New"));
    }

    #[test]
    fn test_failed_save_leaves_rows_unchanged() {
        let (temp_dir, mut table) = create_test_table();
        table.insert(expense("Lunch", 12.5)).unwrap();
        table.insert(expense("Bus", 2.0)).unwrap();
        let before = table.get_all();

        // A non-empty directory where the file should be makes the rename fail
        let path = temp_dir.path().join("expenses.json");
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("blocker"), "x").unwrap();

        let err = table.insert(expense("Taxi", 30.0)).unwrap_err();
        assert!(matches!(err, GuardError::Storage(_)));
        assert_eq!(table.get_all(), before);
        assert!(!table.contains(3));

        let err = table.update(1, rec(json!({"amount": 99.0}))).unwrap_err();
        assert!(matches!(err, GuardError::Storage(_)));
        assert_eq!(table.get_all(), before);

        let err = table.delete(1).unwrap_err();
        assert!(matches!(err, GuardError::Storage(_)));
        assert_eq!(table.get_all(), before);
        assert_eq!(table.get(1).unwrap()["item"], json!("Lunch"));
    }
}
