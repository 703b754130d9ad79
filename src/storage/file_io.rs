//! Table file I/O
//!
//! A table file is a JSON array of flat objects. Loading reads the whole
//! array; saving replaces the whole file through a temp file and a rename,
//! so a crash mid-write leaves the previous snapshot intact.

use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::trace;

use super::table::Record;
use crate::error::{GuardError, GuardResult};

/// Read every row of `table` from `path`. A missing file is an empty table.
pub fn load_rows(table: &str, path: &Path) -> GuardResult<Vec<Record>> {
    if !path.exists() {
        trace!(table, "{} does not exist, starting empty", path.display());
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|e| {
        GuardError::Storage(format!(
            "Failed to open table '{}' at {}: {}",
            table,
            path.display(),
            e
        ))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        GuardError::Storage(format!(
            "Table '{}' at {} is not a JSON array of records: {}",
            table,
            path.display(),
            e
        ))
    })
}

/// Replace the file at `path` with `rows`
pub fn save_rows(table: &str, path: &Path, rows: &[&Record]) -> GuardResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| save_error(table, "create directory for", e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| save_error(table, "create temp file for", e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, rows).map_err(|e| save_error(table, "serialize", e))?;
    writer.flush().map_err(|e| save_error(table, "flush", e))?;
    writer.get_ref().sync_all().map_err(|e| save_error(table, "sync", e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        save_error(table, "replace file of", e)
    })?;

    trace!(table, rows = rows.len(), "wrote {}", path.display());
    Ok(())
}

fn save_error(table: &str, action: &str, err: impl fmt::Display) -> GuardError {
    GuardError::Storage(format!("Failed to {} table '{}': {}", action, table, err))
}
