//! Storage initialization
//!
//! Handles first-run setup and default data creation

use tracing::info;

use crate::error::GuardError;
use crate::models::DefaultCategory;

use super::table::Table;

/// Insert the default categories into an empty category table
///
/// Returns `true` if the table was seeded, `false` if it already held data.
pub fn seed_default_categories(categories: &mut Table) -> Result<bool, GuardError> {
    if !categories.is_empty() {
        return Ok(false);
    }

    for default in DefaultCategory::all() {
        categories.insert(default.to_category().to_record())?;
    }

    info!(
        table = categories.name(),
        count = DefaultCategory::all().len(),
        "seeded default categories"
    );
    Ok(true)
}
