//! Expense history formatting
//!
//! Renders the expense/category join as a fixed-width table.

use crate::services::HistoryEntry;

const RULE_WIDTH: usize = 55;

/// Format joined history as a table of id, item, price and category
pub fn format_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No expenses logged yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    output.push_str(&format!(
        "{:<4} | {:<15} | {:<8} | {}\n",
        "ID", "Item", "Price", "Category"
    ));
    output.push_str(&format!("{}\n", "-".repeat(RULE_WIDTH)));

    for entry in entries {
        let id = entry
            .id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "?".to_string());

        // Updates are not type-checked, so show whatever was stored
        let price = match entry.amount() {
            Some(amount) => format!("{:<8.2}", amount),
            None => format!(
                "{:<8}",
                entry
                    .expense
                    .get("amount")
                    .map(|v| v.to_string())
                    .unwrap_or_default()
            ),
        };

        output.push_str(&format!(
            "{:<4} | {:<15} | {} | {}\n",
            id,
            entry.item(),
            price,
            entry.category_name
        ));
    }

    output.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));
    output
}
