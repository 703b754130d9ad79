//! Display formatting for terminal output
//!
//! Turns service results into plain-text tables and summaries.

pub mod balance;
pub mod category;
pub mod history;

pub use balance::format_balance;
pub use category::format_category_list;
pub use history::format_history;
