//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::GuardResult;
use crate::models::Category;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> GuardResult<()> {
    match cmd {
        CategoryCommands::List => {
            let categories: Vec<Category> = storage
                .categories
                .iter()
                .filter_map(Category::from_record)
                .collect();
            print!("{}", format_category_list(&categories));
        }
    }

    Ok(())
}
