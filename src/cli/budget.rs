//! Budget CLI commands
//!
//! Implements CLI commands for the balance view and the joined history.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_balance, format_history};
use crate::error::GuardResult;
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show total spent, remaining budget and the current zone
    Status,

    /// Show every expense with its category
    History,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> GuardResult<()> {
    let service = BudgetService::new(storage, settings.monthly_budget);

    match cmd {
        BudgetCommands::Status => {
            print!(
                "{}",
                format_balance(&service.summary(), &settings.currency_symbol)
            );
        }

        BudgetCommands::History => {
            print!("{}", format_history(&service.joined_history()));
        }
    }

    Ok(())
}
