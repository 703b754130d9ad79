//! Expense CLI commands
//!
//! Implements CLI commands for logging, repricing and deleting expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::GuardResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log a new expense
    Add {
        /// What was bought
        item: String,
        /// How much it cost
        amount: f64,
        /// Category ID (1: Food, 2: Fare, 3: Others)
        #[arg(short, long, default_value = "3")]
        category: i64,
    },

    /// List logged expenses
    List,

    /// Change the price of an expense
    Edit {
        /// Expense ID
        id: i64,
        /// New amount
        amount: f64,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: i64,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> GuardResult<()> {
    let mut service = ExpenseService::new(storage, settings.monthly_budget);

    match cmd {
        ExpenseCommands::Add {
            item,
            amount,
            category,
        } => {
            let id = service.log(&item, amount, category)?;
            println!("Logged '{}' with ID: {}", item.trim(), id);
        }

        ExpenseCommands::List => {
            let expenses = service.list();
            if expenses.is_empty() {
                println!("No expenses logged yet.");
            }
            for expense in expenses {
                println!(
                    "{:<4}  {:<15}  {:>10.2} {}  (category {})",
                    expense.id, expense.item, expense.amount, settings.currency_symbol, expense.cat_id
                );
            }
        }

        ExpenseCommands::Edit { id, amount } => {
            service.update_amount(id, amount)?;
            println!("Price of expense {} updated to {:.2}", id, amount);
        }

        ExpenseCommands::Delete { id } => {
            service.delete(id)?;
            println!("Expense {} deleted.", id);
        }
    }

    Ok(())
}
