use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_guard::cli::{
    handle_budget_command, handle_category_command, handle_expense_command, BudgetCommands,
    CategoryCommands, ExpenseCommands,
};
use expense_guard::config::{GuardPaths, Settings};
use expense_guard::storage::Storage;

#[derive(Parser)]
#[command(
    name = "guard",
    version,
    about = "Track expenses against a monthly budget",
    long_about = "expense-guard logs what you spend, sorts it into categories and \
                  tells you how much of the month's budget is left."
)]
struct Cli {
    /// Log verbosity: off, error, warn, info, debug, trace (RUST_LOG overrides)
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// Directory holding the table files. Falls back to $EXPENSE_GUARD_DATA_DIR,
    /// then the working directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget status and history
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Write default settings and seed categories
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    let paths = match cli.data_dir {
        Some(dir) => GuardPaths::with_base_dir(dir),
        None => GuardPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let mut storage = Storage::open(&paths)?;
            handle_expense_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            let storage = Storage::open(&paths)?;
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense-guard at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            let storage = Storage::open(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Categories:");
            for record in storage.categories.iter() {
                if let (Some(id), Some(name)) = (record.get("id"), record.get("name")) {
                    println!("  {}: {}", id, name.as_str().unwrap_or_default());
                }
            }
        }
        Some(Commands::Config) => {
            println!("expense-guard Configuration");
            println!("===========================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Monthly budget: {:.2} {}",
                settings.monthly_budget, settings.currency_symbol
            );
        }
        None => {
            println!("expense-guard - track spending against a monthly budget");
            println!();
            println!("Run 'guard --help' for usage information.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            "expense_guard",
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
