//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Every handler
//! receives a [`CommandContext`] so "today" can be pinned from the command
//! line.

pub mod budget;
pub mod expense;
pub mod export;

use chrono::NaiveDate;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::ExportFormat;
use crate::host::HostSignal;
use crate::services::{BudgetService, Ledger};
use crate::storage::Storage;

pub use budget::{handle_config, handle_init, handle_month, handle_reset, handle_today};
pub use expense::{handle_add, handle_remove};
pub use export::handle_export;

/// Top-level commands of the `allowance` binary
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set up a budget for the rest of the month
    Init {
        /// Monthly salary (e.g. "60000" or "60 000,50")
        #[arg(short, long)]
        salary: String,

        /// Fixed monthly costs paid out of the salary
        #[arg(short, long, default_value = "0")]
        mandatory: String,

        /// First day of the budget (YYYY-MM-DD, DD.MM.YYYY or "today")
        #[arg(long)]
        start_date: Option<String>,
    },

    /// Show the daily view
    Today {
        /// Day of the month to show (defaults to today)
        #[arg(short, long)]
        day: Option<u32>,
    },

    /// Log an expense
    Add {
        /// Amount spent (e.g. "300", "12,50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// What the money went on
        desc: Option<String>,

        /// Day of the month to log against (defaults to today)
        #[arg(short, long)]
        day: Option<u32>,
    },

    /// Remove an expense by id
    #[command(alias = "rm")]
    Remove {
        /// Expense id as shown in the daily view
        id: String,

        /// Day of the month the expense belongs to (defaults to today)
        #[arg(short, long)]
        day: Option<u32>,
    },

    /// Show every day of the budget as a table
    Month,

    /// Delete the budget
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Export the budget
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

/// Everything a handler needs besides its own arguments
pub struct CommandContext<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,
    pub host: &'a dyn HostSignal,
    /// The date treated as today
    pub today: NaiveDate,
}

impl<'a> CommandContext<'a> {
    /// Budget service over this context's storage
    pub fn service(&self) -> BudgetService<'a> {
        BudgetService::new(self.storage, self.settings, self.host)
    }
}

/// Dispatch a command
pub fn handle_command(ctx: &CommandContext<'_>, cmd: Commands) -> BudgetResult<()> {
    match cmd {
        Commands::Init {
            salary,
            mandatory,
            start_date,
        } => handle_init(ctx, &salary, &mandatory, start_date.as_deref()),
        Commands::Today { day } => handle_today(ctx, day),
        Commands::Add { amount, desc, day } => {
            handle_add(ctx, &amount, desc.as_deref().unwrap_or(""), day)
        }
        Commands::Remove { id, day } => handle_remove(ctx, &id, day),
        Commands::Month => handle_month(ctx),
        Commands::Reset { yes } => handle_reset(ctx, yes),
        Commands::Export { format, output } => handle_export(ctx, format, output),
        Commands::Config => handle_config(ctx),
    }
}

/// Turn an optional day-of-month into a ledger index
///
/// Without `--day` the ledger's entry for today is used.
pub fn resolve_day_index(
    ctx: &CommandContext<'_>,
    ledger: &Ledger,
    day: Option<u32>,
) -> BudgetResult<usize> {
    match day {
        Some(day) => ledger.state().index_of_day(day).ok_or_else(|| {
            let (first, last) = match (ledger.days().first(), ledger.days().last()) {
                (Some(first), Some(last)) => (first.day, last.day),
                _ => (0, 0),
            };
            BudgetError::Validation(format!(
                "Day {} is not part of the budget (days {}-{})",
                day, first, last
            ))
        }),
        None => Ok(ctx.service().current_day_index(ledger, ctx.today)),
    }
}
