use anyhow::Result;
use clap::Parser;
use tracing::warn;

use daily_allowance::cli::{handle_command, CommandContext, Commands};
use daily_allowance::config::{BudgetPaths, Settings};
use daily_allowance::host::{HostSignal, LogHost, NoHost};
use daily_allowance::services::period;
use daily_allowance::storage::Storage;

#[derive(Parser)]
#[command(
    name = "allowance",
    version,
    about = "Daily spending limits for the rest of the month",
    long_about = "allowance sets aside savings from your salary, spreads the rest \
                  evenly over the days left in the month, and carries each day's \
                  surplus or overspend into the next."
)]
struct Cli {
    /// Treat this date as today (YYYY-MM-DD or DD.MM.YYYY)
    #[arg(long, global = true, env = "DAILY_ALLOWANCE_AS_OF")]
    as_of: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    daily_allowance::init_tracing();

    let cli = Cli::parse();

    let today = match cli.as_of.as_deref() {
        Some(raw) => period::parse_date(raw)?,
        None => period::today(),
    };

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths)?;
    match storage.load_all() {
        Ok(()) => {}
        // A damaged budget file must not block the command that deletes it
        Err(e) if matches!(cli.command, Some(Commands::Reset { yes: true })) => {
            warn!(error = %e, "stored budget is unreadable; resetting anyway");
        }
        Err(e) => return Err(e.into()),
    }

    let host: &dyn HostSignal = if settings.signal_host { &LogHost } else { &NoHost };

    let Some(command) = cli.command else {
        println!("allowance - daily spending limits");
        println!();
        println!("Run 'allowance --help' for usage information.");
        println!("Run 'allowance init --salary <AMOUNT> --mandatory <AMOUNT>' to get started.");
        return Ok(());
    };

    let ctx = CommandContext {
        storage: &storage,
        settings: &settings,
        host,
        today,
    };
    handle_command(&ctx, command)?;

    Ok(())
}
