//! Budget lifecycle commands
//!
//! `init`, `today`, `month`, `reset` and `config`.

use crate::display::{format_day_details, format_month_table, format_month_totals};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, BudgetInput};
use crate::services::period::{format_month_friendly, parse_date};
use crate::services::SAVINGS_RATE;

use super::{resolve_day_index, CommandContext};

/// Handle `allowance init`
pub fn handle_init(
    ctx: &CommandContext<'_>,
    salary: &str,
    mandatory: &str,
    start_date: Option<&str>,
) -> BudgetResult<()> {
    let salary = parse_money("salary", salary)?;
    let mandatory = parse_money("mandatory expenses", mandatory)?;
    let start_date = start_date.map(parse_date).transpose()?;

    let input = BudgetInput::new(salary, mandatory, start_date);
    let initialized = ctx.service().initialize(&input, ctx.today)?;

    let paths = ctx.storage.paths();
    if !paths.settings_file().exists() {
        ctx.settings.save(paths)?;
    }

    let allocation = &initialized.allocation;
    let money = |a: Amount| a.format_with_symbol(&ctx.settings.currency_symbol);

    println!(
        "Budget set for {}: days {}-{} ({} days)",
        format_month_friendly(ctx.today),
        allocation.start_day,
        allocation.last_day,
        allocation.total_days
    );
    println!("{}", "=".repeat(40));
    println!("Salary:              {:>16}", money(salary));
    println!("Mandatory expenses:  {:>16}", money(mandatory));
    println!("Clean income:        {:>16}", money(allocation.clean_income));
    println!(
        "Savings ({:.0}%):       {:>16}",
        SAVINGS_RATE * 100.0,
        money(allocation.savings_reserve)
    );
    println!("Available for life:  {:>16}", money(allocation.available_for_life));
    println!("Daily limit:         {:>16}", money(allocation.base_daily));

    if allocation.base_daily.is_negative() {
        println!();
        println!("Warning: fixed costs and savings exceed the salary; every day starts in the red.");
    }

    if let Some(day) = initialized.ledger.day(initialized.current_index) {
        println!();
        print!("{}", format_day_details(day, &ctx.settings.currency_symbol));
        println!();
    }

    Ok(())
}

/// Handle `allowance today`
pub fn handle_today(ctx: &CommandContext<'_>, day: Option<u32>) -> BudgetResult<()> {
    let ledger = ctx.service().ledger()?;
    let index = resolve_day_index(ctx, &ledger, day)?;

    match ledger.day(index) {
        Some(record) => {
            print!("{}", format_day_details(record, &ctx.settings.currency_symbol));
            println!();
        }
        None => println!("The budget has no days."),
    }

    Ok(())
}

/// Handle `allowance month`
pub fn handle_month(ctx: &CommandContext<'_>) -> BudgetResult<()> {
    let service = ctx.service();
    let ledger = service.ledger()?;
    let current = service.current_day_index(&ledger, ctx.today);

    if let (Some(first), Some(last)) = (ledger.days().first(), ledger.days().last()) {
        println!("Budget: days {}-{}", first.day, last.day);
    }
    println!("{}", format_month_table(&ledger, Some(current)));
    println!();
    println!("{}", format_month_totals(&ledger, &ctx.settings.currency_symbol));

    Ok(())
}

/// Handle `allowance reset`
pub fn handle_reset(ctx: &CommandContext<'_>, confirmed: bool) -> BudgetResult<()> {
    if !confirmed {
        return Err(BudgetError::Validation(
            "Reset deletes the budget and every logged expense. Re-run with --yes to confirm."
                .into(),
        ));
    }

    if ctx.service().reset()? {
        println!("Budget deleted. Run 'allowance init' to start a new one.");
    } else {
        println!("There was no budget to delete.");
    }

    Ok(())
}

/// Handle `allowance config`
pub fn handle_config(ctx: &CommandContext<'_>) -> BudgetResult<()> {
    let paths = ctx.storage.paths();
    let settings = ctx.settings;

    println!("daily-allowance Configuration");
    println!("=============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Budget file:     {}", paths.budget_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:     {}", settings.currency_symbol);
    println!("  Expense placeholder: {}", settings.expense_placeholder);
    println!("  Host signals:        {}", settings.signal_host);
    println!();
    println!(
        "Budget initialized:  {}",
        if ctx.storage.budget.is_initialized()? { "yes" } else { "no" }
    );

    Ok(())
}

fn parse_money(field: &str, raw: &str) -> BudgetResult<Amount> {
    Amount::parse(raw)
        .map_err(|e| BudgetError::Validation(format!("Invalid {} '{}': {}", field, raw, e)))
}
