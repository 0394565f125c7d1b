//! Expense commands
//!
//! `add` and `remove` against a single day of the ledger.

use crate::display::{format_day_summary, format_expense_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseId;

use super::{resolve_day_index, CommandContext};

/// Handle `allowance add`
///
/// A rejected amount is reported and returned as an error so the process
/// exits non-zero; the stored budget is untouched.
pub fn handle_add(
    ctx: &CommandContext<'_>,
    amount: &str,
    desc: &str,
    day: Option<u32>,
) -> BudgetResult<()> {
    let service = ctx.service();
    let ledger = service.ledger()?;
    let index = resolve_day_index(ctx, &ledger, day)?;

    let (ledger, outcome) = service.add_expense(index, amount, desc)?;
    let id = outcome.into_result()?;

    if let Some(record) = ledger.day(index) {
        if let Some(expense) = record.find_expense(id) {
            println!(
                "Logged {} on day {} (#{})",
                expense.amount.format_with_symbol(&ctx.settings.currency_symbol),
                record.day,
                id
            );
        }
        println!();
        print!("{}", format_day_summary(record, &ctx.settings.currency_symbol));
    }

    Ok(())
}

/// Handle `allowance remove`
pub fn handle_remove(ctx: &CommandContext<'_>, id: &str, day: Option<u32>) -> BudgetResult<()> {
    let id: ExpenseId = id
        .parse()
        .map_err(|_| BudgetError::Validation(format!("Invalid expense id '{}'", id)))?;

    let service = ctx.service();
    let ledger = service.ledger()?;
    let index = resolve_day_index(ctx, &ledger, day)?;

    let (ledger, removed) = service.remove_expense(index, id)?;
    let Some(record) = ledger.day(index) else {
        return Ok(());
    };

    if removed {
        println!("Removed expense #{} from day {}", id, record.day);
    } else {
        println!("No expense #{} on day {}; nothing changed", id, record.day);
    }
    println!();
    print!("{}", format_day_summary(record, &ctx.settings.currency_symbol));
    println!();
    println!("{}", format_expense_list(record, &ctx.settings.currency_symbol));

    Ok(())
}
