//! Daily view formatting
//!
//! Renders one day of the ledger: limits, spending, remainder, a progress bar
//! and the list of expenses.

use crate::models::{Amount, DayRecord};
use crate::services::progress_percent;

use super::report::{format_progress, separator, truncate};

const BAR_WIDTH: usize = 20;
const DESC_WIDTH: usize = 28;

/// Format the summary block for a single day
pub fn format_day_summary(day: &DayRecord, currency: &str) -> String {
    let spent = day.spent();
    let money = |a: Amount| a.format_with_symbol(currency);

    let mut output = String::new();
    output.push_str(&format!("Day {}\n", day.day));
    output.push_str(&format!("{}\n", separator(40)));
    output.push_str(&format!("Base daily limit:  {:>16}\n", money(day.base_daily)));
    let carry = day.carry_in();
    if !carry.approx_eq(Amount::zero(), 0.005) {
        output.push_str(&format!("Carried over:      {:>16}\n", money(carry)));
    }
    output.push_str(&format!("Available today:   {:>16}\n", money(day.available)));
    output.push_str(&format!("Spent today:       {:>16}\n", money(spent)));

    let remaining = format!("Remaining:         {:>16}", money(day.calculated));
    if day.is_over_limit() {
        output.push_str(&format!("{}  (over limit!)\n", remaining));
    } else {
        output.push_str(&format!("{}\n", remaining));
    }

    output.push('\n');
    output.push_str(&format_progress(progress_percent(day.available, spent), BAR_WIDTH));
    output.push('\n');
    output
}

/// Format the expense list for a single day
pub fn format_expense_list(day: &DayRecord, currency: &str) -> String {
    if day.expenses.is_empty() {
        return "No expenses".to_string();
    }

    let mut output = String::from("Expenses:\n");
    for expense in &day.expenses {
        output.push_str(&format!(
            "  #{:<14} {:<width$} {:>14}\n",
            expense.id,
            truncate(&expense.desc, DESC_WIDTH),
            expense.amount.format_with_symbol(currency),
            width = DESC_WIDTH,
        ));
    }
    output
}

/// Summary followed by the expense list
pub fn format_day_details(day: &DayRecord, currency: &str) -> String {
    format!(
        "{}\n{}",
        format_day_summary(day, currency),
        format_expense_list(day, currency)
    )
}
