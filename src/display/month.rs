//! Month table formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::Ledger;

/// One row of the month table
#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
}

/// Format the whole ledger as a table
///
/// `current` marks the row shown by the daily view; days that end below zero
/// are flagged with `!`.
pub fn format_month_table(ledger: &Ledger, current: Option<usize>) -> String {
    if ledger.is_empty() {
        return "No days in this budget.".to_string();
    }

    let rows: Vec<MonthRow> = ledger
        .days()
        .iter()
        .enumerate()
        .map(|(idx, day)| {
            let marker = if Some(idx) == current { ">" } else { " " };
            let flag = if day.is_over_limit() { " !" } else { "" };
            MonthRow {
                day: format!("{}{}", marker, day.day),
                limit: day.base_daily.to_string(),
                available: day.available.to_string(),
                spent: day.spent().to_string(),
                remaining: format!("{}{}", day.calculated, flag),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

/// Format the totals line printed under the month table
pub fn format_month_totals(ledger: &Ledger, currency: &str) -> String {
    let totals = ledger.totals();
    let mut output = format!(
        "Allocated: {}   Spent: {}   Left: {}",
        totals.allocated.format_with_symbol(currency),
        totals.spent.format_with_symbol(currency),
        totals.remaining.format_with_symbol(currency),
    );
    if totals.days_over_limit > 0 {
        output.push_str(&format!("\nDays over limit: {}", totals.days_over_limit));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, BudgetInput, DEFAULT_EXPENSE_DESC};

    fn ledger() -> Ledger {
        let input = BudgetInput::new(Amount::new(10000.0), Amount::new(1500.0), None);
        let (ledger, _) = Ledger::initialize(&input, 28, 30).unwrap();
        ledger
    }

    #[test]
    fn test_month_table_rows() {
        let table = format_month_table(&ledger(), Some(1));
        assert!(table.contains("Day"));
        assert!(table.contains("Remaining"));
        assert!(table.contains(">29"));
        // (10000 - 1500 - 1500) / 3
        assert!(table.contains("2333.33"));
        assert!(table.contains("7000.00"));
    }

    #[test]
    fn test_month_table_flags_overspend() {
        let (ledger, _) = ledger().add_expense(0, Amount::new(5000.0), "", DEFAULT_EXPENSE_DESC);
        let table = format_month_table(&ledger, None);
        assert!(table.contains("-2666.67 !"));
    }

    #[test]
    fn test_month_totals() {
        let text = format_month_totals(&ledger(), "₽");
        assert!(text.contains("Allocated: 7000.00 ₽"));
        assert!(text.contains("Left: 7000.00 ₽"));
        assert!(!text.contains("over limit"));
    }
}
