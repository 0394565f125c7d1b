//! CSV export
//!
//! One row per day, spreadsheet-friendly.

use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::services::Ledger;

#[derive(Serialize)]
struct DayRow<'a> {
    #[serde(rename = "Day")]
    day: u32,
    #[serde(rename = "Base Daily")]
    base_daily: String,
    #[serde(rename = "Available")]
    available: String,
    #[serde(rename = "Spent")]
    spent: String,
    #[serde(rename = "Remaining")]
    remaining: String,
    #[serde(rename = "Expenses")]
    expenses: usize,
    #[serde(rename = "Descriptions")]
    descriptions: &'a str,
}

/// Export the day ledger to CSV
pub fn export_csv<W: Write>(ledger: &Ledger, writer: W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for day in ledger.days() {
        let descriptions = day
            .expenses
            .iter()
            .map(|e| e.desc.as_str())
            .collect::<Vec<_>>()
            .join("; ");

        csv_writer
            .serialize(DayRow {
                day: day.day,
                base_daily: day.base_daily.to_string(),
                available: day.available.to_string(),
                spent: day.spent().to_string(),
                remaining: day.calculated.to_string(),
                expenses: day.expenses.len(),
                descriptions: &descriptions,
            })
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, BudgetInput, DEFAULT_EXPENSE_DESC};

    #[test]
    fn test_export_csv() {
        let input = BudgetInput::new(Amount::new(10000.0), Amount::new(1500.0), None);
        let (ledger, _) = Ledger::initialize(&input, 29, 30).unwrap();
        let (ledger, _) = ledger.add_expense(0, Amount::new(100.0), "tea, cake", DEFAULT_EXPENSE_DESC);

        let mut out = Vec::new();
        export_csv(&ledger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Day,Base Daily,Available,Spent,Remaining,Expenses,Descriptions"
        );
        assert_eq!(lines[1], "29,3500.00,3500.00,100.00,3400.00,1,\"tea, cake\"");
        assert_eq!(lines[2], "30,3500.00,6900.00,0.00,6900.00,0,");
        assert_eq!(lines.len(), 3);
    }
}
