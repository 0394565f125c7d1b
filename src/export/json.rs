//! JSON export
//!
//! Wraps the budget document with a schema version and summary metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, BudgetState};
use crate::services::Ledger;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The budget document exactly as stored
    pub budget: BudgetState,

    /// Export metadata for reference
    pub metadata: ExportMetadata,
}

/// Summary figures included alongside the budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub day_count: usize,
    pub expense_count: usize,
    pub first_day: Option<u32>,
    pub last_day: Option<u32>,
    pub total_allocated: Amount,
    pub total_spent: Amount,
    pub remaining: Amount,
}

impl LedgerExport {
    /// Create an export from a ledger
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let days = ledger.days();
        let totals = ledger.totals();

        let metadata = ExportMetadata {
            day_count: days.len(),
            expense_count: days.iter().map(|d| d.expenses.len()).sum(),
            first_day: days.first().map(|d| d.day),
            last_day: days.last().map(|d| d.day),
            total_allocated: totals.allocated,
            total_spent: totals.spent,
            remaining: totals.remaining,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            budget: ledger.state().clone(),
            metadata,
        }
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(ledger: &Ledger, writer: &mut W, pretty: bool) -> BudgetResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetInput, DEFAULT_EXPENSE_DESC};

    fn ledger() -> Ledger {
        let input = BudgetInput::new(Amount::new(30000.0), Amount::new(10000.0), None);
        let (ledger, _) = Ledger::initialize(&input, 1, 30).unwrap();
        let (ledger, _) = ledger.add_expense(0, Amount::new(250.0), "books", DEFAULT_EXPENSE_DESC);
        ledger
    }

    #[test]
    fn test_export_json() {
        let ledger = ledger();
        let mut out = Vec::new();
        export_json(&ledger, &mut out, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["metadata"]["day_count"], 30);
        assert_eq!(value["metadata"]["expense_count"], 1);
        assert_eq!(value["metadata"]["first_day"], 1);
        assert_eq!(value["budget"]["daysData"][0]["expenses"][0]["desc"], "books");
    }

    #[test]
    fn test_export_round_trips_budget() {
        let ledger = ledger();
        let mut out = Vec::new();
        export_json(&ledger, &mut out, false).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(&parsed.budget, ledger.state());
    }
}
