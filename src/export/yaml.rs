//! YAML export
//!
//! Same document as the JSON export, for reading by eye.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::LedgerExport;
use crate::services::Ledger;

/// Export the ledger to YAML
pub fn export_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> BudgetResult<()> {
    let export = LedgerExport::from_ledger(ledger);

    writeln!(writer, "# daily-allowance ledger export")
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))
}
