//! Export module for daily-allowance
//!
//! - CSV: one row per day (spreadsheet-compatible)
//! - JSON: the full budget document plus metadata
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::BudgetResult;
use crate::services::Ledger;

pub use self::csv::export_csv;
pub use self::json::{export_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

/// Write the ledger in the requested format
pub fn export_ledger<W: Write>(ledger: &Ledger, format: ExportFormat, writer: &mut W) -> BudgetResult<()> {
    match format {
        ExportFormat::Csv => export_csv(ledger, writer),
        ExportFormat::Json => export_json(ledger, writer, true),
        ExportFormat::Yaml => export_yaml(ledger, writer),
    }
}
