//! Export command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_ledger, ExportFormat};

use super::CommandContext;

/// Handle `allowance export`
///
/// Writes to `output` when given, otherwise to stdout.
pub fn handle_export(
    ctx: &CommandContext<'_>,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> BudgetResult<()> {
    let ledger = ctx.service().ledger()?;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_ledger(&ledger, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;
            println!("Budget exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export_ledger(&ledger, format, &mut writer)?;
            writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::config::Settings;
    use crate::host::NoHost;
    use crate::models::{Amount, BudgetInput};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings::default();
        let ctx = CommandContext {
            storage: &storage,
            settings: &settings,
            host: &NoHost,
            today: NaiveDate::from_ymd_opt(2025, 2, 20).unwrap(),
        };
        let input = BudgetInput::new(Amount::new(10000.0), Amount::new(0.0), None);
        ctx.service().initialize(&input, ctx.today).unwrap();

        let out = temp_dir.path().join("budget.csv");
        handle_export(&ctx, ExportFormat::Csv, Some(out.clone())).unwrap();

        let text = std::fs::read_to_string(out).unwrap();
        // Header plus the 28 days of February 2025
        assert_eq!(text.lines().count(), 29);
        assert!(text.lines().nth(1).unwrap().starts_with("1,"));
    }
}
