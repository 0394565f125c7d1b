//! daily-allowance - a daily spending limit for the rest of the month
//!
//! Given a salary and fixed monthly costs, the library sets aside savings,
//! spreads what is left evenly over the remaining days of the month, and
//! carries each day's surplus or overspend into the next.
//!
//! # Architecture
//!
//! - `models`: amounts, expenses, day records and the persisted budget state
//! - `services`: allocation, carry-forward recalculation and expense logging
//! - `storage`: JSON file storage for the budget document
//! - `config`: paths and user settings
//! - `display`: terminal formatting for the daily view and month table
//! - `export`: CSV, JSON and YAML export
//! - `host`: readiness signals for an embedding host
//! - `cli`: command handlers used by the `allowance` binary
//!
//! # Example
//!
//! ```rust
//! use daily_allowance::models::{Amount, BudgetInput};
//! use daily_allowance::services::Ledger;
//!
//! let input = BudgetInput::new(Amount::new(60000.0), Amount::new(20000.0), None);
//! let (ledger, allocation) = Ledger::initialize(&input, 1, 30).unwrap();
//! assert_eq!(ledger.len(), 30);
//! assert!(allocation.base_daily.approx_eq(Amount::new(1033.33), 0.01));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod host;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
pub use logging::init_tracing;
