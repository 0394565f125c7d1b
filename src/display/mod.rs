//! Display formatting for terminal output
//!
//! Renders the daily view and the month table.

pub mod day;
pub mod month;
pub mod report;

pub use day::{format_day_details, format_day_summary, format_expense_list};
pub use month::{format_month_table, format_month_totals};
