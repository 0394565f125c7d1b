//! Service layer for daily-allowance
//!
//! The allocator, ledger recalculation and expense mutation are pure
//! functions over day records; `BudgetService` ties them to storage.

pub mod allocator;
pub mod budget;
pub mod expense;
pub mod ledger;
pub mod period;
pub mod progress;

pub use allocator::{allocate, Allocation, SAVINGS_RATE};
pub use budget::{BudgetService, Initialized};
pub use expense::{add_expense, add_expense_input, remove_expense, ExpenseOutcome};
pub use ledger::{recalculate, Ledger, LedgerTotals};
pub use period::DayRange;
pub use progress::{progress_percent, ProgressLevel};
