//! Core data models for daily-allowance
//!
//! This module contains the data structures that make up the budgeting
//! domain: amounts, expenses, day records and the persisted budget state.

pub mod amount;
pub mod budget;
pub mod day;
pub mod expense;
pub mod ids;

pub use amount::{Amount, AmountParseError};
pub use budget::{BudgetInput, BudgetInputError, BudgetState};
pub use day::DayRecord;
pub use expense::{Expense, DEFAULT_EXPENSE_DESC};
pub use ids::ExpenseId;
