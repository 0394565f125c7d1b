//! Budget input and persisted budget state
//!
//! `BudgetInput` is what the user enters once per period; `BudgetState` is the
//! document kept on disk between invocations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::day::DayRecord;
use super::ids::ExpenseId;

/// Inputs that seed a budgeting period
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetInput {
    /// Monthly net income
    pub salary: Amount,

    /// Rent, utilities and other fixed costs
    pub mandatory_expenses: Amount,

    /// First day to budget; defaults to the 1st of the month
    pub start_date: Option<NaiveDate>,
}

impl BudgetInput {
    /// Create a new budget input
    pub fn new(salary: Amount, mandatory_expenses: Amount, start_date: Option<NaiveDate>) -> Self {
        Self {
            salary,
            mandatory_expenses,
            start_date,
        }
    }

    /// Validate the input
    ///
    /// Mandatory expenses are not checked against salary: a budget that does
    /// not cover them simply produces negative daily limits.
    pub fn validate(&self) -> Result<(), BudgetInputError> {
        if !self.salary.is_positive_finite() {
            return Err(BudgetInputError::NonPositiveSalary(self.salary));
        }

        let mandatory = self.mandatory_expenses.value();
        if !mandatory.is_finite() || mandatory < 0.0 {
            return Err(BudgetInputError::NegativeMandatory(self.mandatory_expenses));
        }

        Ok(())
    }
}

/// Validation errors for budget input
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetInputError {
    NonPositiveSalary(Amount),
    NegativeMandatory(Amount),
}

impl fmt::Display for BudgetInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSalary(a) => write!(f, "Salary must be greater than zero (got {})", a),
            Self::NegativeMandatory(a) => {
                write!(f, "Mandatory expenses cannot be negative (got {})", a)
            }
        }
    }
}

impl std::error::Error for BudgetInputError {}

/// The persisted budget document
///
/// Field names match the on-disk layout: `salary`, `mandatoryExpenses`,
/// `daysData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetState {
    pub salary: Amount,
    pub mandatory_expenses: Amount,
    #[serde(default)]
    pub days_data: Vec<DayRecord>,
}

impl BudgetState {
    /// Create a new state from an already-computed day sequence
    pub fn new(salary: Amount, mandatory_expenses: Amount, days_data: Vec<DayRecord>) -> Self {
        Self {
            salary,
            mandatory_expenses,
            days_data,
        }
    }

    /// Highest expense id across all days
    pub fn max_expense_id(&self) -> Option<ExpenseId> {
        self.days_data.iter().filter_map(|d| d.max_expense_id()).max()
    }

    /// Position of a day-of-month within the sequence
    pub fn index_of_day(&self, day: u32) -> Option<usize> {
        self.days_data.iter().position(|d| d.day == day)
    }
}
