//! Day record model
//!
//! One entry per calendar day of the active period, holding that day's base
//! limit, its logged expenses and the running balances derived from them.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::expense::Expense;
use super::ids::ExpenseId;

/// A single day of the ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    /// Day of the month (1-31)
    pub day: u32,

    /// Expenses in entry order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// The day's share of the allocatable amount, fixed at allocation
    pub base_daily: Amount,

    /// Base limit plus whatever carried in from the previous day
    pub available: Amount,

    /// Available minus today's spending; carried into the next day
    pub calculated: Amount,
}

impl DayRecord {
    /// Create a fresh day with no expenses
    pub fn new(day: u32, base_daily: Amount) -> Self {
        Self {
            day,
            expenses: Vec::new(),
            base_daily,
            available: base_daily,
            calculated: Amount::zero(),
        }
    }

    /// Total of this day's expenses
    pub fn spent(&self) -> Amount {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Whether the day ends below zero
    pub fn is_over_limit(&self) -> bool {
        self.calculated.is_negative()
    }

    /// Carry that flowed into this day from the previous one
    pub fn carry_in(&self) -> Amount {
        self.available - self.base_daily
    }

    /// Find an expense by id
    pub fn find_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Highest expense id on this day
    pub fn max_expense_id(&self) -> Option<ExpenseId> {
        self.expenses.iter().map(|e| e.id).max()
    }
}
