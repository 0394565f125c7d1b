//! Ledger recalculation and the owned ledger value
//!
//! `recalculate` walks the day sequence in order, feeding each day's remainder
//! into the next day's available amount. It always runs over the whole
//! sequence.

use crate::error::BudgetResult;
use crate::models::{Amount, BudgetInput, BudgetState, DayRecord, ExpenseId};

use super::allocator::Allocation;
use super::expense::{self, ExpenseOutcome};

/// Recompute `available` and `calculated` for every day
///
/// Days must already be in ascending order. Day numbers, expenses and base
/// limits pass through untouched.
pub fn recalculate(days: &[DayRecord]) -> Vec<DayRecord> {
    let mut carry = Amount::zero();

    days.iter()
        .map(|day| {
            let available = day.base_daily + carry;
            let calculated = available - day.spent();
            carry = calculated;

            DayRecord {
                available,
                calculated,
                ..day.clone()
            }
        })
        .collect()
}

/// Aggregate figures over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerTotals {
    /// Sum of all base limits
    pub allocated: Amount,
    /// Sum of all expenses
    pub spent: Amount,
    /// Remainder of the last day, i.e. what is left for the period
    pub remaining: Amount,
    /// Number of days that end below zero
    pub days_over_limit: usize,
}

/// The budget for one period, passed by value through each operation
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    state: BudgetState,
}

impl Ledger {
    /// Allocate and recalculate a fresh ledger
    pub fn initialize(
        input: &BudgetInput,
        start_day: u32,
        last_day: u32,
    ) -> BudgetResult<(Self, Allocation)> {
        let allocation =
            Allocation::compute(input.salary, input.mandatory_expenses, start_day, last_day)?;
        let days = recalculate(&allocation.days());
        let state = BudgetState::new(input.salary, input.mandatory_expenses, days);
        Ok((Self { state }, allocation))
    }

    /// Restore a ledger exactly as it was persisted
    pub fn from_state(state: BudgetState) -> Self {
        Self { state }
    }

    /// Borrow the underlying state
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Consume the ledger, returning its state
    pub fn into_state(self) -> BudgetState {
        self.state
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.state.days_data
    }

    pub fn len(&self) -> usize {
        self.state.days_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.days_data.is_empty()
    }

    /// Get a day by its position in the sequence
    pub fn day(&self, index: usize) -> Option<&DayRecord> {
        self.state.days_data.get(index)
    }

    /// Total spent on the day at `index` (zero for an unknown index)
    pub fn spent_on(&self, index: usize) -> Amount {
        self.day(index).map(|d| d.spent()).unwrap_or_default()
    }

    /// Whether the day at `index` ends below zero
    pub fn is_over_limit(&self, index: usize) -> bool {
        self.day(index).is_some_and(|d| d.is_over_limit())
    }

    /// Log an expense on the day at `day_index`
    ///
    /// On a rejected amount or index the ledger comes back unchanged and the
    /// outcome carries the error.
    pub fn add_expense(
        mut self,
        day_index: usize,
        amount: Amount,
        desc: &str,
        placeholder: &str,
    ) -> (Self, ExpenseOutcome) {
        let days = std::mem::take(&mut self.state.days_data);
        let (days, outcome) = expense::add_expense(days, day_index, amount, desc, placeholder);
        self.state.days_data = days;
        (self, outcome)
    }

    /// Log an expense from free-text amount input
    pub fn add_expense_input(
        mut self,
        day_index: usize,
        raw_amount: &str,
        desc: &str,
        placeholder: &str,
    ) -> (Self, ExpenseOutcome) {
        let days = std::mem::take(&mut self.state.days_data);
        let (days, outcome) =
            expense::add_expense_input(days, day_index, raw_amount, desc, placeholder);
        self.state.days_data = days;
        (self, outcome)
    }

    /// Remove an expense; unknown ids are ignored
    pub fn remove_expense(mut self, day_index: usize, id: ExpenseId) -> Self {
        let days = std::mem::take(&mut self.state.days_data);
        self.state.days_data = expense::remove_expense(days, day_index, id);
        self
    }

    /// Aggregate figures for the period
    pub fn totals(&self) -> LedgerTotals {
        let days = self.days();
        LedgerTotals {
            allocated: days.iter().map(|d| d.base_daily).sum(),
            spent: days.iter().map(|d| d.spent()).sum(),
            remaining: days.last().map(|d| d.calculated).unwrap_or_default(),
            days_over_limit: days.iter().filter(|d| d.is_over_limit()).count(),
        }
    }
}
