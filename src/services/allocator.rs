//! Allocator
//!
//! Splits a month's income into equal daily limits over the days that remain
//! in the period.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Amount, DayRecord};

/// Share of gross salary set aside as savings before daily limits are computed
pub const SAVINGS_RATE: f64 = 0.15;

/// The intermediate figures behind a day sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub start_day: u32,
    pub last_day: u32,
    pub total_days: u32,
    pub clean_income: Amount,
    pub savings_reserve: Amount,
    pub available_for_life: Amount,
    pub base_daily: Amount,
}

impl Allocation {
    /// Compute the breakdown for a period
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` if `start_day` is after `last_day`.
    pub fn compute(
        salary: Amount,
        mandatory_expenses: Amount,
        start_day: u32,
        last_day: u32,
    ) -> BudgetResult<Self> {
        let total_days = i64::from(last_day) - i64::from(start_day) + 1;
        if total_days <= 0 {
            return Err(BudgetError::InvalidPeriod {
                start_day,
                last_day,
            });
        }

        // Savings come off gross salary, not net; no clamping at zero
        let clean_income = salary - mandatory_expenses;
        let savings_reserve = salary * SAVINGS_RATE;
        let available_for_life = clean_income - savings_reserve;
        let base_daily = available_for_life / total_days as f64;

        Ok(Self {
            start_day,
            last_day,
            total_days: total_days as u32,
            clean_income,
            savings_reserve,
            available_for_life,
            base_daily,
        })
    }

    /// Build the initial day sequence for this allocation
    pub fn days(&self) -> Vec<DayRecord> {
        (self.start_day..=self.last_day)
            .map(|day| DayRecord::new(day, self.base_daily))
            .collect()
    }
}

/// Build one record per day from `start_day` to `last_day` inclusive
///
/// Records come back with `available == base_daily` and a zero remainder;
/// run them through [`recalculate`](super::ledger::recalculate) before use.
pub fn allocate(
    salary: Amount,
    mandatory_expenses: Amount,
    start_day: u32,
    last_day: u32,
) -> BudgetResult<Vec<DayRecord>> {
    Allocation::compute(salary, mandatory_expenses, start_day, last_day).map(|a| a.days())
}
