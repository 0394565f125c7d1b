//! Expense mutation
//!
//! Adding or removing an expense touches a single day, then reruns the full
//! ledger recalculation. Rejected input never alters the sequence.

use tracing::{debug, warn};

use crate::error::BudgetError;
use crate::models::{Amount, DayRecord, Expense, ExpenseId};

use super::ledger::recalculate;

/// Result of an add attempt
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseOutcome {
    /// The expense was stored under this id
    Added(ExpenseId),
    /// The input was refused; the sequence is unchanged
    Rejected(BudgetError),
}

impl ExpenseOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// Id of the stored expense, if any
    pub fn expense_id(&self) -> Option<ExpenseId> {
        match self {
            Self::Added(id) => Some(*id),
            Self::Rejected(_) => None,
        }
    }

    /// The rejection reason, if any
    pub fn error(&self) -> Option<&BudgetError> {
        match self {
            Self::Added(_) => None,
            Self::Rejected(err) => Some(err),
        }
    }

    /// Convert into a `Result` for callers that want `?`
    pub fn into_result(self) -> Result<ExpenseId, BudgetError> {
        match self {
            Self::Added(id) => Ok(id),
            Self::Rejected(err) => Err(err),
        }
    }
}

/// Append an expense to `days[day_index]` and recalculate
pub fn add_expense(
    days: Vec<DayRecord>,
    day_index: usize,
    amount: Amount,
    desc: &str,
    placeholder: &str,
) -> (Vec<DayRecord>, ExpenseOutcome) {
    if !amount.is_positive_finite() {
        warn!(amount = amount.value(), "rejected expense amount");
        return (
            days,
            ExpenseOutcome::Rejected(BudgetError::invalid_amount(amount.value())),
        );
    }

    if day_index >= days.len() {
        warn!(day_index, len = days.len(), "expense day index out of range");
        let len = days.len();
        return (
            days,
            ExpenseOutcome::Rejected(BudgetError::DayOutOfRange {
                index: day_index,
                len,
            }),
        );
    }

    let last_id = days.iter().filter_map(|d| d.max_expense_id()).max();
    let Some(id) = ExpenseId::generate(last_id) else {
        warn!(last_id = ?last_id, "no expense ids left");
        return (
            days,
            ExpenseOutcome::Rejected(BudgetError::Validation(
                "No expense ids left in this budget".into(),
            )),
        );
    };

    let mut days = days;
    days[day_index]
        .expenses
        .push(Expense::new(id, amount, desc, placeholder));

    // Balances must stay representable as JSON numbers
    let candidate = recalculate(&days);
    if !has_finite_balances(&candidate) {
        days[day_index].expenses.pop();
        warn!(amount = amount.value(), "expense would overflow the ledger");
        return (
            days,
            ExpenseOutcome::Rejected(BudgetError::invalid_amount(amount.value())),
        );
    }

    debug!(%id, day = candidate[day_index].day, amount = amount.value(), "expense added");
    (candidate, ExpenseOutcome::Added(id))
}

fn has_finite_balances(days: &[DayRecord]) -> bool {
    days.iter()
        .all(|d| d.available.value().is_finite() && d.calculated.value().is_finite())
}

/// Parse free-text input and add it as an expense
///
/// Anything that does not parse as a number is rejected as `InvalidAmount`,
/// the same as zero or a negative amount.
pub fn add_expense_input(
    days: Vec<DayRecord>,
    day_index: usize,
    raw_amount: &str,
    desc: &str,
    placeholder: &str,
) -> (Vec<DayRecord>, ExpenseOutcome) {
    match Amount::parse(raw_amount) {
        Ok(amount) => add_expense(days, day_index, amount, desc, placeholder),
        Err(e) => {
            warn!(input = raw_amount, error = %e, "unparsable expense amount");
            (
                days,
                ExpenseOutcome::Rejected(BudgetError::invalid_amount(raw_amount.trim())),
            )
        }
    }
}

/// Remove the expense with `id` from `days[day_index]` and recalculate
///
/// A missing id or day index is not an error.
pub fn remove_expense(mut days: Vec<DayRecord>, day_index: usize, id: ExpenseId) -> Vec<DayRecord> {
    if let Some(day) = days.get_mut(day_index) {
        let before = day.expenses.len();
        day.expenses.retain(|e| e.id != id);
        if day.expenses.len() < before {
            debug!(%id, day = day.day, "expense removed");
        }
    }

    recalculate(&days)
}
