//! Expense model
//!
//! A single spending entry logged against one day of the ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::ExpenseId;

/// Description used when the user leaves the description blank
pub const DEFAULT_EXPENSE_DESC: &str = "Expense";

/// A logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier (creation timestamp in milliseconds)
    pub id: ExpenseId,

    /// Amount spent, always positive
    pub amount: Amount,

    /// Free-text description
    pub desc: String,
}

impl Expense {
    /// Create a new expense, falling back to `placeholder` for a blank description
    pub fn new(id: ExpenseId, amount: Amount, desc: &str, placeholder: &str) -> Self {
        let desc = desc.trim();
        let desc = if desc.is_empty() { placeholder } else { desc };
        Self {
            id,
            amount,
            desc: desc.to_string(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.desc, self.amount)
    }
}
