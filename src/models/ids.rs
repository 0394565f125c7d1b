//! Expense identifiers
//!
//! Expense ids are plain integers (milliseconds since the Unix epoch at
//! creation) so the persisted document stores them as JSON numbers. Ids only
//! need to be unique within one ledger; generation bumps past the highest id
//! already present so two expenses added within the same millisecond still
//! differ.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a logged expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap an existing raw id
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Generate a fresh id from the wall clock, strictly greater than `after`
    ///
    /// Returns `None` once `after` is already `u64::MAX`.
    pub fn generate(after: Option<ExpenseId>) -> Option<Self> {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        Self::next_from(now, after)
    }

    /// Pick `clock` unless it would not be greater than `after`
    pub fn next_from(clock: u64, after: Option<ExpenseId>) -> Option<Self> {
        match after {
            Some(ExpenseId(last)) if last >= clock => last.checked_add(1).map(Self),
            _ => Some(Self(clock)),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
