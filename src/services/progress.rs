//! Spending progress for a single day

use crate::models::Amount;

/// Percentage at which the bar switches to the warning style
pub const WARNING_PERCENT: f64 = 80.0;

/// Percentage at which the bar switches to the danger style
pub const DANGER_PERCENT: f64 = 100.0;

/// Share of `available` already spent, in `[0, 100]`
///
/// A zero or negative budget counts as fully consumed.
pub fn progress_percent(available: Amount, spent: Amount) -> f64 {
    if available.value() <= 0.0 {
        return 100.0;
    }
    let progress = spent.value() / available.value() * 100.0;
    progress.min(100.0)
}

/// Styling bucket for a progress value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressLevel {
    Normal,
    Warning,
    Danger,
}

impl ProgressLevel {
    pub fn from_percent(percent: f64) -> Self {
        if percent >= DANGER_PERCENT {
            Self::Danger
        } else if percent >= WARNING_PERCENT {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}
