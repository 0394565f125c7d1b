//! Amount type for representing currency values
//!
//! Budget figures are fractional by nature (a monthly sum split across 30 days
//! rarely divides evenly), so amounts are kept as `f64` and serialized as plain
//! JSON numbers. Rounding only happens at display time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Currency symbols accepted (and ignored) when parsing user input
const CURRENCY_SYMBOLS: [char; 4] = ['$', '₽', '€', '£'];

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use daily_allowance::models::Amount;
    /// let amount = Amount::new(10.5);
    /// assert_eq!(amount.value(), 10.5);
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Check if the amount is a finite number strictly greater than zero
    pub fn is_positive_finite(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Check whether two amounts agree within `tolerance`
    pub fn approx_eq(&self, other: Amount, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "10,50", "$10.50", "10.50 ₽", "1 000".
    /// Sign is preserved; rejecting non-positive amounts is the caller's job.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        let stripped = trimmed
            .trim_start_matches(|c: char| CURRENCY_SYMBOLS.contains(&c))
            .trim_end_matches(|c: char| CURRENCY_SYMBOLS.contains(&c));

        let normalized: String = stripped
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        if normalized.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value: f64 = normalized
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidFormat(trimmed.to_string()));
        }

        Ok(Self(value))
    }

    /// Value rounded to cents, with negative zero folded into zero
    fn display_value(&self) -> f64 {
        let rounded = (self.0 * 100.0).round() / 100.0;
        if rounded == 0.0 {
            0.0
        } else {
            rounded
        }
    }

    /// Format with a trailing currency symbol, e.g. `1033.33 ₽`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            format!("{:.2}", self.display_value())
        } else {
            format!("{:.2} {}", self.display_value(), symbol)
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.display_value())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Amount {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Amount {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Amount {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + *a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
