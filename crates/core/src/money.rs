//! Money - Non-negative decimal amounts and their display form
//!
//! Balances can never go below zero, so they are held as `Amount`.
//! Amounts entered by a user are plain `Decimal` until an operation
//! accepts them.

use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use thiserror::Error;

/// Symbol printed in front of every rendered amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Number of decimals shown to users.
const DISPLAY_DECIMALS: u32 = 2;

/// Errors that can occur when working with amounts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
}

/// A non-negative decimal amount.
///
/// # Invariant
/// The inner value is always >= 0. This is enforced by the constructor.
///
/// # Example
/// ```
/// use transx_core::Amount;
/// use rust_decimal::Decimal;
///
/// let amount = Amount::new(Decimal::new(4250, 2)).unwrap();
/// assert_eq!(amount.to_string(), "42.50");
///
/// assert!(Amount::new(Decimal::new(-1, 0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    /// Zero amount constant
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new Amount, rejecting negative values.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            Err(AmountError::NegativeAmount(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create an Amount, replacing a negative value with zero.
    pub fn clamped(value: Decimal) -> Self {
        Self::new(value).unwrap_or(Self::ZERO)
    }

    /// Get the inner Decimal value
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Addition - returns None on decimal overflow
    pub fn checked_add(&self, other: &Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    /// Subtraction - returns None if the result would be negative
    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        let result = self.0.checked_sub(other.0)?;
        if result < Decimal::ZERO {
            None
        } else {
            Some(Amount(result))
        }
    }

    /// Value rounded half away from zero to display precision
    pub fn rounded(&self) -> Decimal {
        round_for_display(self.0)
    }
}

/// Renders with two decimals, the way balances are shown to users.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{:.2}", self.rounded()))
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Format any decimal as a user-facing money string, e.g. `$1234.50`.
pub fn format_money(value: Decimal) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, round_for_display(value))
}
