//! Ledger errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons an account operation is rejected.
///
/// Each one is a caller-visible condition and leaves the ledger untouched.
/// The last two can only come from `create_account`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(Decimal),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Account number sequence exhausted at {0}")]
    SequenceExhausted(u64),

    #[error("Account number already issued: {0}")]
    DuplicateAccount(String),
}

/// Result type alias with LedgerError
pub type LedgerResult<T> = Result<T, LedgerError>;

impl LedgerError {
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, LedgerError::InsufficientBalance { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::AccountNotFound(_))
    }
}
