//! Parsing and validation of raw console input
//!
//! The ledger trusts its callers for holder names and receives amounts as
//! already-parsed decimals, so all text handling happens here.

use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Why a holder name was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Account holder name cannot be empty!")]
    Empty,

    #[error("Name should contain only letters and spaces!")]
    InvalidCharacters,
}

/// Parse a user-entered amount. Accepts plain (`12.50`) and scientific
/// (`1e3`) notation; anything else is `None`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Account numbers are matched case-insensitively by uppercasing input.
pub fn normalize_account_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Trim and validate a holder name: non-empty, ASCII letters and spaces.
pub fn validate_holder_name(raw: &str) -> Result<&str, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
        return Err(NameError::InvalidCharacters);
    }
    Ok(name)
}

/// `Y` or `YES`, any case
pub fn is_confirmation(raw: &str) -> bool {
    matches!(raw.trim().to_uppercase().as_str(), "Y" | "YES")
}
