//! Account - Holder identity plus a guarded, non-negative balance
//!
//! Accounts are only constructed by the `Ledger`; everything outside the
//! crate sees them through shared references and read-only accessors.

use crate::error::{LedgerError, LedgerResult};
use crate::money::{Amount, CURRENCY_SYMBOL};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::borrow::Borrow;
use std::fmt;

/// Ledger-generated account number (e.g. `ACC1001`).
///
/// Implements `Borrow<str>` so the ledger map can be queried with a plain
/// `&str`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A bank account.
///
/// # Invariant
/// `balance >= 0` at all times. Both mutating operations check first and
/// only then write, so a rejected call never changes state.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Amount,
    opened_at: DateTime<Utc>,
}

impl Account {
    /// Create an account. A negative initial balance is clamped to zero.
    pub(crate) fn new(id: AccountId, holder_name: impl Into<String>, initial_balance: Decimal) -> Self {
        Self {
            id,
            holder_name: holder_name.into(),
            balance: Amount::clamped(initial_balance),
            opened_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub(crate) fn set_holder_name(&mut self, holder_name: impl Into<String>) {
        self.holder_name = holder_name.into();
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Credit `amount`, returning the new balance.
    ///
    /// Fails with `InvalidAmount` unless `amount > 0`.
    pub fn try_deposit(&mut self, amount: Decimal) -> LedgerResult<Amount> {
        let credit = require_positive(amount)?;
        let balance = self
            .balance
            .checked_add(&credit)
            .ok_or(LedgerError::InvalidAmount(amount))?;
        self.balance = balance;
        Ok(balance)
    }

    /// Debit `amount`, returning the new balance.
    ///
    /// Fails with `InvalidAmount` unless `amount > 0`, and with
    /// `InsufficientBalance` if `amount` exceeds the current balance.
    pub fn try_withdraw(&mut self, amount: Decimal) -> LedgerResult<Amount> {
        let debit = require_positive(amount)?;
        let balance = self
            .balance
            .checked_sub(&debit)
            .ok_or(LedgerError::InsufficientBalance {
                requested: amount,
                available: self.balance.value(),
            })?;
        self.balance = balance;
        Ok(balance)
    }

    /// Returns `true` if the deposit was applied.
    pub fn deposit(&mut self, amount: Decimal) -> bool {
        self.try_deposit(amount).is_ok()
    }

    /// Returns `true` if the withdrawal was applied.
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        self.try_withdraw(amount).is_ok()
    }

    /// Fixed-width details card.
    pub fn describe(&self) -> String {
        let balance = format!("{}{}", CURRENCY_SYMBOL, self.balance);
        let opened = self.opened_at.format("%Y-%m-%d %H:%M UTC").to_string();
        [
            "+--------------------------------------------+".to_string(),
            "|           ACCOUNT DETAILS                  |".to_string(),
            "+--------------------------------------------+".to_string(),
            format!("|  Account Number  : {:<23} |", self.id),
            format!("|  Account Holder  : {:<23} |", self.holder_name),
            format!("|  Current Balance : {:<23} |", balance),
            format!("|  Opened On       : {:<23} |", opened),
            "+--------------------------------------------+".to_string(),
        ]
        .join("\n")
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account {} (holder: {}, balance: {}{})",
            self.id, self.holder_name, CURRENCY_SYMBOL, self.balance
        )
    }
}

fn require_positive(amount: Decimal) -> LedgerResult<Amount> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount(amount));
    }
    Amount::new(amount).map_err(|_| LedgerError::InvalidAmount(amount))
}
