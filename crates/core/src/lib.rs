//! TransX Core - Domain types and the in-memory ledger
//!
//! This crate contains everything the console front-end calls into:
//! - `Amount`: Non-negative decimal wrapper for balances
//! - `Account`: Holder identity plus a guarded balance
//! - `Ledger`: Registry that owns all accounts and mints their ids
//! - `LedgerConfig`: Id prefix and sequence base
//!
//! The core never prints. Rejected operations are reported through
//! `LedgerError` (or a plain `bool` for callers that only need success),
//! and logged through `tracing`.

pub mod account;
pub mod config;
pub mod error;
pub mod ledger;
pub mod money;

pub use account::{Account, AccountId};
pub use config::LedgerConfig;
pub use error::{LedgerError, LedgerResult};
pub use ledger::Ledger;
pub use money::{format_money, Amount, AmountError, CURRENCY_SYMBOL};
