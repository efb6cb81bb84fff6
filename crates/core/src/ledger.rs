//! Ledger - In-memory registry of accounts
//!
//! The ledger owns every `Account`, mints account numbers, and forwards
//! deposit / withdraw / balance queries. It is an ordinary owned value:
//! create one per run and hand it to whatever serves the user.

use crate::account::{Account, AccountId};
use crate::config::LedgerConfig;
use crate::error::{LedgerError, LedgerResult};
use crate::money::Amount;
use rust_decimal::Decimal;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Registry of accounts keyed by generated account number.
///
/// # Invariant
/// Every key was produced by `next_account_id`, and the sequence only moves
/// forward (it stops at `u64::MAX` instead of wrapping), so ids are never
/// reused.
#[derive(Debug)]
pub struct Ledger {
    accounts: HashMap<AccountId, Account>,
    account_prefix: String,
    next_sequence: u64,
}

impl Ledger {
    /// Create an empty ledger with the default numbering (`ACC1001`, ...)
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create an empty ledger with custom numbering
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            accounts: HashMap::new(),
            account_prefix: config.account_prefix,
            next_sequence: config.sequence_base,
        }
    }

    fn next_account_id(&mut self) -> LedgerResult<AccountId> {
        let sequence = self
            .next_sequence
            .checked_add(1)
            .ok_or(LedgerError::SequenceExhausted(self.next_sequence))?;
        self.next_sequence = sequence;
        Ok(AccountId::new(format!("{}{}", self.account_prefix, sequence)))
    }

    /// Open a new account and return it.
    ///
    /// A negative `initial_deposit` is clamped to zero; holder names are
    /// expected to be validated by the caller. Only fails once the id
    /// sequence is exhausted, leaving the ledger unchanged.
    pub fn create_account(
        &mut self,
        holder_name: impl Into<String>,
        initial_deposit: Decimal,
    ) -> LedgerResult<&Account> {
        let id = self.next_account_id().inspect_err(|e| {
            tracing::error!(error = %e, "Cannot mint account number");
        })?;

        match self.accounts.entry(id) {
            Entry::Occupied(entry) => {
                tracing::error!(account = %entry.key(), "Account number already issued");
                Err(LedgerError::DuplicateAccount(entry.key().to_string()))
            }
            Entry::Vacant(entry) => {
                let account = Account::new(entry.key().clone(), holder_name, initial_deposit);
                tracing::info!(
                    account = %entry.key(),
                    balance = %account.balance(),
                    "Account created"
                );
                Ok(&*entry.insert(account))
            }
        }
    }

    /// Open a new account with a zero balance
    pub fn open_account(&mut self, holder_name: impl Into<String>) -> LedgerResult<&Account> {
        self.create_account(holder_name, Decimal::ZERO)
    }

    /// Change the holder name of an existing account.
    pub fn rename(&mut self, id: &str, holder_name: impl Into<String>) -> LedgerResult<()> {
        let holder_name = holder_name.into();
        let account = self.account_mut(id)?;
        tracing::debug!(account = id, from = account.holder_name(), to = %holder_name, "Holder renamed");
        account.set_holder_name(holder_name);
        Ok(())
    }

    pub fn exists(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    pub fn get_account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Deposit into `id`, returning the new balance.
    pub fn try_deposit(&mut self, id: &str, amount: Decimal) -> LedgerResult<Amount> {
        let result = self.account_mut(id)?.try_deposit(amount);
        log_outcome("deposit", id, amount, &result);
        result
    }

    /// Withdraw from `id`, returning the new balance.
    pub fn try_withdraw(&mut self, id: &str, amount: Decimal) -> LedgerResult<Amount> {
        let result = self.account_mut(id)?.try_withdraw(amount);
        log_outcome("withdraw", id, amount, &result);
        result
    }

    /// Returns `false` if the account is unknown or the amount is rejected.
    pub fn deposit(&mut self, id: &str, amount: Decimal) -> bool {
        self.try_deposit(id, amount).is_ok()
    }

    /// Returns `false` if the account is unknown, the amount is not
    /// positive, or the balance is insufficient.
    pub fn withdraw(&mut self, id: &str, amount: Decimal) -> bool {
        self.try_withdraw(id, amount).is_ok()
    }

    /// Current balance, or `None` for an unknown account
    pub fn balance(&self, id: &str) -> Option<Amount> {
        self.get_account(id).map(Account::balance)
    }

    /// Number of registered accounts
    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    fn account_mut(&mut self, id: &str) -> LedgerResult<&mut Account> {
        self.accounts.get_mut(id).ok_or_else(|| {
            tracing::warn!(account = id, "Account not found");
            LedgerError::AccountNotFound(id.to_string())
        })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn log_outcome(operation: &'static str, id: &str, amount: Decimal, result: &LedgerResult<Amount>) {
    match result {
        Ok(balance) => {
            tracing::debug!(operation, account = id, %amount, %balance, "Operation applied")
        }
        Err(e) => tracing::warn!(operation, account = id, %amount, error = %e, "Operation rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sequential_ids() {
        let mut ledger = Ledger::new();
        let first = ledger.open_account("Alice").unwrap().id().clone();
        let second = ledger.open_account("Bob").unwrap().id().clone();

        assert_eq!(first.as_str(), "ACC1001");
        assert_eq!(second.as_str(), "ACC1002");
    }

    #[test]
    fn test_custom_numbering() {
        let config = LedgerConfig::default()
            .with_prefix("TRX")
            .with_sequence_base(41);
        let mut ledger = Ledger::with_config(config);

        assert_eq!(ledger.open_account("Alice").unwrap().id().as_str(), "TRX42");
    }

    #[test]
    fn test_create_with_initial_deposit() {
        let mut ledger = Ledger::new();
        let account = ledger.create_account("Alice", dec!(250.75)).unwrap();
        assert_eq!(account.balance().value(), dec!(250.75));
        assert_eq!(account.holder_name(), "Alice");
    }

    #[test]
    fn test_negative_initial_deposit_clamped() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice", dec!(-50)).unwrap().id().clone();
        assert_eq!(ledger.balance(id.as_str()), Some(Amount::ZERO));
    }

    #[test]
    fn test_exists_and_lookup() {
        let mut ledger = Ledger::new();
        let id = ledger.open_account("Alice").unwrap().id().clone();

        assert!(ledger.exists(id.as_str()));
        assert!(!ledger.exists("ACC9999"));
        assert_eq!(ledger.get_account(id.as_str()).map(Account::holder_name), Some("Alice"));
        assert!(ledger.get_account("ACC9999").is_none());
    }

    #[test]
    fn test_unknown_account_operations() {
        let mut ledger = Ledger::new();

        assert!(!ledger.deposit("ACC1001", dec!(10)));
        assert!(!ledger.withdraw("ACC1001", dec!(10)));
        assert_eq!(ledger.balance("ACC1001"), None);
        assert_eq!(
            ledger.try_deposit("ACC1001", dec!(10)),
            Err(LedgerError::AccountNotFound("ACC1001".to_string()))
        );
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        let mut ledger = Ledger::new();
        ledger.open_account("Alice").unwrap();
        assert!(!ledger.exists("acc1001"));
    }

    #[test]
    fn test_count_tracks_creations_only() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.count(), 0);

        let id = ledger.open_account("Alice").unwrap().id().clone();
        assert_eq!(ledger.count(), 1);

        ledger.deposit(id.as_str(), dec!(100));
        ledger.withdraw(id.as_str(), dec!(30));
        ledger.withdraw(id.as_str(), dec!(1000));
        assert_eq!(ledger.count(), 1);

        ledger.create_account("Bob", dec!(-1)).unwrap();
        assert_eq!(ledger.count(), 2);
    }

    #[test]
    fn test_sequence_exhaustion_is_an_error() {
        let config = LedgerConfig::default().with_sequence_base(u64::MAX - 1);
        let mut ledger = Ledger::with_config(config);

        let last = ledger.open_account("Alice").unwrap().id().clone();
        assert_eq!(last.to_string(), format!("ACC{}", u64::MAX));

        assert_eq!(
            ledger.open_account("Bob").map(|a| a.id().clone()),
            Err(LedgerError::SequenceExhausted(u64::MAX))
        );
        assert_eq!(
            ledger.create_account("Carol", dec!(10)).map(|a| a.id().clone()),
            Err(LedgerError::SequenceExhausted(u64::MAX))
        );
        assert_eq!(ledger.count(), 1);
        assert_eq!(ledger.get_account(last.as_str()).map(Account::holder_name), Some("Alice"));
    }

    #[test]
    fn test_exhausted_from_the_start() {
        let mut ledger = Ledger::with_config(LedgerConfig::default().with_sequence_base(u64::MAX));
        assert!(ledger.open_account("Alice").is_err());
        assert_eq!(ledger.count(), 0);
    }

    #[test]
    fn test_rename() {
        let mut ledger = Ledger::new();
        let id = ledger.open_account("Alice").unwrap().id().clone();

        ledger.rename(id.as_str(), "Alice Smith").unwrap();
        assert_eq!(
            ledger.get_account(id.as_str()).map(Account::holder_name),
            Some("Alice Smith")
        );
        assert_eq!(
            ledger.rename("ACC9999", "Nobody"),
            Err(LedgerError::AccountNotFound("ACC9999".to_string()))
        );
    }

    #[test]
    fn test_duplicate_id_is_not_overwritten() {
        let mut ledger = Ledger::new();
        let id = ledger.create_account("Alice", dec!(50)).unwrap().id().clone();

        ledger.next_sequence -= 1;
        assert_eq!(
            ledger.open_account("Mallory").map(|a| a.id().clone()),
            Err(LedgerError::DuplicateAccount(id.to_string()))
        );
        assert_eq!(ledger.count(), 1);
        assert_eq!(ledger.get_account(id.as_str()).map(Account::holder_name), Some("Alice"));
        assert_eq!(ledger.balance(id.as_str()), Some(Amount::new(dec!(50)).unwrap()));
    }
}
