//! Integration tests for the ledger: end-to-end account flows and the
//! balance invariants that must hold for any amount.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use transx_core::{Amount, Ledger, LedgerConfig, LedgerError};

/// Amounts that every operation must reject
fn non_positive_amounts() -> Vec<Decimal> {
    vec![dec!(0), dec!(-0.01), dec!(-1), dec!(-40.00), dec!(-1000000)]
}

fn positive_amounts() -> Vec<Decimal> {
    vec![dec!(0.01), dec!(1), dec!(19.99), dec!(40.00), dec!(1000000.50)]
}

#[test]
fn test_alice_scenario() {
    let mut ledger = Ledger::new();
    let id = ledger.open_account("Alice").unwrap().id().clone();
    let id = id.as_str();

    assert_eq!(ledger.balance(id).map(|b| b.to_string()), Some("0.00".into()));

    assert!(ledger.deposit(id, dec!(100.00)));
    assert_eq!(ledger.balance(id).map(|b| b.to_string()), Some("100.00".into()));

    assert!(ledger.withdraw(id, dec!(40.00)));
    assert_eq!(ledger.balance(id).map(|b| b.to_string()), Some("60.00".into()));

    assert!(!ledger.withdraw(id, dec!(1000.00)));
    assert_eq!(ledger.balance(id).map(|b| b.to_string()), Some("60.00".into()));
}

#[test]
fn test_non_positive_amounts_never_change_balance() {
    let mut ledger = Ledger::new();
    let id = ledger.create_account("Alice", dec!(500)).unwrap().id().clone();
    let id = id.as_str();

    for amount in non_positive_amounts() {
        assert!(!ledger.deposit(id, amount), "deposit of {amount} accepted");
        assert!(!ledger.withdraw(id, amount), "withdrawal of {amount} accepted");
        assert_eq!(
            ledger.try_deposit(id, amount),
            Err(LedgerError::InvalidAmount(amount))
        );
        assert_eq!(ledger.balance(id).map(|b| b.value()), Some(dec!(500)));
    }
}

#[test]
fn test_deposit_adds_exactly() {
    let mut ledger = Ledger::new();
    let id = ledger.open_account("Bob").unwrap().id().clone();
    let id = id.as_str();

    let mut expected = Decimal::ZERO;
    for amount in positive_amounts() {
        expected += amount;
        let balance = ledger.try_deposit(id, amount).unwrap();
        assert_eq!(balance.value(), expected);
    }
}

#[test]
fn test_withdraw_subtracts_exactly_or_rejects() {
    let mut ledger = Ledger::new();
    let id = ledger.create_account("Carol", dec!(100)).unwrap().id().clone();
    let id = id.as_str();

    for amount in positive_amounts() {
        let before = ledger.balance(id).unwrap().value();
        let result = ledger.try_withdraw(id, amount);

        if amount <= before {
            assert_eq!(result.unwrap().value(), before - amount);
        } else {
            assert!(result.unwrap_err().is_insufficient_balance());
            assert_eq!(ledger.balance(id).unwrap().value(), before);
        }
    }
}

#[test]
fn test_withdraw_entire_balance() {
    let mut ledger = Ledger::new();
    let id = ledger.create_account("Dave", dec!(75.25)).unwrap().id().clone();

    assert!(ledger.withdraw(id.as_str(), dec!(75.25)));
    assert_eq!(ledger.balance(id.as_str()), Some(Amount::ZERO));
    assert!(!ledger.withdraw(id.as_str(), dec!(0.01)));
}

#[test]
fn test_ids_unique_across_lifetime() {
    let mut ledger = Ledger::with_config(LedgerConfig::default().with_prefix("T"));
    let mut seen = HashSet::new();

    for i in 0..500 {
        let id = ledger.create_account(format!("Holder {i}"), Decimal::from(i)).unwrap().id().clone();
        assert!(seen.insert(id), "duplicate id minted");
    }
    assert_eq!(ledger.count(), 500);
}

#[test]
fn test_negative_initial_deposit_yields_zero() {
    let mut ledger = Ledger::new();
    let account = ledger.create_account("Eve", dec!(-50)).unwrap();
    assert_eq!(account.balance(), Amount::ZERO);
    assert_eq!(account.balance().to_string(), "0.00");
}

#[test]
fn test_balance_of_unknown_account_is_none() {
    let mut ledger = Ledger::new();
    ledger.create_account("Frank", dec!(10)).unwrap();

    assert_eq!(ledger.balance("ACC0000"), None);
    assert_eq!(ledger.balance(""), None);
}

#[test]
fn test_accounts_are_independent() {
    let mut ledger = Ledger::new();
    let alice = ledger.create_account("Alice", dec!(10)).unwrap().id().clone();
    let bob = ledger.create_account("Bob", dec!(20)).unwrap().id().clone();

    assert!(ledger.deposit(alice.as_str(), dec!(5)));
    assert!(ledger.withdraw(bob.as_str(), dec!(20)));

    assert_eq!(ledger.balance(alice.as_str()).map(|b| b.value()), Some(dec!(15)));
    assert_eq!(ledger.balance(bob.as_str()), Some(Amount::ZERO));
}
