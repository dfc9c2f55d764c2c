//! End-to-end scenarios across bank, engine and stores

use chrono::NaiveDate;
use passbook_business::{AccountType, Bank, BankError, BankSettings, NewCustomer};
use passbook_core::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::tempdir;

const ALICE: &str = "52998224725";

fn alice() -> NewCustomer {
    NewCustomer {
        tax_id: ALICE.to_string(),
        name: "Alice Souza".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        address: "Rua das Flores, Centro - Recife/PE, Nº 10".to_string(),
    }
}

#[test]
fn withdrawal_count_limit_applies_before_balance_and_ceiling() {
    let dir = tempdir().unwrap();
    let mut bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();
    bank.create_customer(alice()).unwrap();
    let number = bank.create_account(ALICE, AccountType::Current).unwrap();

    assert_eq!(bank.deposit(number, dec!(1000.00)).unwrap().balance, dec!(1000.00));
    bank.deposit(number, dec!(1000.00)).unwrap();

    for _ in 0..3 {
        bank.withdraw(number, dec!(500.00)).unwrap();
    }
    let err = bank.withdraw(number, dec!(500.00)).unwrap_err();
    assert_eq!(err.core(), Some(&CoreError::WithdrawalLimitExceeded { limit: 3 }));

    let account = bank.find_account(number).unwrap();
    assert_eq!(account.balance(), dec!(500.00));
    assert_eq!(account.history().len(), 5);
}

#[test]
fn two_withdrawals_of_500_empty_a_1000_account() {
    let dir = tempdir().unwrap();
    let mut bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();
    bank.create_customer(alice()).unwrap();
    let number = bank.create_account(ALICE, AccountType::Current).unwrap();

    bank.deposit(number, dec!(1000.00)).unwrap();
    bank.withdraw(number, dec!(500.00)).unwrap();
    bank.withdraw(number, dec!(500.00)).unwrap();

    let err = bank.withdraw(number, dec!(500.00)).unwrap_err();
    assert!(matches!(err.core(), Some(CoreError::InsufficientFunds { .. })));
    assert_eq!(bank.find_account(number).unwrap().remaining_withdrawals(), Some(1));
}

#[test]
fn withdrawal_above_ceiling_is_rejected() {
    let dir = tempdir().unwrap();
    let mut bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();
    bank.create_customer(alice()).unwrap();
    let number = bank.create_account(ALICE, AccountType::Current).unwrap();
    bank.deposit(number, dec!(1000.00)).unwrap();

    let err = bank.withdraw(number, dec!(600.00)).unwrap_err();
    assert!(matches!(err.core(), Some(CoreError::AmountExceedsCeiling { .. })));
    assert_eq!(bank.find_account(number).unwrap().balance(), dec!(1000.00));
}

#[test]
fn customer_with_accounts_cannot_be_deleted() {
    let dir = tempdir().unwrap();
    let mut bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();
    bank.create_customer(alice()).unwrap();
    let number = bank.create_account(ALICE, AccountType::Current).unwrap();

    let err = bank.delete_customer(ALICE).unwrap_err();
    assert!(matches!(
        err,
        BankError::CustomerHasOpenAccounts { accounts: 1, .. }
    ));

    bank.delete_account(number).unwrap();
    assert!(bank.find_customer(ALICE).unwrap().accounts().is_empty());
    bank.delete_customer(ALICE).unwrap();
    assert!(bank.customers().is_empty());

    let err = bank.delete_customer(ALICE).unwrap_err();
    assert!(matches!(err, BankError::CustomerNotFound(_)));
}

#[test]
fn invalid_deposits_leave_history_unchanged() {
    let dir = tempdir().unwrap();
    let mut bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();
    bank.create_customer(alice()).unwrap();
    let number = bank.create_account(ALICE, AccountType::Current).unwrap();

    for amount in [Decimal::ZERO, dec!(-10.00)] {
        let err = bank.deposit(number, amount).unwrap_err();
        assert_eq!(err.core(), Some(&CoreError::InvalidAmount(amount)));
    }
    assert!(bank.find_account(number).unwrap().history().is_empty());
}

#[test]
fn state_survives_restart() {
    let dir = tempdir().unwrap();
    let number;
    let before;
    {
        let mut bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();
        bank.create_customer(alice()).unwrap();
        number = bank.create_account(ALICE, AccountType::Current).unwrap();
        bank.deposit(number, dec!(0.10)).unwrap();
        bank.deposit(number, dec!(0.20)).unwrap();
        bank.withdraw(number, dec!(0.05)).unwrap();
        before = bank.snapshot().clone();
    }

    let bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();
    assert_eq!(bank.snapshot(), &before);

    let account = bank.find_account(number).unwrap();
    assert_eq!(account.balance(), dec!(0.25));
    assert_eq!(account.history().replay_balance(), account.balance());
    assert_eq!(account.remaining_withdrawals(), Some(2));
    assert_eq!(bank.holder_of(account).unwrap().name, "Alice Souza");
}
