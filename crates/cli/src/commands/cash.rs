//! Cash operations: deposit, withdraw, statement

use anyhow::{Context, Result};
use passbook_business::{Bank, BankError, TransactionReceipt};
use passbook_core::money::format_cents;
use passbook_core::AccountNumber;
use passbook_reports::Statement;
use rust_decimal::Decimal;

/// Deposit cash into an account
pub fn deposit(bank: &mut Bank, number: AccountNumber, amount: Decimal) -> Result<()> {
    let receipt = bank.deposit(number, amount)?;
    println!("✅ Deposit successful!");
    print_receipt(&receipt);
    Ok(())
}

/// Withdraw cash from an account
pub fn withdraw(bank: &mut Bank, number: AccountNumber, amount: Decimal) -> Result<()> {
    let receipt = bank
        .withdraw(number, amount)
        .map_err(|err| explain_withdrawal(err, number))?;
    println!("✅ Withdrawal successful!");
    print_receipt(&receipt);
    if let Some(remaining) = receipt.remaining_withdrawals {
        println!("   Withdrawals left: {}", remaining);
    }
    Ok(())
}

/// Print the statement of an account
pub fn statement(bank: &Bank, number: AccountNumber) -> Result<()> {
    let account = bank.find_account(number)?;
    let holder = bank.holder_of(account)?;
    let statement = Statement::render(account, holder, &bank.settings().bank_name)
        .with_context(|| format!("Cannot produce statement for account {}", number))?;
    println!("{}", statement);
    Ok(())
}

fn explain_withdrawal(err: BankError, number: AccountNumber) -> anyhow::Error {
    let hint = match err.core() {
        Some(core) if core.is_policy_violation() => {
            Some(format!("Withdrawal refused by the policy of account {}", number))
        }
        Some(core) if core.is_insufficient_funds() => {
            Some(format!("Not enough funds in account {}", number))
        }
        _ => None,
    };
    match hint {
        Some(hint) => anyhow::Error::new(err).context(hint),
        None => err.into(),
    }
}

fn print_receipt(receipt: &TransactionReceipt) {
    println!("   Account: {}", receipt.account);
    println!("   Amount:  {}", format_cents(receipt.amount));
    println!("   Balance: {}", format_cents(receipt.balance));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use passbook_business::{AccountType, BankSettings, NewCustomer};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    fn bank_with_account(dir: &std::path::Path) -> (Bank, AccountNumber) {
        let mut bank = Bank::open_dir(dir, BankSettings::default()).unwrap();
        bank.create_customer(NewCustomer {
            tax_id: "52998224725".to_string(),
            name: "Alice Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            address: "Rua das Flores, 10".to_string(),
        })
        .unwrap();
        let number = bank.create_account("52998224725", AccountType::Current).unwrap();
        (bank, number)
    }

    #[test]
    fn test_deposit_withdraw_statement() {
        let dir = tempdir().unwrap();
        let (mut bank, number) = bank_with_account(dir.path());

        deposit(&mut bank, number, dec!(1000)).unwrap();
        withdraw(&mut bank, number, dec!(250)).unwrap();
        statement(&bank, number).unwrap();

        assert_eq!(bank.find_account(number).unwrap().balance(), dec!(750));
    }

    #[test]
    fn test_rejections_surface_as_errors() {
        let dir = tempdir().unwrap();
        let (mut bank, number) = bank_with_account(dir.path());

        assert!(deposit(&mut bank, number, dec!(-1)).is_err());
        assert!(withdraw(&mut bank, number, dec!(10)).is_err());
        assert!(statement(&bank, 99).is_err());
    }

    #[test]
    fn test_withdrawal_errors_name_the_cause() {
        let dir = tempdir().unwrap();
        let (mut bank, number) = bank_with_account(dir.path());
        deposit(&mut bank, number, dec!(1000)).unwrap();

        let err = withdraw(&mut bank, number, dec!(600)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Withdrawal refused by the policy of account {}", number)
        );
        assert!(err.root_cause().to_string().contains("500"));

        withdraw(&mut bank, number, dec!(500)).unwrap();
        withdraw(&mut bank, number, dec!(500)).unwrap();
        let err = withdraw(&mut bank, number, dec!(1)).unwrap_err();
        assert_eq!(err.to_string(), format!("Not enough funds in account {}", number));

        let err = withdraw(&mut bank, 42, dec!(1)).unwrap_err();
        assert!(err.to_string().contains("42"));
    }
}
