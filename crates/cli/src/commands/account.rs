//! Account management commands

use anyhow::Result;
use passbook_business::Bank;
use passbook_core::money::format_cents;
use passbook_core::{Account, AccountNumber};

use crate::AccountAction;

/// Handle account subcommands
pub fn handle(bank: &mut Bank, action: AccountAction) -> Result<()> {
    match action {
        AccountAction::Create { tax_id, kind } => {
            let number = bank.create_account(&tax_id, kind.to_account_type())?;
            let account = bank.find_account(number)?;
            println!("✅ Created {} account:", account.kind().as_str());
            println!("   Branch:  {}", account.branch);
            println!("   Account: {}", account.number);
            println!("   Owner:   {}", account.owner);
        }
        AccountAction::List { owner } => {
            let accounts: Vec<&Account> = match owner {
                Some(tax_id) => bank.accounts_of(&tax_id)?,
                None => bank.accounts().iter().collect(),
            };
            list_accounts(bank, &accounts);
        }
        AccountAction::Show { number } => show_account(bank, number)?,
        AccountAction::Delete { number } => {
            let account = bank.delete_account(number)?;
            println!(
                "🗑️  Deleted account {} (closing balance {})",
                account.number,
                format_cents(account.balance())
            );
        }
    }
    Ok(())
}

fn list_accounts(bank: &Bank, accounts: &[&Account]) {
    if accounts.is_empty() {
        println!("No accounts found.");
        return;
    }

    println!(
        "{:<8} {:<8} {:<10} {:<24} {:>14}",
        "BRANCH", "NUMBER", "KIND", "HOLDER", "BALANCE"
    );
    println!("{}", "-".repeat(68));
    for account in accounts {
        let holder = bank
            .holder_of(account)
            .map(|c| c.name.as_str())
            .unwrap_or("?");
        println!(
            "{:<8} {:<8} {:<10} {:<24} {:>14}",
            account.branch,
            account.number,
            account.kind().as_str(),
            holder,
            format_cents(account.balance())
        );
    }
}

fn show_account(bank: &Bank, number: AccountNumber) -> Result<()> {
    let account = bank.find_account(number)?;
    let holder = bank.holder_of(account)?;

    println!("📋 Account Details");
    println!("   {}", account);
    println!("   Holder:  {}", holder.name);
    println!("   Opened:  {}", account.created_at.format("%d/%m/%Y"));
    println!("   Balance: {}", format_cents(account.balance()));
    if let Some(policy) = account.kind().policy() {
        println!(
            "   Withdrawals: {} of {} used, max {} each",
            policy.withdrawals_made(),
            policy.limit,
            format_cents(policy.ceiling)
        );
    }
    println!("   Movements: {}", account.history().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountKindArg;
    use chrono::NaiveDate;
    use passbook_business::{BankSettings, NewCustomer};
    use tempfile::tempdir;

    #[test]
    fn test_account_lifecycle() {
        let dir = tempdir().unwrap();
        let mut bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();
        bank.create_customer(NewCustomer {
            tax_id: "52998224725".to_string(),
            name: "Alice Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            address: "Rua das Flores, 10".to_string(),
        })
        .unwrap();

        handle(
            &mut bank,
            AccountAction::Create {
                tax_id: "52998224725".to_string(),
                kind: AccountKindArg::Standard,
            },
        )
        .unwrap();
        assert_eq!(bank.accounts().len(), 1);
        assert!(!bank.accounts()[0].is_current());

        handle(&mut bank, AccountAction::List { owner: None }).unwrap();
        handle(&mut bank, AccountAction::Show { number: 1 }).unwrap();
        assert!(handle(&mut bank, AccountAction::Show { number: 9 }).is_err());

        handle(&mut bank, AccountAction::Delete { number: 1 }).unwrap();
        assert!(bank.accounts().is_empty());
    }
}
