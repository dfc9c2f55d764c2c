//! Command handlers

pub mod account;
pub mod cash;
pub mod customer;

use passbook_business::Bank;
use passbook_core::money::format_cents;

/// Show data directory status
pub fn show_status(bank: &Bank) {
    let summary = bank.summary();
    let settings = bank.settings();
    let db = bank.database();

    println!("📊 Passbook Status");
    println!("   Data dir: {:?}", db.dir());
    for path in [db.customers_path(), db.accounts_path()] {
        let state = if path.exists() { "present" } else { "not yet written" };
        println!("     - {} ({})", path.display(), state);
    }
    println!();
    println!("   Bank:              {}", settings.bank_name);
    println!("   Branch:            {}", settings.branch_code);
    println!(
        "   Withdrawal policy: {} per account, max {} each",
        settings.withdrawal_limit,
        format_cents(settings.withdrawal_ceiling)
    );
    println!();
    println!("   Customers:    {}", summary.customers);
    println!("   Accounts:     {}", summary.accounts);
    println!("   Transactions: {}", summary.transactions);
    println!("   Total funds:  {}", format_cents(summary.total_balance));
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_business::BankSettings;
    use tempfile::tempdir;

    #[test]
    fn test_status_reports_store_paths() {
        let dir = tempdir().unwrap();
        let bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();

        let db = bank.database();
        assert_eq!(db.customers_path(), dir.path().join("customers.json"));
        assert_eq!(db.accounts_path(), dir.path().join("accounts.json"));
        show_status(&bank);
    }
}
