//! Customer management commands

use anyhow::{Context, Result};
use passbook_business::{Bank, NewCustomer};

use crate::CustomerAction;

/// Handle customer subcommands
pub fn handle(bank: &mut Bank, action: CustomerAction) -> Result<()> {
    match action {
        CustomerAction::Create {
            tax_id,
            name,
            birth_date,
            address,
        } => {
            let customer = bank.create_customer(NewCustomer {
                tax_id,
                name,
                birth_date,
                address,
            })?;
            println!("✅ Created customer:");
            println!("   Tax-id:     {}", customer.tax_id);
            println!("   Name:       {}", customer.name);
            println!("   Birth date: {}", customer.birth_date.format("%d/%m/%Y"));
            println!("   Address:    {}", customer.address);
        }
        CustomerAction::List => list_customers(bank),
        CustomerAction::Delete { tax_id } => {
            let customer = bank
                .delete_customer(&tax_id)
                .with_context(|| format!("Failed to delete customer {}", tax_id))?;
            println!("🗑️  Deleted customer {} ({})", customer.name, customer.tax_id);
        }
    }
    Ok(())
}

fn list_customers(bank: &Bank) {
    if bank.customers().is_empty() {
        println!("No customers found.");
        return;
    }

    println!("{:<13} {:<24} {:<12} {:<8}", "TAX-ID", "NAME", "BORN", "ACCOUNTS");
    println!("{}", "-".repeat(60));
    for customer in bank.customers() {
        println!(
            "{:<13} {:<24} {:<12} {:<8}",
            customer.tax_id,
            customer.name,
            customer.birth_date.format("%d/%m/%Y"),
            customer.accounts().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use passbook_business::BankSettings;
    use tempfile::tempdir;

    fn create(tax_id: &str) -> CustomerAction {
        CustomerAction::Create {
            tax_id: tax_id.to_string(),
            name: "Alice Souza".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            address: "Rua das Flores, 10".to_string(),
        }
    }

    #[test]
    fn test_create_list_delete() {
        let dir = tempdir().unwrap();
        let mut bank = Bank::open_dir(dir.path(), BankSettings::default()).unwrap();

        handle(&mut bank, create("52998224725")).unwrap();
        assert!(handle(&mut bank, create("52998224725")).is_err());
        handle(&mut bank, CustomerAction::List).unwrap();

        handle(
            &mut bank,
            CustomerAction::Delete {
                tax_id: "52998224725".to_string(),
            },
        )
        .unwrap();
        assert!(bank.customers().is_empty());
    }
}
