//! Snapshot linking - rebuild account ↔ customer references after a load.
//!
//! Accounts refer to their owner by tax-id and customers list the numbers of
//! the accounts they own. Both sides are checked against each other here.

use crate::error::{PersistenceError, PersistenceResult};
use passbook_core::{Account, AccountNumber, Customer};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Full in-memory state as read from (or written to) the stores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub customers: Vec<Customer>,
    pub accounts: Vec<Account>,
    /// Highest account number ever handed out
    pub last_account_number: AccountNumber,
}

impl Snapshot {
    pub fn customer(&self, tax_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.tax_id == tax_id)
    }

    pub fn account(&self, number: AccountNumber) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number == number)
    }

    /// Accounts of a customer, in the customer's order
    pub fn accounts_of<'a>(&'a self, customer: &'a Customer) -> impl Iterator<Item = &'a Account> {
        customer
            .accounts()
            .iter()
            .filter_map(move |number| self.account(*number))
    }
}

/// A stored balance is never negative and always equals its history replay.
fn check_balance(account: &Account) -> PersistenceResult<()> {
    let balance = account.balance();
    if balance.is_sign_negative() && !balance.is_zero() {
        return Err(PersistenceError::NegativeBalance {
            number: account.number,
            balance,
        });
    }
    let replayed = account.history().replay_balance();
    if replayed != balance {
        return Err(PersistenceError::BalanceMismatch {
            number: account.number,
            stored: balance,
            replayed,
        });
    }
    Ok(())
}

/// Validate and repair the references of a freshly loaded snapshot.
///
/// Returns how many accounts had to be re-attached to their owner's list.
pub fn link(snapshot: &mut Snapshot) -> PersistenceResult<usize> {
    let mut seen_customers = HashSet::new();
    for customer in &snapshot.customers {
        if !seen_customers.insert(customer.tax_id.as_str()) {
            return Err(PersistenceError::DuplicateCustomer(customer.tax_id.clone()));
        }
    }

    let mut owners: HashMap<AccountNumber, &str> = HashMap::new();
    for account in &snapshot.accounts {
        if owners.insert(account.number, account.owner.as_str()).is_some() {
            return Err(PersistenceError::DuplicateAccountNumber(account.number));
        }
        if !seen_customers.contains(account.owner.as_str()) {
            return Err(PersistenceError::DanglingOwner {
                number: account.number,
                owner: account.owner.clone(),
            });
        }
        check_balance(account)?;
    }

    for customer in &snapshot.customers {
        for number in customer.accounts() {
            if owners.get(number) != Some(&customer.tax_id.as_str()) {
                return Err(PersistenceError::DanglingAccount {
                    tax_id: customer.tax_id.clone(),
                    number: *number,
                });
            }
        }
    }

    let orphans: Vec<(AccountNumber, String)> = snapshot
        .accounts
        .iter()
        .filter(|a| {
            snapshot
                .customer(&a.owner)
                .is_some_and(|c| !c.owns(a.number))
        })
        .map(|a| (a.number, a.owner.clone()))
        .collect();

    for (number, owner) in &orphans {
        warn!(account = number, owner = %owner, "re-attaching account missing from owner's list");
        if let Some(customer) = snapshot.customers.iter_mut().find(|c| &c.tax_id == owner) {
            customer.attach_account(*number);
        }
    }

    let highest = snapshot.accounts.iter().map(|a| a.number).max().unwrap_or(0);
    if highest > snapshot.last_account_number {
        snapshot.last_account_number = highest;
    }

    Ok(orphans.len())
}
