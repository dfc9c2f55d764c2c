//! Bank - explicit state container for customers and accounts
//!
//! Built from the persistence layer at startup. Every mutating command
//! changes memory first and then rewrites the affected store(s); a failed
//! write is reported as [`BankError::PersistenceWriteFailed`] while the
//! in-memory change stands.

use crate::config::BankSettings;
use crate::error::{BankError, BankResult};
use crate::receipt::TransactionReceipt;
use chrono::NaiveDate;
use passbook_core::{execute, Account, AccountNumber, Customer, Transaction};
use passbook_persistence::{Database, Snapshot};
use rust_decimal::Decimal;
use std::path::Path;
use tracing::{info, warn};

/// Data needed to register a customer. Tax-id and birth date are expected
/// to be validated by the caller; the address comes pre-resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub tax_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

/// Kind of account to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountType {
    /// Current account with the configured withdrawal policy
    #[default]
    Current,
    /// Standard account limited only by its balance
    Standard,
}

/// Totals shown by the status command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankSummary {
    pub customers: usize,
    pub accounts: usize,
    pub transactions: usize,
    pub total_balance: Decimal,
}

#[derive(Debug)]
pub struct Bank {
    db: Database,
    settings: BankSettings,
    state: Snapshot,
}

impl Bank {
    /// Load the stores of `db` and build the bank
    pub fn open(db: Database, settings: BankSettings) -> BankResult<Self> {
        settings.validate()?;
        let state = db.load().map_err(BankError::LoadFailed)?;
        info!(
            dir = %db.dir().display(),
            customers = state.customers.len(),
            accounts = state.accounts.len(),
            "bank opened"
        );
        Ok(Self {
            db,
            settings,
            state,
        })
    }

    /// Open the data directory at `dir`
    pub fn open_dir<P: AsRef<Path>>(dir: P, settings: BankSettings) -> BankResult<Self> {
        let db = Database::open(dir).map_err(BankError::LoadFailed)?;
        Self::open(db, settings)
    }

    pub fn settings(&self) -> &BankSettings {
        &self.settings
    }

    /// Stores backing this bank
    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    // === Queries ===

    pub fn customers(&self) -> &[Customer] {
        &self.state.customers
    }

    pub fn accounts(&self) -> &[Account] {
        &self.state.accounts
    }

    pub fn find_customer(&self, tax_id: &str) -> BankResult<&Customer> {
        self.state
            .customer(tax_id)
            .ok_or_else(|| BankError::CustomerNotFound(tax_id.to_string()))
    }

    pub fn find_account(&self, number: AccountNumber) -> BankResult<&Account> {
        self.state
            .account(number)
            .ok_or(BankError::AccountNotFound(number))
    }

    /// Customer that owns `account`
    pub fn holder_of(&self, account: &Account) -> BankResult<&Customer> {
        self.find_customer(&account.owner)
    }

    /// Accounts of a customer in opening order
    pub fn accounts_of(&self, tax_id: &str) -> BankResult<Vec<&Account>> {
        let customer = self.find_customer(tax_id)?;
        Ok(self.state.accounts_of(customer).collect())
    }

    pub fn summary(&self) -> BankSummary {
        BankSummary {
            customers: self.state.customers.len(),
            accounts: self.state.accounts.len(),
            transactions: self.state.accounts.iter().map(|a| a.history().len()).sum(),
            total_balance: self.state.accounts.iter().map(Account::balance).sum(),
        }
    }

    // === Customer commands ===

    /// Register a customer. Tax-ids are unique.
    pub fn create_customer(&mut self, new: NewCustomer) -> BankResult<&Customer> {
        if self.state.customer(&new.tax_id).is_some() {
            warn!(tax_id = %new.tax_id, "duplicate customer rejected");
            return Err(BankError::DuplicateCustomer(new.tax_id));
        }

        let customer = Customer::individual(new.tax_id, new.name, new.birth_date, new.address);
        info!(tax_id = %customer.tax_id, "customer created");
        self.state.customers.push(customer);
        self.persist_customers()?;

        let index = self.state.customers.len() - 1;
        Ok(&self.state.customers[index])
    }

    /// Delete a customer that owns no accounts.
    pub fn delete_customer(&mut self, tax_id: &str) -> BankResult<Customer> {
        let position = self
            .state
            .customers
            .iter()
            .position(|c| c.tax_id == tax_id)
            .ok_or_else(|| BankError::CustomerNotFound(tax_id.to_string()))?;

        let open = self
            .state
            .accounts
            .iter()
            .filter(|a| a.owner == tax_id)
            .count();
        if open > 0 {
            warn!(tax_id, accounts = open, "customer deletion refused");
            return Err(BankError::CustomerHasOpenAccounts {
                tax_id: tax_id.to_string(),
                accounts: open,
            });
        }

        let customer = self.state.customers.remove(position);
        info!(tax_id, "customer deleted");
        self.persist_customers()?;
        Ok(customer)
    }

    // === Account commands ===

    /// Open an account for an existing customer and return its number.
    pub fn create_account(
        &mut self,
        tax_id: &str,
        account_type: AccountType,
    ) -> BankResult<AccountNumber> {
        self.find_customer(tax_id)?;

        let number = self.state.last_account_number + 1;
        let branch = self.settings.branch_code.as_str();
        let account = match account_type {
            AccountType::Current => Account::current_with_policy(
                number,
                branch,
                tax_id,
                self.settings.withdrawal_policy(),
            ),
            AccountType::Standard => Account::standard(number, branch, tax_id),
        };

        self.state.accounts.push(account);
        self.state.last_account_number = number;
        if let Some(owner) = self.state.customers.iter_mut().find(|c| c.tax_id == tax_id) {
            owner.attach_account(number);
        }
        info!(account = number, owner = tax_id, kind = ?account_type, "account created");

        self.persist_accounts()?;
        self.persist_customers()?;
        Ok(number)
    }

    /// Delete an account and detach it from its owner.
    pub fn delete_account(&mut self, number: AccountNumber) -> BankResult<Account> {
        let position = self
            .state
            .accounts
            .iter()
            .position(|a| a.number == number)
            .ok_or(BankError::AccountNotFound(number))?;

        let account = self.state.accounts.remove(position);
        if let Some(owner) = self
            .state
            .customers
            .iter_mut()
            .find(|c| c.tax_id == account.owner)
        {
            owner.detach_account(number);
        }
        info!(account = number, owner = %account.owner, "account deleted");

        // Customers first: an account missing from its owner's list is
        // re-attached on load, a listed number with no account is not.
        self.persist_customers()?;
        self.persist_accounts()?;
        Ok(account)
    }

    // === Cash commands ===

    pub fn deposit(&mut self, number: AccountNumber, amount: Decimal) -> BankResult<TransactionReceipt> {
        self.apply(number, Transaction::deposit(amount))
    }

    pub fn withdraw(&mut self, number: AccountNumber, amount: Decimal) -> BankResult<TransactionReceipt> {
        self.apply(number, Transaction::withdrawal(amount))
    }

    fn apply(&mut self, number: AccountNumber, transaction: Transaction) -> BankResult<TransactionReceipt> {
        let kind = transaction.kind();
        let amount = transaction.amount();
        let account = self
            .state
            .accounts
            .iter_mut()
            .find(|a| a.number == number)
            .ok_or(BankError::AccountNotFound(number))?;

        let recorded = execute(account, transaction)
            .map_err(|err| {
                warn!(
                    account = number,
                    %kind,
                    %amount,
                    policy = err.is_policy_violation(),
                    error = %err,
                    "transaction rejected"
                );
                BankError::from(err)
            })?
            .clone();
        let receipt = TransactionReceipt::new(account, &recorded);
        info!(account = number, %kind, %amount, balance = %receipt.balance, "transaction executed");

        self.persist_accounts()?;
        Ok(receipt)
    }

    // === Persistence ===

    fn persist_customers(&self) -> BankResult<()> {
        self.db
            .save_customers(&self.state.customers)
            .map_err(|err| self.write_failed(err))
    }

    fn persist_accounts(&self) -> BankResult<()> {
        self.db
            .save_accounts(&self.state.accounts, self.state.last_account_number)
            .map_err(|err| self.write_failed(err))
    }

    fn write_failed(&self, err: passbook_persistence::PersistenceError) -> BankError {
        warn!(dir = %self.db.dir().display(), error = %err, "store write failed; persisted state is stale");
        BankError::PersistenceWriteFailed(err)
    }
}
