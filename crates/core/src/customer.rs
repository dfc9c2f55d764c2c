//! # Customer Module
//!
//! Customer: the account holder, keyed by tax-id (CPF).
//! A customer keeps the ordered list of account numbers it owns; accounts
//! point back to their owner by tax-id only.

use crate::account::AccountNumber;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of customer. Only individuals (pessoa física) exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerKind {
    /// Private person identified by a CPF
    Individual,
}

impl CustomerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerKind::Individual => "individual",
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered customer.
///
/// Fields other than the account list never change after registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Tax-id (CPF digits), unique per customer
    pub tax_id: String,
    /// Full name
    pub name: String,
    /// Date of birth
    pub birth_date: NaiveDate,
    /// Pre-resolved postal address
    pub address: String,
    /// Customer kind
    pub kind: CustomerKind,
    /// Account numbers owned by this customer, in opening order
    accounts: Vec<AccountNumber>,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Register an individual customer with no accounts
    pub fn individual(
        tax_id: impl Into<String>,
        name: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            tax_id: tax_id.into(),
            name: name.into(),
            birth_date,
            address: address.into(),
            kind: CustomerKind::Individual,
            accounts: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Account numbers in opening order
    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    pub fn owns(&self, number: AccountNumber) -> bool {
        self.accounts.contains(&number)
    }

    /// Append an account number. Already attached numbers are ignored.
    pub fn attach_account(&mut self, number: AccountNumber) {
        if !self.owns(number) {
            self.accounts.push(number);
        }
    }

    /// Remove an account number, returning whether it was attached.
    pub fn detach_account(&mut self, number: AccountNumber) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|n| *n != number);
        self.accounts.len() != before
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (tax-id: {}, accounts: {})",
            self.name,
            self.tax_id,
            self.accounts.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Customer {
        Customer::individual(
            "52998224725",
            "Alice Souza",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "Rua das Flores, Centro - Recife/PE, Nº 10",
        )
    }

    #[test]
    fn test_customer_creation() {
        let customer = alice();
        assert_eq!(customer.tax_id, "52998224725");
        assert_eq!(customer.kind, CustomerKind::Individual);
        assert!(!customer.has_accounts());
    }

    #[test]
    fn test_attach_and_detach_accounts() {
        let mut customer = alice();
        customer.attach_account(1);
        customer.attach_account(3);
        customer.attach_account(1);
        assert_eq!(customer.accounts(), &[1, 3]);

        assert!(customer.detach_account(1));
        assert!(!customer.detach_account(1));
        assert_eq!(customer.accounts(), &[3]);
        assert!(customer.owns(3));
    }

    #[test]
    fn test_customer_display() {
        let mut customer = alice();
        customer.attach_account(7);
        assert_eq!(
            format!("{}", customer),
            "Alice Souza (tax-id: 52998224725, accounts: 1)"
        );
    }
}
