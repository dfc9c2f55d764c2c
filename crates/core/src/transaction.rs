//! # Transaction Module
//!
//! Transaction records and the per-account History log.
//! A Transaction is immutable once created; a History only grows, and only
//! [`crate::engine::execute`] can append to it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of cash movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Cash deposit into the account
    Deposit,
    /// Cash withdrawal from the account
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    /// Description used on statements
    pub fn description(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Cash deposit",
            TransactionKind::Withdrawal => "Cash withdrawal",
        }
    }

    /// Short entry label used on statements
    pub fn entry_label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Credit",
            TransactionKind::Withdrawal => "Debit",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An executed (or about to be executed) cash movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction stamped with an explicit time
    pub fn at(kind: TransactionKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    /// Deposit stamped now
    pub fn deposit(amount: Decimal) -> Self {
        Self::at(TransactionKind::Deposit, amount, Utc::now())
    }

    /// Withdrawal stamped now
    pub fn withdrawal(amount: Decimal) -> Self {
        Self::at(TransactionKind::Withdrawal, amount, Utc::now())
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Amount with the sign it has on the balance (+deposit, -withdrawal)
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Deposit => self.amount,
            TransactionKind::Withdrawal => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} at {}",
            self.kind,
            self.amount,
            self.timestamp.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Append-only transaction log of one account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    transactions: Vec<Transaction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, transaction: Transaction) -> &Transaction {
        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.transactions.last()
    }

    /// Balance obtained by replaying every entry from zero
    pub fn replay_balance(&self) -> Decimal {
        self.transactions
            .iter()
            .fold(Decimal::ZERO, |balance, t| balance + t.signed_amount())
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
