//! # Passbook Core
//!
//! Core domain types for Passbook: customers, accounts, transactions and the
//! append-only history that every account owns.
//!
//! ## Modules
//!
//! - [`money`] - decimal helpers (cent rounding, positive amount checks)
//! - [`customer`] - [`Customer`] and [`CustomerKind`]
//! - [`account`] - [`Account`], [`AccountKind`], [`WithdrawalPolicy`]
//! - [`transaction`] - [`Transaction`], [`TransactionKind`], [`History`]
//! - [`engine`] - [`execute`], the only way a transaction reaches a history
//!
//! ## Example
//!
//! ```rust
//! use passbook_core::{execute, Account, Transaction};
//! use rust_decimal::Decimal;
//!
//! let mut account = Account::current(1, "0001", "52998224725");
//! execute(&mut account, Transaction::deposit(Decimal::new(100000, 2))).unwrap();
//! assert_eq!(account.balance(), Decimal::new(100000, 2));
//! assert_eq!(account.history().len(), 1);
//! ```

pub mod account;
pub mod customer;
pub mod engine;
pub mod error;
pub mod money;
pub mod transaction;

pub use account::{
    Account, AccountKind, AccountNumber, WithdrawalPolicy, DEFAULT_BRANCH,
    DEFAULT_WITHDRAWAL_CEILING, DEFAULT_WITHDRAWAL_LIMIT,
};
pub use customer::{Customer, CustomerKind};
pub use engine::execute;
pub use error::{CoreError, CoreResult};
pub use transaction::{History, Transaction, TransactionKind};
