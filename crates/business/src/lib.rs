//! # Passbook Business
//!
//! Business layer - the [`Bank`] state container and its command entry
//! points: customers, accounts, deposits, withdrawals.
//!
//! ```rust,ignore
//! use passbook_business::{AccountType, Bank, BankSettings, NewCustomer};
//!
//! let mut bank = Bank::open_dir("data", BankSettings::default())?;
//! bank.create_customer(new_customer)?;
//! let number = bank.create_account("52998224725", AccountType::Current)?;
//! bank.deposit(number, dec!(1000.00))?;
//! ```

pub mod bank;
pub mod config;
pub mod error;
pub mod receipt;

pub use bank::{AccountType, Bank, BankSummary, NewCustomer};
pub use config::{BankSettings, DEFAULT_BANK_NAME};
pub use error::{BankError, BankResult};
pub use receipt::TransactionReceipt;
