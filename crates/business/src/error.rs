//! Business layer errors
//!
//! Every command returns a typed [`BankResult`]; nothing here aborts the
//! process. Core rejections are wrapped unchanged.

use passbook_core::{AccountNumber, CoreError};
use passbook_persistence::PersistenceError;
use thiserror::Error;

/// Bank operation errors
#[derive(Debug, Error)]
pub enum BankError {
    // === Lookup errors ===
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    // === Registration errors ===
    #[error("A customer with tax-id {0} already exists")]
    DuplicateCustomer(String),

    #[error("Customer {tax_id} still owns {accounts} account(s)")]
    CustomerHasOpenAccounts { tax_id: String, accounts: usize },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // === Persistence errors ===
    #[error("Change applied in memory but could not be saved: {0}")]
    PersistenceWriteFailed(#[source] PersistenceError),

    #[error("Could not load stored data: {0}")]
    LoadFailed(#[source] PersistenceError),

    // === Wrapped errors ===
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for bank operations
pub type BankResult<T> = Result<T, BankError>;

impl BankError {
    /// Persisted state no longer matches memory
    pub fn is_stale_store(&self) -> bool {
        matches!(self, Self::PersistenceWriteFailed(_))
    }

    /// Underlying core rejection, if any
    pub fn core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(err) => Some(err),
            _ => None,
        }
    }
}
