//! # Persistence Errors
//!
//! Error types for the persistence layer, wrapping IO and serde_json errors
//! plus the integrity problems detected while linking a loaded snapshot.

use passbook_core::AccountNumber;
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Persistence layer errors
#[derive(Debug, Error)]
pub enum PersistenceError {
    // === Store errors ===
    #[error("Store IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store serialization error at {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported schema version {found} in {path} (expected {expected})")]
    UnsupportedSchema {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    // === Integrity errors ===
    #[error("Account {number} belongs to unknown customer {owner}")]
    DanglingOwner { number: AccountNumber, owner: String },

    #[error("Customer {tax_id} lists account {number}, which it does not own")]
    DanglingAccount { tax_id: String, number: AccountNumber },

    #[error("Account number {0} appears more than once")]
    DuplicateAccountNumber(AccountNumber),

    #[error("Customer {0} appears more than once")]
    DuplicateCustomer(String),

    #[error("Account {number} has a negative balance: {balance}")]
    NegativeBalance { number: AccountNumber, balance: Decimal },

    #[error("Account {number}: stored balance {stored} but history replays to {replayed}")]
    BalanceMismatch {
        number: AccountNumber,
        stored: Decimal,
        replayed: Decimal,
    },
}

/// Result type alias for PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialization(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serialization {
            path: path.into(),
            source,
        }
    }

    /// True when the files were readable but describe an inconsistent graph
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Self::DanglingOwner { .. }
                | Self::DanglingAccount { .. }
                | Self::DuplicateAccountNumber(_)
                | Self::DuplicateCustomer(_)
                | Self::NegativeBalance { .. }
                | Self::BalanceMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PersistenceError::DanglingOwner {
            number: 4,
            owner: "11144477735".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Account 4 belongs to unknown customer 11144477735"
        );
        assert!(err.is_integrity_error());

        let err = PersistenceError::io(
            "data/accounts.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().starts_with("Store IO error at data/accounts.json"));
        assert!(!err.is_integrity_error());
    }
}
