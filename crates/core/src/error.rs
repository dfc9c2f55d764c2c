//! # Error Module
//!
//! Domain errors raised by account operations, built with thiserror.

use rust_decimal::Decimal;
use thiserror::Error;

/// Core domain errors.
///
/// Every variant is recoverable: the account that produced it is left
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Withdrawal limit exceeded: {limit} withdrawals already made")]
    WithdrawalLimitExceeded { limit: u32 },

    #[error("Amount {amount} exceeds the per-withdrawal ceiling of {ceiling}")]
    AmountExceedsCeiling { amount: Decimal, ceiling: Decimal },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Check whether this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, CoreError::InsufficientFunds { .. })
    }

    /// True for the two rejections that come from a current account's policy
    pub fn is_policy_violation(&self) -> bool {
        matches!(
            self,
            CoreError::WithdrawalLimitExceeded { .. } | CoreError::AmountExceedsCeiling { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = CoreError::InsufficientFunds {
            requested: dec!(1000),
            available: dec!(500),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested 1000, available 500"
        );

        let err = CoreError::AmountExceedsCeiling {
            amount: dec!(600.00),
            ceiling: dec!(500.00),
        };
        assert_eq!(
            err.to_string(),
            "Amount 600.00 exceeds the per-withdrawal ceiling of 500.00"
        );
    }

    #[test]
    fn test_error_checks() {
        assert!(CoreError::InsufficientFunds {
            requested: dec!(10),
            available: dec!(5),
        }
        .is_insufficient_funds());

        assert!(CoreError::WithdrawalLimitExceeded { limit: 3 }.is_policy_violation());
        assert!(!CoreError::InvalidAmount(dec!(0)).is_policy_violation());
    }
}
