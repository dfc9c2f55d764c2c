//! Bank settings
//!
//! Constants of the issuing branch and the withdrawal policy given to every
//! new current account.

use crate::error::{BankError, BankResult};
use passbook_core::{
    WithdrawalPolicy, DEFAULT_BRANCH, DEFAULT_WITHDRAWAL_CEILING, DEFAULT_WITHDRAWAL_LIMIT,
};
use rust_decimal::Decimal;

/// Bank name printed on statements when none is configured
pub const DEFAULT_BANK_NAME: &str = "Banco Exemplo S.A.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankSettings {
    pub bank_name: String,
    pub branch_code: String,
    pub withdrawal_limit: u32,
    pub withdrawal_ceiling: Decimal,
}

impl Default for BankSettings {
    fn default() -> Self {
        Self {
            bank_name: DEFAULT_BANK_NAME.to_string(),
            branch_code: DEFAULT_BRANCH.to_string(),
            withdrawal_limit: DEFAULT_WITHDRAWAL_LIMIT,
            withdrawal_ceiling: DEFAULT_WITHDRAWAL_CEILING,
        }
    }
}

impl BankSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bank_name(mut self, name: &str) -> Self {
        self.bank_name = name.to_string();
        self
    }

    pub fn with_branch(mut self, branch_code: &str) -> Self {
        self.branch_code = branch_code.to_string();
        self
    }

    pub fn with_withdrawal_limit(mut self, limit: u32) -> Self {
        self.withdrawal_limit = limit;
        self
    }

    pub fn with_withdrawal_ceiling(mut self, ceiling: Decimal) -> Self {
        self.withdrawal_ceiling = ceiling;
        self
    }

    /// Policy handed to a newly opened current account
    pub fn withdrawal_policy(&self) -> WithdrawalPolicy {
        WithdrawalPolicy::new(self.withdrawal_limit, self.withdrawal_ceiling)
    }

    pub fn validate(&self) -> BankResult<()> {
        if self.branch_code.trim().is_empty() {
            return Err(BankError::InvalidSettings(
                "branch code must not be empty".to_string(),
            ));
        }
        if self.withdrawal_ceiling <= Decimal::ZERO {
            return Err(BankError::InvalidSettings(format!(
                "withdrawal ceiling must be positive: {}",
                self.withdrawal_ceiling
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let settings = BankSettings::default();
        assert_eq!(settings.branch_code, "0001");
        assert_eq!(settings.withdrawal_limit, 3);
        assert_eq!(settings.withdrawal_ceiling, dec!(500.00));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_builder_and_policy() {
        let settings = BankSettings::new()
            .with_branch("0042")
            .with_withdrawal_limit(5)
            .with_withdrawal_ceiling(dec!(1000));

        let policy = settings.withdrawal_policy();
        assert_eq!(policy.limit, 5);
        assert_eq!(policy.ceiling, dec!(1000));
        assert_eq!(policy.remaining(), 5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(BankSettings::new().with_branch("  ").validate().is_err());
        assert!(BankSettings::new()
            .with_withdrawal_ceiling(dec!(0))
            .validate()
            .is_err());
    }
}
