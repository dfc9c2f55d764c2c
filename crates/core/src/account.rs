//! # Account Module
//!
//! Account is a tagged variant: shared fields (number, branch, owner,
//! balance, history) plus kind-specific data in [`AccountKind`].
//! A current account carries a [`WithdrawalPolicy`] limiting how many
//! withdrawals can be made and how large each one can be.
//!
//! Balance is private: it only moves through [`Account::deposit`] and
//! [`Account::withdraw`], and only the engine records history.

use crate::error::{CoreError, CoreResult};
use crate::money::ensure_positive;
use crate::transaction::History;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account number, assigned sequentially by the bank
pub type AccountNumber = u32;

/// Branch code used when none is configured
pub const DEFAULT_BRANCH: &str = "0001";

/// Withdrawals allowed on a current account
pub const DEFAULT_WITHDRAWAL_LIMIT: u32 = 3;

/// Largest single withdrawal on a current account (500.00)
pub const DEFAULT_WITHDRAWAL_CEILING: Decimal = Decimal::from_parts(50000, 0, 0, false, 2);

/// Withdrawal limits of a current account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalPolicy {
    /// Maximum number of withdrawals
    pub limit: u32,
    /// Maximum value of one withdrawal
    pub ceiling: Decimal,
    /// Withdrawals made so far (never decremented)
    withdrawals_made: u32,
}

impl WithdrawalPolicy {
    pub fn new(limit: u32, ceiling: Decimal) -> Self {
        Self {
            limit,
            ceiling,
            withdrawals_made: 0,
        }
    }

    pub fn withdrawals_made(&self) -> u32 {
        self.withdrawals_made
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.withdrawals_made)
    }

    /// Count limit first, then value ceiling
    fn check(&self, amount: Decimal) -> CoreResult<()> {
        if self.withdrawals_made >= self.limit {
            return Err(CoreError::WithdrawalLimitExceeded { limit: self.limit });
        }
        if amount > self.ceiling {
            return Err(CoreError::AmountExceedsCeiling {
                amount,
                ceiling: self.ceiling,
            });
        }
        Ok(())
    }
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_WITHDRAWAL_LIMIT, DEFAULT_WITHDRAWAL_CEILING)
    }
}

/// Closed set of account kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountKind {
    /// Plain account: only the balance limits withdrawals
    Standard,
    /// Current account: balance plus a withdrawal policy
    Current(WithdrawalPolicy),
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Standard => "standard",
            AccountKind::Current(_) => "current",
        }
    }

    pub fn policy(&self) -> Option<&WithdrawalPolicy> {
        match self {
            AccountKind::Standard => None,
            AccountKind::Current(policy) => Some(policy),
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A bank account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account number
    pub number: AccountNumber,
    /// Branch code (agência)
    pub branch: String,
    /// Tax-id of the owning customer
    pub owner: String,
    balance: Decimal,
    kind: AccountKind,
    history: History,
    /// Opening time
    pub created_at: DateTime<Utc>,
}

impl Account {
    fn new(number: AccountNumber, branch: &str, owner: &str, kind: AccountKind) -> Self {
        Self {
            number,
            branch: branch.to_string(),
            owner: owner.to_string(),
            balance: Decimal::ZERO,
            kind,
            history: History::new(),
            created_at: Utc::now(),
        }
    }

    /// Open a standard account with zero balance
    pub fn standard(number: AccountNumber, branch: &str, owner: &str) -> Self {
        Self::new(number, branch, owner, AccountKind::Standard)
    }

    /// Open a current account with the default withdrawal policy
    pub fn current(number: AccountNumber, branch: &str, owner: &str) -> Self {
        Self::current_with_policy(number, branch, owner, WithdrawalPolicy::default())
    }

    /// Open a current account with an explicit withdrawal policy
    pub fn current_with_policy(
        number: AccountNumber,
        branch: &str,
        owner: &str,
        policy: WithdrawalPolicy,
    ) -> Self {
        Self::new(number, branch, owner, AccountKind::Current(policy))
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn kind(&self) -> &AccountKind {
        &self.kind
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn is_current(&self) -> bool {
        matches!(self.kind, AccountKind::Current(_))
    }

    /// Withdrawals still allowed; `None` when the kind has no count limit
    pub fn remaining_withdrawals(&self) -> Option<u32> {
        self.kind.policy().map(WithdrawalPolicy::remaining)
    }

    /// Increase the balance.
    pub fn deposit(&mut self, amount: Decimal) -> CoreResult<()> {
        ensure_positive(amount)?;
        self.balance += amount;
        Ok(())
    }

    /// Decrease the balance, honouring the withdrawal policy.
    ///
    /// Every check runs before anything changes, so a rejected withdrawal
    /// leaves balance and withdrawal count untouched.
    pub fn withdraw(&mut self, amount: Decimal) -> CoreResult<()> {
        self.check_withdrawal(amount)?;

        self.balance -= amount;
        if let AccountKind::Current(policy) = &mut self.kind {
            policy.withdrawals_made += 1;
        }
        Ok(())
    }

    fn check_withdrawal(&self, amount: Decimal) -> CoreResult<()> {
        ensure_positive(amount)?;
        if let Some(policy) = self.kind.policy() {
            policy.check(amount)?;
        }
        if amount > self.balance {
            return Err(CoreError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Branch: {}, Account: {}, Kind: {}, Owner: {}",
            self.branch, self.number, self.kind, self.owner
        )
    }
}
