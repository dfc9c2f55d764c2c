//! # Transaction Execution Engine
//!
//! Applies a [`Transaction`] to an [`Account`]: the matching account
//! operation runs first, and the transaction is appended to the history
//! only when that operation succeeds.

use crate::account::Account;
use crate::error::CoreResult;
use crate::transaction::{Transaction, TransactionKind};

/// Execute a transaction against an account.
///
/// On success the recorded history entry is returned. On failure the account
/// is unchanged: balance, withdrawal count and history.
pub fn execute(account: &mut Account, transaction: Transaction) -> CoreResult<&Transaction> {
    match transaction.kind() {
        TransactionKind::Deposit => account.deposit(transaction.amount())?,
        TransactionKind::Withdrawal => account.withdraw(transaction.amount())?,
    }
    Ok(account.history_mut().push(transaction))
}
