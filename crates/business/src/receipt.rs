//! Result of a cash operation, as reported back to the caller.

use chrono::{DateTime, Utc};
use passbook_core::{Account, AccountNumber, Transaction, TransactionKind};
use rust_decimal::Decimal;

/// Transaction receipt from a deposit or withdrawal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub account: AccountNumber,
    pub kind: TransactionKind,
    pub amount: Decimal,
    /// Balance after the operation
    pub balance: Decimal,
    /// Withdrawals still allowed (current accounts only)
    pub remaining_withdrawals: Option<u32>,
    pub timestamp: DateTime<Utc>,
}

impl TransactionReceipt {
    pub fn new(account: &Account, transaction: &Transaction) -> Self {
        Self {
            account: account.number,
            kind: transaction.kind(),
            amount: transaction.amount(),
            balance: account.balance(),
            remaining_withdrawals: account.remaining_withdrawals(),
            timestamp: transaction.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passbook_core::{execute, DEFAULT_BRANCH};
    use rust_decimal_macros::dec;

    #[test]
    fn test_receipt_from_account() {
        let mut account = Account::current(7, DEFAULT_BRANCH, "52998224725");
        execute(&mut account, Transaction::deposit(dec!(300))).unwrap();
        let tx = execute(&mut account, Transaction::withdrawal(dec!(100)))
            .unwrap()
            .clone();

        let receipt = TransactionReceipt::new(&account, &tx);
        assert_eq!(receipt.account, 7);
        assert_eq!(receipt.kind, TransactionKind::Withdrawal);
        assert_eq!(receipt.balance, dec!(200));
        assert_eq!(receipt.remaining_withdrawals, Some(2));
    }
}
