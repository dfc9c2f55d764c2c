//! Account statement - replay a history into a running-balance ledger
//!
//! The replay starts at 0.00 and must end on the stored balance of the
//! account; a statement is never produced for an account whose history
//! disagrees with its balance.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use passbook_core::money::{format_cents, round_cents};
use passbook_core::{Account, AccountNumber, Customer, TransactionKind};
use rust_decimal::Decimal;
use std::fmt;
use thiserror::Error;

/// Line printed when an account has no history
pub const NO_MOVEMENTS: &str = "No movements recorded.";

const RULE: &str = "==============================";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatementError {
    #[error("Account {account}: history replays to {replayed} but stored balance is {stored}")]
    BalanceMismatch {
        account: AccountNumber,
        replayed: Decimal,
        stored: Decimal,
    },
}

pub type StatementResult<T> = Result<T, StatementError>;

/// One replayed history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLine {
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    /// Signed amount (+credit, -debit), unrounded
    pub amount: Decimal,
    /// Running balance after this entry, unrounded
    pub balance: Decimal,
}

/// Show `timestamp` at `offset`, or at the local offset in force at that instant
fn localize(timestamp: DateTime<Utc>, offset: Option<FixedOffset>) -> DateTime<FixedOffset> {
    match offset {
        Some(offset) => timestamp.with_timezone(&offset),
        None => {
            let local = timestamp.with_timezone(&Local);
            timestamp.with_timezone(local.offset())
        }
    }
}

impl StatementLine {
    fn render(&self, offset: Option<FixedOffset>) -> String {
        let local = localize(self.timestamp, offset);
        format!(
            "{:<11} {:<9} {:<21} {:<7} {:>12} {:>12}",
            local.format("%d/%m/%Y"),
            local.format("%H:%M:%S"),
            self.kind.description(),
            self.kind.entry_label(),
            signed_cents(self.amount),
            format_cents(self.balance),
        )
    }
}

fn signed_cents(amount: Decimal) -> String {
    let rounded = round_cents(amount);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", format_cents(rounded.abs()))
    } else {
        format!("+{}", format_cents(rounded))
    }
}

/// Replayed statement of one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub bank_name: String,
    pub branch: String,
    pub account: AccountNumber,
    pub holder: String,
    pub period_start: NaiveDate,
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<StatementLine>,
    pub closing_balance: Decimal,
    opened_at: DateTime<Utc>,
    offset: Option<FixedOffset>,
}

impl Statement {
    /// Replay `account`'s history. Dates are shown in the local time zone.
    pub fn render(account: &Account, holder: &Customer, bank_name: &str) -> StatementResult<Self> {
        let mut running = Decimal::ZERO;
        let mut lines = Vec::with_capacity(account.history().len());

        for transaction in account.history() {
            running += transaction.signed_amount();
            lines.push(StatementLine {
                timestamp: transaction.timestamp(),
                kind: transaction.kind(),
                amount: transaction.signed_amount(),
                balance: running,
            });
        }

        if running != account.balance() {
            return Err(StatementError::BalanceMismatch {
                account: account.number,
                replayed: running,
                stored: account.balance(),
            });
        }

        Ok(Self {
            bank_name: bank_name.to_string(),
            branch: account.branch.clone(),
            account: account.number,
            holder: holder.name.clone(),
            period_start: localize(account.created_at, None).date_naive(),
            generated_at: Utc::now(),
            lines,
            closing_balance: running,
            opened_at: account.created_at,
            offset: None,
        })
    }

    /// Show dates and times at a fixed UTC offset instead of local time
    pub fn with_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = Some(offset);
        self.period_start = localize(self.opened_at, self.offset).date_naive();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Body lines only: one per entry, or the "no movements" line
    pub fn body(&self) -> Vec<String> {
        if self.lines.is_empty() {
            vec![NO_MOVEMENTS.to_string()]
        } else {
            self.lines.iter().map(|l| l.render(self.offset)).collect()
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "ACCOUNT STATEMENT")?;
        writeln!(f, "Bank: {}", self.bank_name)?;
        writeln!(f, "Branch: {}", self.branch)?;
        writeln!(f, "Account: {}", self.account)?;
        writeln!(f, "Holder: {}", self.holder)?;
        writeln!(
            f,
            "Period: {} to {}",
            self.period_start.format("%d/%m/%Y"),
            localize(self.generated_at, self.offset).format("%d/%m/%Y")
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<11} {:<9} {:<21} {:<7} {:>12} {:>12}",
            "Date", "Time", "Description", "Entry", "Amount", "Balance"
        )?;
        for line in self.body() {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "Closing balance: {}", format_cents(self.closing_balance))?;
        write!(f, "{}", RULE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use passbook_core::{execute, Transaction, DEFAULT_BRANCH};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn alice() -> Customer {
        Customer::individual(
            "52998224725",
            "Alice Souza",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            "Rua das Flores, 10",
        )
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, h, m, 0).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let account = Account::current(1, DEFAULT_BRANCH, "52998224725");
        let statement = Statement::render(&account, &alice(), "Banco Exemplo S.A.")
            .unwrap()
            .with_offset(utc());

        assert!(statement.is_empty());
        assert_eq!(statement.body(), vec![NO_MOVEMENTS.to_string()]);
        assert_eq!(statement.closing_balance, Decimal::ZERO);

        let text = statement.to_string();
        assert!(text.contains("Holder: Alice Souza"));
        assert!(text.contains(NO_MOVEMENTS));
        assert!(text.contains("Closing balance: 0.00"));
    }

    #[test]
    fn test_running_balance_lines() {
        let mut account = Account::current(1, DEFAULT_BRANCH, "52998224725");
        execute(
            &mut account,
            Transaction::at(TransactionKind::Deposit, dec!(1000), at(9, 0)),
        )
        .unwrap();
        execute(
            &mut account,
            Transaction::at(TransactionKind::Withdrawal, dec!(250.5), at(10, 15)),
        )
        .unwrap();

        let statement = Statement::render(&account, &alice(), "Banco Exemplo S.A.")
            .unwrap()
            .with_offset(utc());

        let balances: Vec<_> = statement.lines.iter().map(|l| l.balance).collect();
        assert_eq!(balances, vec![dec!(1000), dec!(749.5)]);

        let body = statement.body();
        assert_eq!(body.len(), 2);
        assert!(body[0].starts_with("01/06/2025  09:00:00"));
        assert!(body[0].contains("Cash deposit"));
        assert!(body[0].contains("+1000.00"));
        assert!(body[1].contains("Cash withdrawal"));
        assert!(body[1].contains("-250.50"));
        assert!(body[1].trim_end().ends_with("749.50"));
    }

    #[test]
    fn test_local_time_uses_offset_of_each_entry() {
        let winter = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2025, 7, 15, 12, 0, 0).unwrap();
        let mut account = Account::standard(1, DEFAULT_BRANCH, "52998224725");
        execute(
            &mut account,
            Transaction::at(TransactionKind::Deposit, dec!(10), winter),
        )
        .unwrap();
        execute(
            &mut account,
            Transaction::at(TransactionKind::Deposit, dec!(10), summer),
        )
        .unwrap();

        let statement = Statement::render(&account, &alice(), "Banco").unwrap();
        let body = statement.body();
        for (line, ts) in body.iter().zip([winter, summer]) {
            let expected = ts.with_timezone(&Local).format("%d/%m/%Y  %H:%M:%S").to_string();
            assert!(line.starts_with(&expected), "{} vs {}", line, expected);
        }
    }

    #[test]
    fn test_pinned_offset_moves_period_start() {
        let account = Account::standard(1, DEFAULT_BRANCH, "52998224725");
        let east = FixedOffset::east_opt(14 * 3600).unwrap();
        let statement = Statement::render(&account, &alice(), "Banco")
            .unwrap()
            .with_offset(east);
        assert_eq!(
            statement.period_start,
            account.created_at.with_timezone(&east).date_naive()
        );
    }

    #[test]
    fn test_half_up_rounding_in_display() {
        let mut account = Account::standard(1, DEFAULT_BRANCH, "52998224725");
        execute(
            &mut account,
            Transaction::at(TransactionKind::Deposit, dec!(0.125), at(9, 0)),
        )
        .unwrap();

        let statement = Statement::render(&account, &alice(), "Banco")
            .unwrap()
            .with_offset(utc());
        let line = &statement.body()[0];
        assert!(line.contains("+0.13"));
        assert!(line.trim_end().ends_with("0.13"));
        // Exact value is kept underneath
        assert_eq!(statement.closing_balance, dec!(0.125));
    }

    #[test]
    fn test_balance_mismatch_is_refused() {
        let mut account = Account::standard(4, DEFAULT_BRANCH, "52998224725");
        execute(&mut account, Transaction::deposit(dec!(10))).unwrap();
        // Balance moved without a history entry
        account.deposit(dec!(5)).unwrap();

        let err = Statement::render(&account, &alice(), "Banco").unwrap_err();
        assert_eq!(
            err,
            StatementError::BalanceMismatch {
                account: 4,
                replayed: dec!(10),
                stored: dec!(15),
            }
        );
    }

    #[test]
    fn test_signed_cents() {
        assert_eq!(signed_cents(dec!(5)), "+5.00");
        assert_eq!(signed_cents(dec!(-5.005)), "-5.01");
        assert_eq!(signed_cents(dec!(-0.001)), "+0.00");
    }

    proptest! {
        /// Property: the last running balance always equals the stored one.
        #[test]
        fn replay_matches_stored_balance(
            ops in prop::collection::vec((any::<bool>(), 1i64..100_000i64), 0..30)
        ) {
            let mut account = Account::standard(1, DEFAULT_BRANCH, "52998224725");
            for (is_deposit, cents) in ops {
                let amount = Decimal::new(cents, 2);
                let tx = if is_deposit {
                    Transaction::deposit(amount)
                } else {
                    Transaction::withdrawal(amount)
                };
                let _ = execute(&mut account, tx);
            }

            let statement = Statement::render(&account, &alice(), "Banco").unwrap();
            prop_assert_eq!(statement.closing_balance, account.balance());
            if let Some(last) = statement.lines.last() {
                prop_assert_eq!(last.balance, account.balance());
            }
            prop_assert_eq!(statement.lines.len(), account.history().len());
        }
    }
}
