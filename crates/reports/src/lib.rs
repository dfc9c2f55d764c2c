//! # Passbook Reports
//!
//! Report generation - the account statement.
//!
//! A [`Statement`] replays an account's history from 0.00, carrying a
//! running balance on each line, and refuses to render when the replay does
//! not land on the stored balance.
//!
//! ## Example
//!
//! ```rust,ignore
//! use passbook_reports::Statement;
//!
//! let statement = Statement::render(&account, &holder, "Banco Exemplo S.A.")?;
//! println!("{}", statement);
//! ```

pub mod statement;

pub use statement::{Statement, StatementError, StatementLine, StatementResult, NO_MOVEMENTS};
