//! On-disk schema of the two stores.
//!
//! ```text
//! customers.json
//! {
//!   "schema_version": 1,
//!   "saved_at": "2025-06-01T14:30:00Z",
//!   "records": [
//!     { "tax_id": "52998224725", "name": "...", "birth_date": "1990-04-12",
//!       "address": "...", "kind": "individual", "accounts": [1, 3],
//!       "created_at": "..." }
//!   ]
//! }
//!
//! accounts.json
//! {
//!   "schema_version": 1,
//!   "saved_at": "2025-06-01T14:30:00Z",
//!   "last_account_number": 3,
//!   "records": [
//!     { "number": 1, "branch": "0001", "owner": "52998224725",
//!       "balance": "500.00",
//!       "kind": { "type": "current", "limit": 3, "ceiling": "500.00",
//!                 "withdrawals_made": 1 },
//!       "history": [
//!         { "kind": "deposit", "amount": "1000.00", "timestamp": "..." },
//!         { "kind": "withdrawal", "amount": "500.00", "timestamp": "..." }
//!       ],
//!       "created_at": "..." }
//!   ]
//! }
//! ```
//!
//! Decimals are strings so no value ever passes through binary floating
//! point. `kind` of an account is `{"type": "standard"}` for plain accounts.

use chrono::{DateTime, Utc};
use passbook_core::AccountNumber;
use serde::{Deserialize, Serialize};

/// Current schema version of both stores
pub const SCHEMA_VERSION: u32 = 1;

/// Envelope of `customers.json`. `R` is `Vec<Customer>` when reading and
/// `&[Customer]` when writing.
#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerFile<R> {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    pub records: R,
}

/// Envelope of `accounts.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccountFile<R> {
    pub schema_version: u32,
    pub saved_at: DateTime<Utc>,
    /// Highest account number ever handed out, including deleted ones
    #[serde(default)]
    pub last_account_number: AccountNumber,
    pub records: R,
}
