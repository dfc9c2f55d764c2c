//! # Passbook Persistence
//!
//! Persistence layer for Passbook - two JSON file stores.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Database                          │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────┐  │
//! │  │ customers.json │  │ accounts.json  │  │   link()   │  │
//! │  │  (customers)   │  │ (accounts +    │  │ (back-refs)│  │
//! │  │                │  │  history)      │  │            │  │
//! │  └────────────────┘  └────────────────┘  └────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole collection is loaded at start and rewritten after every
//! mutation. See [`schema`] for the file layout.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use passbook_persistence::Database;
//!
//! let db = Database::open("data")?;
//! let mut snapshot = db.load()?;
//! // ... mutate ...
//! db.save_accounts(&snapshot.accounts, snapshot.last_account_number)?;
//! ```

pub mod error;
pub mod graph;
pub mod schema;
pub mod store;

pub use error::{PersistenceError, PersistenceResult};
pub use graph::{link, Snapshot};
pub use schema::{AccountFile, CustomerFile, SCHEMA_VERSION};
pub use store::JsonStore;

use chrono::Utc;
use passbook_core::{Account, AccountNumber, Customer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the customer store
pub const CUSTOMERS_FILE: &str = "customers.json";
/// File name of the account store
pub const ACCOUNTS_FILE: &str = "accounts.json";

/// Database facade - the two named stores of one data directory
#[derive(Debug, Clone)]
pub struct Database {
    dir: PathBuf,
    customers: JsonStore,
    accounts: JsonStore,
}

impl Database {
    /// Open (and create if needed) a data directory
    pub fn open<P: AsRef<Path>>(dir: P) -> PersistenceResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| PersistenceError::io(&dir, e))?;

        Ok(Self {
            customers: JsonStore::new(dir.join(CUSTOMERS_FILE)),
            accounts: JsonStore::new(dir.join(ACCOUNTS_FILE)),
            dir,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn customers_path(&self) -> &Path {
        self.customers.path()
    }

    pub fn accounts_path(&self) -> &Path {
        self.accounts.path()
    }

    /// Load both stores and link them. Missing stores load as empty.
    pub fn load(&self) -> PersistenceResult<Snapshot> {
        let customers = match self.customers.read::<CustomerFile<Vec<Customer>>>()? {
            Some(file) => {
                self.check_version(self.customers.path(), file.schema_version)?;
                file.records
            }
            None => Vec::new(),
        };

        let (accounts, last_account_number) =
            match self.accounts.read::<AccountFile<Vec<Account>>>()? {
                Some(file) => {
                    self.check_version(self.accounts.path(), file.schema_version)?;
                    (file.records, file.last_account_number)
                }
                None => (Vec::new(), 0),
            };

        let mut snapshot = Snapshot {
            customers,
            accounts,
            last_account_number,
        };
        let repaired = link(&mut snapshot)?;

        info!(
            customers = snapshot.customers.len(),
            accounts = snapshot.accounts.len(),
            repaired,
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Overwrite the customer store
    pub fn save_customers(&self, customers: &[Customer]) -> PersistenceResult<()> {
        let file = CustomerFile {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            records: customers,
        };
        self.customers.write(&file)?;
        debug!(count = customers.len(), "customers saved");
        Ok(())
    }

    /// Overwrite the account store
    pub fn save_accounts(
        &self,
        accounts: &[Account],
        last_account_number: AccountNumber,
    ) -> PersistenceResult<()> {
        let file = AccountFile {
            schema_version: SCHEMA_VERSION,
            saved_at: Utc::now(),
            last_account_number,
            records: accounts,
        };
        self.accounts.write(&file)?;
        debug!(count = accounts.len(), "accounts saved");
        Ok(())
    }

    /// Overwrite both stores
    pub fn save(&self, snapshot: &Snapshot) -> PersistenceResult<()> {
        self.save_customers(&snapshot.customers)?;
        self.save_accounts(&snapshot.accounts, snapshot.last_account_number)
    }

    fn check_version(&self, path: &Path, found: u32) -> PersistenceResult<()> {
        if found == SCHEMA_VERSION {
            Ok(())
        } else {
            Err(PersistenceError::UnsupportedSchema {
                path: path.to_path_buf(),
                found,
                expected: SCHEMA_VERSION,
            })
        }
    }
}
