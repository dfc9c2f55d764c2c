//! Passbook CLI - Banking operations from command line
//!
//! Usage:
//! ```bash
//! passbook customer create 529.982.247-25 --name "Alice Souza" \
//!     --birth-date 12-04-1990 --address "Rua das Flores, 10 - Recife/PE"
//! passbook account create 529.982.247-25 --kind current
//! passbook deposit 1 1000,00
//! passbook withdraw 1 500
//! passbook statement 1
//! passbook status
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use passbook_business::{AccountType, Bank, BankSettings, DEFAULT_BANK_NAME};
use passbook_core::{AccountNumber, DEFAULT_BRANCH, DEFAULT_WITHDRAWAL_LIMIT};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::debug;

mod commands;
mod validate;

use commands::{account, cash, customer};
use validate::{parse_amount, parse_birth_date, parse_tax_id, parse_text};

/// Passbook - customers, current accounts and cash operations on flat files
#[derive(Parser)]
#[command(name = "passbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding customers.json and accounts.json
    #[arg(long, default_value = "data", global = true)]
    pub data_dir: PathBuf,

    /// Bank name printed on statements
    #[arg(long, default_value = DEFAULT_BANK_NAME, value_parser = parse_text, global = true)]
    pub bank_name: String,

    /// Branch code given to new accounts
    #[arg(long, default_value = DEFAULT_BRANCH, global = true)]
    pub branch: String,

    /// Withdrawals allowed per current account
    #[arg(long, default_value_t = DEFAULT_WITHDRAWAL_LIMIT, global = true)]
    pub withdrawal_limit: u32,

    /// Largest single withdrawal from a current account
    #[arg(long, default_value = "500.00", value_parser = parse_amount, global = true)]
    pub withdrawal_ceiling: Decimal,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    fn settings(&self) -> BankSettings {
        BankSettings::new()
            .with_bank_name(&self.bank_name)
            .with_branch(&self.branch)
            .with_withdrawal_limit(self.withdrawal_limit)
            .with_withdrawal_ceiling(self.withdrawal_ceiling)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Customer management
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Account management
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Deposit cash into an account
    Deposit {
        /// Account number
        number: AccountNumber,
        /// Amount to deposit (e.g. 100.50 or 100,50)
        #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Withdraw cash from an account
    Withdraw {
        /// Account number
        number: AccountNumber,
        /// Amount to withdraw
        #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Print the statement of an account
    Statement {
        /// Account number
        number: AccountNumber,
    },

    /// Show data directory status
    Status,
}

#[derive(Subcommand)]
pub enum CustomerAction {
    /// Register a new customer
    Create {
        /// CPF, with or without punctuation
        #[arg(value_parser = parse_tax_id)]
        tax_id: String,
        /// Full name
        #[arg(long, short, value_parser = parse_text)]
        name: String,
        /// Birth date (dd-mm-yyyy)
        #[arg(long, short, value_parser = parse_birth_date)]
        birth_date: NaiveDate,
        /// Street, number, district - city/state
        #[arg(long, short, value_parser = parse_text)]
        address: String,
    },
    /// List all customers
    List,
    /// Delete a customer without accounts
    Delete {
        #[arg(value_parser = parse_tax_id)]
        tax_id: String,
    },
}

#[derive(Subcommand)]
pub enum AccountAction {
    /// Open a new account for a customer
    Create {
        /// Owner's CPF
        #[arg(value_parser = parse_tax_id)]
        tax_id: String,
        /// Account kind
        #[arg(long, short, default_value = "current")]
        kind: AccountKindArg,
    },
    /// List accounts
    List {
        /// Only accounts of this customer
        #[arg(long, value_parser = parse_tax_id)]
        owner: Option<String>,
    },
    /// Show account details
    Show {
        /// Account number
        number: AccountNumber,
    },
    /// Delete an account
    Delete {
        /// Account number
        number: AccountNumber,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AccountKindArg {
    Current,
    Standard,
}

impl AccountKindArg {
    pub fn to_account_type(self) -> AccountType {
        match self {
            AccountKindArg::Current => AccountType::Current,
            AccountKindArg::Standard => AccountType::Standard,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    debug!(data_dir = %cli.data_dir.display(), branch = %cli.branch, "opening bank");
    let mut bank = Bank::open_dir(&cli.data_dir, cli.settings())?;

    match cli.command {
        Commands::Status => {
            commands::show_status(&bank);
        }

        Commands::Customer { action } => {
            customer::handle(&mut bank, action)?;
        }

        Commands::Account { action } => {
            account::handle(&mut bank, action)?;
        }

        Commands::Deposit { number, amount } => {
            cash::deposit(&mut bank, number, amount)?;
        }

        Commands::Withdraw { number, amount } => {
            cash::withdraw(&mut bank, number, amount)?;
        }

        Commands::Statement { number } => {
            cash::statement(&bank, number)?;
        }
    }

    Ok(())
}
