//! Ledger CLI commands
//!
//! Implements the one-shot subcommands for ledger operations, bridging the
//! clap argument parsing with the service layer.

use clap::Subcommand;

use crate::display::{format_account_details, format_account_list};
use crate::error::{TellerError, TellerResult};
use crate::models::{AccountNumber, Money};
use crate::services::TellerService;
use crate::storage::LedgerRepository;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Open a new account
    Create {
        /// Account holder's name
        holder: String,
        /// Account type label (e.g., "Savings" or "Current")
        #[arg(short = 't', long = "type", default_value = "Savings")]
        account_type: String,
        /// Initial deposit (e.g., "100.00" or "100")
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// Deposit money into an account
    Deposit {
        /// Account number
        account: String,
        /// Amount to deposit (e.g., "50.00")
        amount: String,
    },
    /// Withdraw money from an account
    Withdraw {
        /// Account number
        account: String,
        /// Amount to withdraw (e.g., "50.00")
        amount: String,
    },
    /// Show an account's details and balance
    Balance {
        /// Account number
        account: String,
    },
    /// List all accounts with the total balance
    List,
}

/// Parse an account number argument
fn parse_account(s: &str) -> TellerResult<AccountNumber> {
    s.parse()
        .map_err(|_| TellerError::Validation(format!("Invalid account number: '{}'", s)))
}

/// Parse a money argument
fn parse_amount(s: &str) -> TellerResult<Money> {
    Money::parse(s).map_err(|e| {
        TellerError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '100.00' or '100'. {}",
            s, e
        ))
    })
}

/// Handle a ledger command
pub fn handle_ledger_command(ledger: &LedgerRepository, cmd: LedgerCommands) -> TellerResult<()> {
    let teller = TellerService::new(ledger);

    match cmd {
        LedgerCommands::Create {
            holder,
            account_type,
            balance,
        } => {
            let initial_balance = parse_amount(&balance)?;
            let account = teller.create(&holder, &account_type, initial_balance)?;

            println!("Account created successfully!");
            print!("{}", format_account_details(&account));
        }

        LedgerCommands::Deposit { account, amount } => {
            let number = parse_account(&account)?;
            let amount = parse_amount(&amount)?;

            let new_balance = teller.deposit(number, amount)?;
            println!("Deposit successful!");
            println!("New balance: {}", new_balance);
        }

        LedgerCommands::Withdraw { account, amount } => {
            let number = parse_account(&account)?;
            let amount = parse_amount(&amount)?;

            let new_balance = teller.withdraw(number, amount)?;
            println!("Withdrawal successful!");
            println!("New balance: {}", new_balance);
        }

        LedgerCommands::Balance { account } => {
            let number = parse_account(&account)?;
            let snapshot = teller.balance_enquiry(number)?;
            print!("{}", format_account_details(&snapshot));
        }

        LedgerCommands::List => {
            let summary = teller.list_all()?;
            print!("{}", format_account_list(&summary));
        }
    }

    Ok(())
}
