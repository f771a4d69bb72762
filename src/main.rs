use std::io::{self, BufReader};

use anyhow::Result;
use clap::{Parser, Subcommand};

use teller_cli::cli::{handle_calc_command, handle_ledger_command, run_menu, CalcArgs, LedgerCommands};
use teller_cli::config::TellerPaths;
use teller_cli::storage::LedgerRepository;

#[derive(Parser)]
#[command(
    name = "teller",
    version,
    about = "Terminal-based bank account ledger",
    long_about = "Teller is a terminal-based bank account ledger. It keeps a \
                  small set of accounts in a single JSON file and supports \
                  deposits, withdrawals, balance enquiries, and listings, \
                  plus a four-function calculator. Run without a subcommand \
                  for the interactive menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Run the interactive menu session
    Menu,

    /// Four-function calculator
    Calc(CalcArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TellerPaths::new()?;
    paths.ensure_directories()?;

    let ledger = LedgerRepository::new(paths.ledger_file());
    let loaded = ledger.load()?;

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&ledger, cmd)?;
        }
        Some(Commands::Calc(args)) => {
            handle_calc_command(args)?;
        }
        Some(Commands::Config) => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file: {}", paths.ledger_file().display());
            println!("Accounts: {}", ledger.count()?);
        }
        Some(Commands::Menu) | None => {
            if loaded == 0 {
                println!("No existing accounts found. Starting fresh.");
            } else {
                println!("Loaded {} accounts.", loaded);
            }

            let stdin = io::stdin();
            let mut input = BufReader::new(stdin.lock());
            let mut output = io::stdout();
            run_menu(&ledger, &mut input, &mut output)?;
        }
    }

    Ok(())
}
