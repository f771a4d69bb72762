//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer,
//! plus the interactive menu session.

pub mod account;
pub mod calc;
pub mod menu;

pub use account::{handle_ledger_command, LedgerCommands};
pub use calc::{handle_calc_command, CalcArgs};
pub use menu::run_menu;
