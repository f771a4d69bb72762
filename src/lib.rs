//! Teller - terminal-based bank account ledger
//!
//! This library provides the core functionality for the teller application:
//! a single-user bank account ledger persisted to a versioned JSON file,
//! plus a small four-function calculator.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, account numbers, money)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `calc`: Stateless arithmetic operations
//! - `display`: Terminal output formatting
//! - `cli`: Subcommand handlers and the interactive menu

pub mod calc;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TellerError, TellerResult};
