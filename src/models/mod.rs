//! Core data models for the teller application
//!
//! This module contains the data structures that represent the banking
//! domain: accounts, account numbers, and monetary amounts.

pub mod account;
pub mod money;

pub use account::{Account, AccountNumber, AccountValidationError, MAX_HOLDER_LEN, MAX_TYPE_LEN};
pub use money::Money;
