//! Account model
//!
//! Represents a bank account held in the ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::money::Money;

/// Maximum length of an account holder's name
pub const MAX_HOLDER_LEN: usize = 99;

/// Maximum length of the free-form account type label
pub const MAX_TYPE_LEN: usize = 19;

/// Unique integer identifier for an account, assigned sequentially at creation
///
/// Numbers start at 1001 and strictly increase in creation order. They are
/// never reused since accounts are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u32);

impl AccountNumber {
    /// Wrap a raw account number
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the raw numeric value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A bank account
///
/// The account type is a free-form label ("Savings", "Current", ...) rather
/// than an enumeration; any non-oversized string is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned by the ledger
    pub number: AccountNumber,

    /// Account holder's name
    pub holder: String,

    /// Free-form account type label
    #[serde(rename = "type")]
    pub account_type: String,

    /// Current balance, never negative
    pub balance: Money,

    /// When the account was opened
    #[serde(default = "Utc::now")]
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with the given number and opening balance
    pub fn new(
        number: AccountNumber,
        holder: impl Into<String>,
        account_type: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            number,
            holder: holder.into(),
            account_type: account_type.into(),
            balance,
            opened_at: Utc::now(),
        }
    }

    /// Validate the account fields
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.holder.trim().is_empty() {
            return Err(AccountValidationError::EmptyHolder);
        }

        if self.holder.chars().count() > MAX_HOLDER_LEN {
            return Err(AccountValidationError::HolderTooLong(
                self.holder.chars().count(),
            ));
        }

        if self.account_type.chars().count() > MAX_TYPE_LEN {
            return Err(AccountValidationError::TypeTooLong(
                self.account_type.chars().count(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.holder, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyHolder,
    HolderTooLong(usize),
    TypeTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHolder => write!(f, "Account holder name cannot be empty"),
            Self::HolderTooLong(len) => {
                write!(
                    f,
                    "Account holder name too long ({} chars, max {})",
                    len, MAX_HOLDER_LEN
                )
            }
            Self::TypeTooLong(len) => {
                write!(
                    f,
                    "Account type too long ({} chars, max {})",
                    len, MAX_TYPE_LEN
                )
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}
