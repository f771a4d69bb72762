//! Ledger repository for JSON storage
//!
//! Holds the ordered in-memory sequence of accounts and manages bulk
//! loading from and saving to the ledger file. Insertion order is creation
//! order, and lookups are a linear scan; at the ledger's scale (at most a
//! few hundred records) an index would not pay for itself.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::TellerError;
use crate::models::{Account, AccountNumber, Money};

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk schema version
const SCHEMA_VERSION: u32 = 1;

/// Base offset for assigned account numbers; the first account gets 1001
const NUMBER_BASE: u32 = 1000;

/// On-disk representation of the ledger
///
/// The original program dumped native structs straight to disk, which tied
/// the file to one compiler's padding rules. A versioned JSON document is a
/// deliberate deviation in favor of a portable, self-describing format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LedgerFile {
    schema_version: u32,
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct LedgerRepository {
    path: PathBuf,
    accounts: RwLock<Vec<Account>>,
}

impl LedgerRepository {
    /// Create a new ledger repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            accounts: RwLock::new(Vec::new()),
        }
    }

    /// Load accounts from disk, returning the number loaded
    ///
    /// A missing file initializes an empty ledger; this is the expected
    /// first-run condition, not an error.
    pub fn load(&self) -> Result<usize, TellerError> {
        let file_data: Option<LedgerFile> = read_json(&self.path)?;

        let loaded = match file_data {
            Some(file) => {
                if file.schema_version != SCHEMA_VERSION {
                    return Err(TellerError::Storage(format!(
                        "Unsupported ledger schema version {} in {}",
                        file.schema_version,
                        self.path.display()
                    )));
                }
                file.accounts
            }
            None => Vec::new(),
        };

        let mut accounts = self.write_lock()?;
        *accounts = loaded;
        Ok(accounts.len())
    }

    /// Save the full account sequence to disk, replacing previous contents
    pub fn save(&self) -> Result<(), TellerError> {
        let accounts = self.read_lock()?;

        let file_data = LedgerFile {
            schema_version: SCHEMA_VERSION,
            accounts: accounts.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an account by number
    pub fn get(&self, number: AccountNumber) -> Result<Option<Account>, TellerError> {
        let accounts = self.read_lock()?;
        Ok(accounts.iter().find(|a| a.number == number).cloned())
    }

    /// Get all accounts in creation order
    pub fn get_all(&self) -> Result<Vec<Account>, TellerError> {
        let accounts = self.read_lock()?;
        Ok(accounts.clone())
    }

    /// The number the next created account will receive
    pub fn next_number(&self) -> Result<AccountNumber, TellerError> {
        let accounts = self.read_lock()?;
        Ok(AccountNumber::new(NUMBER_BASE + accounts.len() as u32 + 1))
    }

    /// Append a newly created account to the sequence
    pub fn append(&self, account: Account) -> Result<(), TellerError> {
        let mut accounts = self.write_lock()?;
        accounts.push(account);
        Ok(())
    }

    /// Replace the balance of the account with the given number
    ///
    /// Returns the new balance, or `None` if no such account exists.
    pub fn set_balance(
        &self,
        number: AccountNumber,
        balance: Money,
    ) -> Result<Option<Money>, TellerError> {
        let mut accounts = self.write_lock()?;
        match accounts.iter_mut().find(|a| a.number == number) {
            Some(account) => {
                account.balance = balance;
                Ok(Some(balance))
            }
            None => Ok(None),
        }
    }

    /// Count accounts
    pub fn count(&self) -> Result<usize, TellerError> {
        let accounts = self.read_lock()?;
        Ok(accounts.len())
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Account>>, TellerError> {
        self.accounts
            .read()
            .map_err(|e| TellerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Account>>, TellerError> {
        self.accounts
            .write()
            .map_err(|e| TellerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
