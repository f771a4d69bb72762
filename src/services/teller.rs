//! Teller service
//!
//! Business logic for the account ledger: account creation, deposits,
//! withdrawals, balance enquiries, and listings. Every successful mutation
//! is persisted immediately. The original program saved on deposit and
//! withdrawal but not on creation; that asymmetry looked unintentional, so
//! creation saves too.

use crate::error::{TellerError, TellerResult};
use crate::models::{Account, AccountNumber, Money};
use crate::storage::LedgerRepository;

/// Maximum number of accounts the ledger accepts
pub const MAX_ACCOUNTS: usize = 100;

/// Service for ledger operations
pub struct TellerService<'a> {
    ledger: &'a LedgerRepository,
}

/// Result of a full listing: all accounts plus the aggregate balance
#[derive(Debug, Clone)]
pub struct LedgerSummary {
    pub accounts: Vec<Account>,
    pub total_balance: Money,
}

impl LedgerSummary {
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl<'a> TellerService<'a> {
    /// Create a new teller service
    pub fn new(ledger: &'a LedgerRepository) -> Self {
        Self { ledger }
    }

    /// Open a new account
    ///
    /// Assigns the next sequential account number, appends the account to
    /// the ledger, and persists. The opening balance may be zero but not
    /// negative.
    pub fn create(
        &self,
        holder: &str,
        account_type: &str,
        initial_balance: Money,
    ) -> TellerResult<Account> {
        if self.ledger.count()? >= MAX_ACCOUNTS {
            return Err(TellerError::AccountLimitReached {
                limit: MAX_ACCOUNTS,
            });
        }

        if initial_balance.is_negative() {
            return Err(TellerError::InvalidAmount {
                amount: initial_balance,
            });
        }

        let account = Account::new(
            self.ledger.next_number()?,
            holder.trim(),
            account_type.trim(),
            initial_balance,
        );

        account
            .validate()
            .map_err(|e| TellerError::Validation(e.to_string()))?;

        self.ledger.append(account.clone())?;
        self.ledger.save()?;

        Ok(account)
    }

    /// Deposit a strictly positive amount, returning the new balance
    pub fn deposit(&self, number: AccountNumber, amount: Money) -> TellerResult<Money> {
        if !amount.is_positive() {
            return Err(TellerError::InvalidAmount { amount });
        }

        let account = self.get(number)?;

        let new_balance = self
            .ledger
            .set_balance(number, account.balance + amount)?
            .ok_or_else(|| TellerError::account_not_found(number))?;
        self.ledger.save()?;

        Ok(new_balance)
    }

    /// Withdraw a strictly positive amount not exceeding the balance,
    /// returning the new balance
    pub fn withdraw(&self, number: AccountNumber, amount: Money) -> TellerResult<Money> {
        if !amount.is_positive() {
            return Err(TellerError::InvalidAmount { amount });
        }

        let account = self.get(number)?;

        if amount > account.balance {
            return Err(TellerError::InsufficientFunds {
                requested: amount,
                available: account.balance,
            });
        }

        let new_balance = self
            .ledger
            .set_balance(number, account.balance - amount)?
            .ok_or_else(|| TellerError::account_not_found(number))?;
        self.ledger.save()?;

        Ok(new_balance)
    }

    /// Get a snapshot of the account with the given number
    pub fn balance_enquiry(&self, number: AccountNumber) -> TellerResult<Account> {
        self.get(number)
    }

    /// List all accounts in creation order with their aggregate balance
    pub fn list_all(&self) -> TellerResult<LedgerSummary> {
        let accounts = self.ledger.get_all()?;
        let total_balance = accounts.iter().map(|a| a.balance).sum();

        Ok(LedgerSummary {
            accounts,
            total_balance,
        })
    }

    fn get(&self, number: AccountNumber) -> TellerResult<Account> {
        self.ledger
            .get(number)?
            .ok_or_else(|| TellerError::account_not_found(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_service() -> (TempDir, LedgerRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    fn dollars(d: i64) -> Money {
        Money::from_cents(d * 100)
    }

    #[test]
    fn test_create_assigns_sequential_numbers() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let a = teller.create("Alice", "Savings", dollars(100)).unwrap();
        let b = teller.create("Bob", "Current", dollars(50)).unwrap();
        let c = teller.create("Carol", "Savings", Money::zero()).unwrap();

        assert_eq!(a.number, AccountNumber::new(1001));
        assert_eq!(b.number, AccountNumber::new(1002));
        assert_eq!(c.number, AccountNumber::new(1003));
        assert!(a.number < b.number && b.number < c.number);
    }

    #[test]
    fn test_create_rejects_negative_opening_balance() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let result = teller.create("Alice", "Savings", Money::from_cents(-1));
        assert!(matches!(result, Err(TellerError::InvalidAmount { .. })));
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_create_rejects_empty_holder() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let result = teller.create("   ", "Savings", Money::zero());
        assert!(matches!(result, Err(TellerError::Validation(_))));
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_create_enforces_account_limit() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        for i in 0..MAX_ACCOUNTS {
            teller
                .create(&format!("Holder {}", i), "Savings", Money::zero())
                .unwrap();
        }

        let result = teller.create("One Too Many", "Savings", Money::zero());
        assert!(matches!(
            result,
            Err(TellerError::AccountLimitReached { limit: MAX_ACCOUNTS })
        ));
        assert_eq!(repo.count().unwrap(), MAX_ACCOUNTS);
    }

    #[test]
    fn test_deposit_and_withdraw_update_balance() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let account = teller.create("Alice", "Savings", dollars(100)).unwrap();

        assert_eq!(teller.deposit(account.number, dollars(30)).unwrap(), dollars(130));
        assert_eq!(teller.withdraw(account.number, dollars(50)).unwrap(), dollars(80));

        // Final balance = opening + deposits - withdrawals
        let snapshot = teller.balance_enquiry(account.number).unwrap();
        assert_eq!(snapshot.balance, dollars(100 + 30 - 50));
    }

    #[test]
    fn test_deposit_rejects_non_positive_amounts() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let account = teller.create("Alice", "Savings", dollars(100)).unwrap();

        for cents in [0, -500] {
            let result = teller.deposit(account.number, Money::from_cents(cents));
            assert!(matches!(result, Err(TellerError::InvalidAmount { .. })));
        }

        let snapshot = teller.balance_enquiry(account.number).unwrap();
        assert_eq!(snapshot.balance, dollars(100));
    }

    #[test]
    fn test_withdraw_rejects_non_positive_amounts() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let account = teller.create("Alice", "Savings", dollars(100)).unwrap();

        for cents in [0, -500] {
            let result = teller.withdraw(account.number, Money::from_cents(cents));
            assert!(matches!(result, Err(TellerError::InvalidAmount { .. })));
        }

        let snapshot = teller.balance_enquiry(account.number).unwrap();
        assert_eq!(snapshot.balance, dollars(100));
    }

    #[test]
    fn test_overdraw_leaves_balance_unchanged() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let account = teller.create("Alice", "Savings", dollars(150)).unwrap();

        let result = teller.withdraw(account.number, dollars(200));
        assert!(matches!(
            result,
            Err(TellerError::InsufficientFunds { .. })
        ));

        let snapshot = teller.balance_enquiry(account.number).unwrap();
        assert_eq!(snapshot.balance, dollars(150));
    }

    #[test]
    fn test_withdraw_to_zero_is_allowed() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let account = teller.create("Alice", "Savings", dollars(150)).unwrap();
        assert_eq!(
            teller.withdraw(account.number, dollars(150)).unwrap(),
            Money::zero()
        );
    }

    #[test]
    fn test_operations_on_unknown_account() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let missing = AccountNumber::new(1001);
        assert!(teller.deposit(missing, dollars(10)).unwrap_err().is_not_found());
        assert!(teller.withdraw(missing, dollars(10)).unwrap_err().is_not_found());
        assert!(teller.balance_enquiry(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_list_all_totals() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let empty = teller.list_all().unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.total_balance, Money::zero());

        teller.create("Alice", "Savings", dollars(100)).unwrap();
        teller.create("Bob", "Current", dollars(25)).unwrap();

        let summary = teller.list_all().unwrap();
        assert_eq!(summary.accounts.len(), 2);
        assert_eq!(summary.total_balance, dollars(125));
        assert_eq!(summary.accounts[0].holder, "Alice");
        assert_eq!(summary.accounts[1].holder, "Bob");
    }

    #[test]
    fn test_mutations_persist_immediately() {
        let (temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let account = teller.create("Alice", "Savings", dollars(100)).unwrap();
        teller.deposit(account.number, dollars(50)).unwrap();

        // A fresh repository sees the saved state without an explicit save
        let repo2 = LedgerRepository::new(temp_dir.path().join("ledger.json"));
        assert_eq!(repo2.load().unwrap(), 1);
        let reloaded = repo2.get(account.number).unwrap().unwrap();
        assert_eq!(reloaded.balance, dollars(150));
    }

    #[test]
    fn test_alice_scenario() {
        let (_temp_dir, repo) = create_test_service();
        let teller = TellerService::new(&repo);

        let account = teller.create("Alice", "Savings", dollars(100)).unwrap();
        assert_eq!(account.number, AccountNumber::new(1001));
        assert_eq!(account.balance, dollars(100));

        assert_eq!(teller.deposit(account.number, dollars(50)).unwrap(), dollars(150));

        let result = teller.withdraw(account.number, dollars(200));
        assert!(matches!(result, Err(TellerError::InsufficientFunds { .. })));
        assert_eq!(
            teller.balance_enquiry(account.number).unwrap().balance,
            dollars(150)
        );

        assert_eq!(
            teller.withdraw(account.number, dollars(150)).unwrap(),
            Money::zero()
        );

        let summary = teller.list_all().unwrap();
        assert_eq!(summary.accounts.len(), 1);
        assert_eq!(summary.total_balance, Money::zero());
    }
}
