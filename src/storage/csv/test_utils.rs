//! Test utilities for storage tests
//!
//! Provides RAII-based temporary data directories so test files are removed
//! even when a test panics.

use anyhow::Result;
use chrono::NaiveDate;
use tempfile::TempDir;

use super::account_repository::AccountRepository;
use super::connection::CsvConnection;
use super::ledger_repository::LedgerRepository;
use crate::domain::models::{Account, LedgerEntry};
use crate::storage::{AccountStorage, LedgerStorage};

/// Test environment with a temporary data directory that is cleaned up when
/// the environment is dropped, even if the test fails.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Test helper that provides repository instances for a test environment
pub struct TestHelper {
    pub env: TestEnvironment,
    pub account_repo: AccountRepository,
    pub ledger_repo: LedgerRepository,
}

impl TestHelper {
    /// Create a new test helper with a fresh environment
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let account_repo = AccountRepository::new(env.connection.clone());
        let ledger_repo = LedgerRepository::new(env.connection.clone());

        Ok(Self {
            env,
            account_repo,
            ledger_repo,
        })
    }

    /// Create and persist a test account with no loans
    pub fn create_test_account(
        &self,
        account_number: u32,
        name: &str,
        savings_balance: f64,
    ) -> Result<Account> {
        let account = Account {
            account_number,
            name: name.to_string(),
            savings_balance,
            loan_principal_total: 0.0,
            loan_total_with_interest: 0.0,
        };

        let mut accounts = self.account_repo.load_accounts()?;
        accounts.push(account.clone());
        self.account_repo.save_accounts(&accounts)?;
        Ok(account)
    }

    /// Create and persist a test deposit entry
    pub fn create_test_entry(
        &self,
        date: &str,
        account_number: u32,
        amount: f64,
    ) -> Result<LedgerEntry> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
        let entry = LedgerEntry::deposit(date, account_number, amount);

        let mut entries = self.ledger_repo.load_entries()?;
        entries.push(entry.clone());
        self.ledger_repo.save_entries(&entries)?;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }

    #[test]
    fn test_helper_persists_through_repositories() -> Result<()> {
        let helper = TestHelper::new()?;

        let account = helper.create_test_account(2001, "Helper Customer", 400_000.0)?;
        let entry = helper.create_test_entry("2024-03-10", 2001, 125_000.0)?;

        let accounts = helper.account_repo.load_accounts()?;
        assert!(accounts.contains(&account));

        let entries = helper.ledger_repo.load_entries()?;
        assert_eq!(entries, vec![entry]);

        Ok(())
    }
}
