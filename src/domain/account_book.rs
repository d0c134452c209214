//! In-memory account table.
//!
//! Pure table logic over the loaded account rows. File mechanics live in the
//! storage layer; write-through timing is the teller service's concern.

use crate::domain::models::account::{Account, FIRST_ACCOUNT_NUMBER};

/// The in-memory account table: every registered account, loaded once at
/// startup and mutated in place by teller operations.
#[derive(Debug, Clone)]
pub struct AccountBook {
    accounts: Vec<Account>,
}

impl AccountBook {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    /// All rows, in stored order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Search by account number (numeric terms, exact match) or by name
    /// (case-insensitive substring). An empty term matches nothing rather
    /// than everything.
    pub fn search(&self, term: &str) -> Vec<Account> {
        if term.is_empty() {
            return Vec::new();
        }
        if let Ok(number) = term.parse::<u32>() {
            return self
                .accounts
                .iter()
                .filter(|account| account.account_number == number)
                .cloned()
                .collect();
        }
        let needle = term.to_lowercase();
        self.accounts
            .iter()
            .filter(|account| account.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Exact lookup.
    pub fn get(&self, account_number: u32) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number == account_number)
    }

    /// Exact lookup for mutation.
    pub fn get_mut(&mut self, account_number: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.account_number == account_number)
    }

    /// Next sequential account number: one past the highest in the table, or
    /// the fixed starting number for an empty table.
    pub fn next_account_number(&self) -> u32 {
        self.accounts
            .iter()
            .map(|account| account.account_number)
            .max()
            .map(|highest| highest + 1)
            .unwrap_or(FIRST_ACCOUNT_NUMBER)
    }

    /// Append a newly registered account.
    pub fn insert(&mut self, account: Account) {
        self.accounts.push(account);
    }
}
