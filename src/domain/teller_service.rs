//! # Teller Service
//!
//! The single entry point for teller operations. The service owns the two
//! in-memory tables (account book and ledger) plus the repositories that
//! persist them, validates operator input at the boundary, and rewrites both
//! table files after every successful mutation.

use std::sync::Arc;

use log::{info, warn};

use crate::domain::account_book::AccountBook;
use crate::domain::commands::accounts::{RegisterAccountCommand, RegisterAccountResult};
use crate::domain::commands::teller::{
    DepositCommand, DepositResult, LoanCommand, LoanResult, WithdrawCommand, WithdrawResult,
};
use crate::domain::currency::format_rupiah;
use crate::domain::error::{Result, TellerError};
use crate::domain::ledger::Ledger;
use crate::domain::models::account::Account;
use crate::domain::models::transaction::{LedgerEntry, MonthlyActivity};
use crate::storage::traits::{AccountStorage, Connection, LedgerStorage};

/// Smallest opening deposit accepted at registration.
pub const MIN_INITIAL_DEPOSIT: f64 = 100_000.0;

/// Service coordinating every teller operation.
///
/// Both tables are loaded once at construction and held in memory for the
/// life of the session. Reads are pure in-memory queries; every mutation is
/// written through to disk before it returns.
pub struct TellerService<C: Connection> {
    account_repository: C::AccountRepository,
    ledger_repository: C::LedgerRepository,
    account_book: AccountBook,
    ledger: Ledger,
}

impl<C: Connection> TellerService<C> {
    /// Create a new teller service, loading both tables through the connection
    pub fn new(connection: Arc<C>) -> Result<Self> {
        let account_repository = connection.create_account_repository();
        let ledger_repository = connection.create_ledger_repository();

        let account_book = AccountBook::new(account_repository.load_accounts()?);
        let ledger = Ledger::new(ledger_repository.load_entries()?);

        info!(
            "Teller service ready: {} accounts, {} ledger entries",
            account_book.accounts().len(),
            ledger.entries().len()
        );

        Ok(Self {
            account_repository,
            ledger_repository,
            account_book,
            ledger,
        })
    }

    /// All registered accounts, in stored order
    pub fn accounts(&self) -> &[Account] {
        self.account_book.accounts()
    }

    /// Search accounts by number (exact) or by name fragment (case-insensitive)
    pub fn search_accounts(&self, term: &str) -> Vec<Account> {
        self.account_book.search(term)
    }

    /// Look up a single account
    pub fn get_account(&self, account_number: u32) -> Result<Account> {
        self.account_book
            .get(account_number)
            .cloned()
            .ok_or(TellerError::AccountNotFound(account_number))
    }

    /// Register a new account with its opening deposit
    pub fn register_account(
        &mut self,
        command: RegisterAccountCommand,
    ) -> Result<RegisterAccountResult> {
        info!("Registering account for '{}'", command.name);

        self.validate_register_command(&command)?;

        let account_number = self.account_book.next_account_number();
        let account = Account::open(
            account_number,
            command.name.trim().to_string(),
            command.initial_deposit,
        );

        self.account_book.insert(account.clone());
        self.ledger.append(LedgerEntry::initial_deposit(
            command.date,
            account_number,
            command.initial_deposit,
        ));
        self.persist()?;

        info!("Registered account {} for '{}'", account_number, account.name);

        let success_message = format!(
            "Account {} registered for {}",
            account_number, account.name
        );
        Ok(RegisterAccountResult {
            account_number,
            account,
            success_message,
        })
    }

    /// Add money to an account's savings
    pub fn deposit(&mut self, command: DepositCommand) -> Result<DepositResult> {
        info!(
            "Deposit of {} to account {}",
            command.amount, command.account_number
        );

        if command.amount <= 0.0 {
            warn!(
                "Rejected deposit of {} to account {}",
                command.amount, command.account_number
            );
            return Err(TellerError::InvalidAmount);
        }

        let account = self
            .account_book
            .get_mut(command.account_number)
            .ok_or(TellerError::AccountNotFound(command.account_number))?;
        account.savings_balance += command.amount;
        let account = account.clone();

        self.ledger.append(LedgerEntry::deposit(
            command.date,
            command.account_number,
            command.amount,
        ));
        self.persist()?;

        info!(
            "New balance of account {}: {}",
            account.account_number, account.savings_balance
        );

        Ok(DepositResult {
            account,
            success_message: "Deposit recorded successfully".to_string(),
        })
    }

    /// Take money out of an account's savings.
    ///
    /// The balance check runs against the stored account row, never against a
    /// figure supplied by the caller.
    pub fn withdraw(&mut self, command: WithdrawCommand) -> Result<WithdrawResult> {
        info!(
            "Withdrawal of {} from account {}",
            command.amount, command.account_number
        );

        if command.amount <= 0.0 {
            warn!(
                "Rejected withdrawal of {} from account {}",
                command.amount, command.account_number
            );
            return Err(TellerError::InvalidAmount);
        }

        let account = self
            .account_book
            .get_mut(command.account_number)
            .ok_or(TellerError::AccountNotFound(command.account_number))?;

        if command.amount > account.savings_balance {
            warn!(
                "Rejected withdrawal of {} from account {}: balance is {}",
                command.amount, command.account_number, account.savings_balance
            );
            return Err(TellerError::InsufficientFunds);
        }

        account.savings_balance -= command.amount;
        let account = account.clone();

        self.ledger.append(LedgerEntry::withdrawal(
            command.date,
            command.account_number,
            command.amount,
        ));
        self.persist()?;

        info!(
            "New balance of account {}: {}",
            account.account_number, account.savings_balance
        );

        Ok(WithdrawResult {
            account,
            success_message: "Withdrawal recorded successfully".to_string(),
        })
    }

    /// Disburse a loan and record the repayment obligation
    pub fn loan(&mut self, command: LoanCommand) -> Result<LoanResult> {
        info!(
            "Loan of {} at {}% for account {}",
            command.principal, command.interest_rate_percent, command.account_number
        );

        if command.principal <= 0.0 {
            warn!(
                "Rejected loan of {} for account {}",
                command.principal, command.account_number
            );
            return Err(TellerError::InvalidAmount);
        }

        let total_due =
            command.principal + command.principal * command.interest_rate_percent / 100.0;

        let account = self
            .account_book
            .get_mut(command.account_number)
            .ok_or(TellerError::AccountNotFound(command.account_number))?;
        account.loan_principal_total += command.principal;
        account.loan_total_with_interest += total_due;
        let account = account.clone();

        self.ledger.append(LedgerEntry::loan(
            command.date,
            command.account_number,
            command.principal,
            command.interest_rate_percent,
        ));
        self.persist()?;

        info!(
            "Recorded loan for account {}: total due {}",
            account.account_number, total_due
        );

        let success_message = format!(
            "Loan recorded (total repayment: {})",
            format_rupiah(total_due)
        );
        Ok(LoanResult {
            account,
            total_due,
            success_message,
        })
    }

    /// Every ledger entry for the account, newest first
    pub fn history(&self, account_number: u32) -> Vec<LedgerEntry> {
        self.ledger.history(account_number)
    }

    /// Ledger entry counts per calendar month for the account, oldest first
    pub fn monthly_summary(&self, account_number: u32) -> Vec<MonthlyActivity> {
        self.ledger.monthly_summary(account_number)
    }

    /// Validate a registration command
    fn validate_register_command(&self, command: &RegisterAccountCommand) -> Result<()> {
        if command.name.trim().is_empty() {
            warn!("Rejected registration with an empty customer name");
            return Err(TellerError::EmptyName);
        }

        if command.initial_deposit < MIN_INITIAL_DEPOSIT {
            warn!(
                "Rejected registration for '{}': opening deposit {} is below the minimum",
                command.name, command.initial_deposit
            );
            return Err(TellerError::InitialDepositTooSmall);
        }

        Ok(())
    }

    /// Rewrite both table files from the in-memory state.
    ///
    /// Runs after the in-memory mutation; a failure leaves memory ahead of
    /// the files until the next successful save.
    fn persist(&self) -> Result<()> {
        self.account_repository
            .save_accounts(self.account_book.accounts())?;
        self.ledger_repository.save_entries(self.ledger.entries())?;
        Ok(())
    }
}
