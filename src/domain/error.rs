//! Error taxonomy for teller operations.
//!
//! Every variant except `Storage` is a recoverable rejection: the operator
//! corrects the input and retries. `Storage` wraps a table-file failure and
//! terminates the current request.

use thiserror::Error;

/// Result alias used throughout the domain layer.
pub type Result<T> = std::result::Result<T, TellerError>;

#[derive(Debug, Error)]
pub enum TellerError {
    /// A teller operation was handed a non-positive nominal amount.
    #[error("Nominal amount must be greater than Rp 0")]
    InvalidAmount,
    /// Withdrawal larger than the account's savings balance.
    #[error("Savings balance is not sufficient for this withdrawal")]
    InsufficientFunds,
    /// Account-number lookup missed.
    #[error("Account {0} is not registered")]
    AccountNotFound(u32),
    /// Registration with a blank customer name.
    #[error("Customer name cannot be empty")]
    EmptyName,
    /// Registration with an opening deposit below the minimum.
    #[error("Initial deposit must be at least Rp 100.000")]
    InitialDepositTooSmall,
    /// A table file could not be read or written.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
