//! Domain models for the bank teller backend.

pub mod account;
pub mod transaction;

pub use account::Account;
pub use transaction::{LedgerEntry, MonthlyActivity, TransactionKind};
