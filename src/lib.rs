//! # Bank Teller Backend
//!
//! This crate implements the backend of a teaching-grade bank teller
//! simulator: a customer account store plus an append-only transaction
//! ledger, both persisted as CSV files in a per-user data directory.
//! The backend:
//! - Uses synchronous operations (no async/await)
//! - Loads both tables into memory once and writes them through on mutation
//! - Provides direct access to the teller service for a desktop or CLI shell

pub mod domain;
pub mod storage;

// Re-export commonly used types
pub use domain::error::{Result, TellerError};
pub use domain::models::account::Account;
pub use domain::models::transaction::{LedgerEntry, MonthlyActivity, TransactionKind};
pub use domain::teller_service::TellerService;
pub use storage::csv::CsvConnection;
