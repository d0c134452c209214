//! # Domain Module
//!
//! Contains all business logic for the bank teller backend.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how accounts and their transactions are modeled and managed.
//! It operates independently of any specific UI or storage mechanism.
//!
//! ## Module Organization
//!
//! - **teller_service**: The teller operations over both in-memory tables
//! - **account_book**: In-memory account table with search and number allocation
//! - **ledger**: In-memory transaction table with the reporting queries
//! - **currency**: Rupiah string parsing and formatting helpers
//! - **commands**: Command and result types for the teller operations
//!
//! ## Business Rules
//!
//! - Account numbers are sequential, starting at 1001
//! - Every mutation appends exactly one ledger entry
//! - Withdrawals are checked against the stored savings balance
//! - Loan interest is simple percentage interest on the principal
//!
//! ## Design Principles
//!
//! - **Single Responsibility**: Each service has a focused purpose
//! - **Testability**: Pure functions and clear interfaces for easy testing
//! - **Storage Agnostic**: Works with any storage implementation

pub mod account_book;
pub mod commands;
pub mod currency;
pub mod error;
pub mod ledger;
pub mod models;
pub mod teller_service;

pub use account_book::*;
pub use commands::*;
pub use currency::*;
pub use error::*;
pub use ledger::*;
pub use teller_service::*;
