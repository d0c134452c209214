//! # Storage Module
//!
//! Handles all data persistence for the bank teller.
//!
//! This module abstracts away the specific storage implementation and provides
//! a consistent interface for persisting and retrieving data. The implementation
//! can be swapped out (CSV files, SQLite, cloud storage, etc.) without affecting
//! the domain logic.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: Saving accounts and ledger entries to disk
//! - **Data Retrieval**: Loading stored data back into memory
//! - **Storage Abstraction**: Providing a consistent API regardless of backend
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: Two CSV files rewritten in full on every save
//! - **Future Flexibility**: Designed to support multiple storage backends

pub mod csv;
pub mod traits;

// Re-export the main types that other modules need
pub use traits::{AccountStorage, Connection, LedgerStorage};
