//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;

use crate::domain::models::account::Account;
use crate::domain::models::transaction::LedgerEntry;

/// Trait defining the interface for account table storage
///
/// Both tables travel as whole units: the domain layer loads everything at
/// construction and rewrites everything after each mutation, so the interface
/// is a load/save pair rather than row-level CRUD.
pub trait AccountStorage: Send + Sync {
    /// Load every account row, bootstrapping the file if it does not exist
    fn load_accounts(&self) -> Result<Vec<Account>>;

    /// Rewrite the whole account table
    fn save_accounts(&self, accounts: &[Account]) -> Result<()>;
}

/// Trait defining the interface for ledger table storage
pub trait LedgerStorage: Send + Sync {
    /// Load every ledger row, bootstrapping an empty file if it does not exist
    fn load_entries(&self) -> Result<Vec<LedgerEntry>>;

    /// Rewrite the whole ledger table
    fn save_entries(&self, entries: &[LedgerEntry]) -> Result<()>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type (directory of CSV
/// files, a database, etc.) and provides factory methods for creating the two
/// table repositories, so the teller service can work with any backend
/// without knowing the implementation details.
pub trait Connection: Send + Sync + Clone {
    /// The type of AccountStorage this connection creates
    type AccountRepository: AccountStorage;

    /// The type of LedgerStorage this connection creates
    type LedgerRepository: LedgerStorage;

    /// Create a new account repository for this connection
    fn create_account_repository(&self) -> Self::AccountRepository;

    /// Create a new ledger repository for this connection
    fn create_ledger_repository(&self) -> Self::LedgerRepository;
}
