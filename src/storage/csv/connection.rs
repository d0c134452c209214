//! CSV connection management for the bank teller backend.
//!
//! The "connection" is a data directory holding the two table files. This
//! module resolves that directory, creates it on first use, and hands out the
//! per-table repositories.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::storage::traits::Connection;

/// File name of the persisted account table.
pub const ACCOUNT_FILE_NAME: &str = "data_nasabah.csv";
/// File name of the persisted transaction table.
pub const LEDGER_FILE_NAME: &str = "data_transaksi.csv";

/// CsvConnection manages the data directory and the paths of both table files
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory: {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new CSV connection in the default per-user data directory
    /// (`<documents>/Bank Teller`, falling back to the home directory)
    pub fn new_default() -> Result<Self> {
        let documents_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .context("Could not determine a data directory for the current user")?;

        Self::new(documents_dir.join("Bank Teller"))
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the file path of the account table
    pub fn account_file_path(&self) -> PathBuf {
        self.base_directory.join(ACCOUNT_FILE_NAME)
    }

    /// Get the file path of the transaction table
    pub fn ledger_file_path(&self) -> PathBuf {
        self.base_directory.join(LEDGER_FILE_NAME)
    }
}


impl Connection for CsvConnection {
    type AccountRepository = super::account_repository::AccountRepository;
    type LedgerRepository = super::ledger_repository::LedgerRepository;

    fn create_account_repository(&self) -> Self::AccountRepository {
        super::account_repository::AccountRepository::new(self.clone())
    }

    fn create_ledger_repository(&self) -> Self::LedgerRepository {
        super::ledger_repository::LedgerRepository::new(self.clone())
    }
}
