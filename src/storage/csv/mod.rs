//! # CSV Storage Module
//!
//! This module provides the CSV-based storage implementation for the bank
//! teller. Both data files live side by side in the data directory and are
//! rewritten in full on every save.
//!
//! ## File Format
//!
//! The account file (`data_nasabah.csv`):
//! ```csv
//! Rekening,Nama,Saldo_Tabungan,Total_Pinjaman_Pokok,Total_Pinjaman_Bunga
//! 1001,Budi Santoso,1500000,0,0
//! ```
//!
//! The ledger file (`data_transaksi.csv`):
//! ```csv
//! Tanggal,Rekening,Jenis,Nominal,Bunga_Pinjaman_%,Kredit,Debit
//! 2024-01-15,1001,deposit,250000,0,0,250000
//! ```

pub mod connection;
pub mod account_repository;
pub mod ledger_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use account_repository::AccountRepository;
pub use ledger_repository::LedgerRepository;
