use anyhow::{Context, Result};
use csv::{Reader, Writer};
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::Account;
use crate::storage::AccountStorage;

/// Column order of the account file
const ACCOUNT_HEADERS: [&str; 5] = [
    "Rekening",
    "Nama",
    "Saldo_Tabungan",
    "Total_Pinjaman_Pokok",
    "Total_Pinjaman_Bunga",
];

/// CSV-based account repository
#[derive(Clone)]
pub struct AccountRepository {
    connection: CsvConnection,
}

impl AccountRepository {
    /// Create a new CSV account repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Demo accounts seeded the first time the account file is created
    fn starter_accounts() -> Vec<Account> {
        vec![
            Account {
                account_number: 1001,
                name: "Budi Santoso".to_string(),
                savings_balance: 1_500_000.0,
                loan_principal_total: 0.0,
                loan_total_with_interest: 0.0,
            },
            Account {
                account_number: 1002,
                name: "Citra Dewi".to_string(),
                savings_balance: 2_000_000.0,
                loan_principal_total: 1_000_000.0,
                loan_total_with_interest: 1_050_000.0,
            },
            Account {
                account_number: 1003,
                name: "Ahmad Jaya".to_string(),
                savings_balance: 500_000.0,
                loan_principal_total: 0.0,
                loan_total_with_interest: 0.0,
            },
        ]
    }

    /// Read all accounts from the account CSV file
    fn read_accounts(&self) -> Result<Vec<Account>> {
        let file_path = self.connection.account_file_path();

        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open account file {:?}", file_path))?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut accounts = Vec::new();

        for result in csv_reader.records() {
            let record = result?;

            // Parse CSV record into Account
            let account = Account {
                account_number: record.get(0).unwrap_or("0").parse::<u32>().unwrap_or(0),
                name: record.get(1).unwrap_or("").to_string(),
                savings_balance: record.get(2).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                loan_principal_total: record.get(3).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                loan_total_with_interest: record.get(4).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
            };

            accounts.push(account);
        }

        debug!("Read {} accounts from {:?}", accounts.len(), file_path);
        Ok(accounts)
    }

    /// Write all accounts to the account CSV file
    fn write_accounts(&self, accounts: &[Account]) -> Result<()> {
        let file_path = self.connection.account_file_path();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open account file {:?} for writing", file_path))?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(&ACCOUNT_HEADERS)?;

        // Write accounts
        for account in accounts {
            csv_writer.write_record(&[
                &account.account_number.to_string(),
                &account.name,
                &account.savings_balance.to_string(),
                &account.loan_principal_total.to_string(),
                &account.loan_total_with_interest.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl AccountStorage for AccountRepository {
    fn load_accounts(&self) -> Result<Vec<Account>> {
        let file_path = self.connection.account_file_path();

        if !file_path.exists() {
            info!("Account file not found, seeding starter accounts: {:?}", file_path);
            let accounts = Self::starter_accounts();
            self.write_accounts(&accounts)?;
            return Ok(accounts);
        }

        self.read_accounts()
    }

    fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        self.write_accounts(accounts)
    }
}
