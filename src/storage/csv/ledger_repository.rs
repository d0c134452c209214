use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{Reader, Writer};
use log::{debug, info, warn};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::{LedgerEntry, TransactionKind};
use crate::storage::LedgerStorage;

/// Column order of the ledger file
const LEDGER_HEADERS: [&str; 7] = [
    "Tanggal",
    "Rekening",
    "Jenis",
    "Nominal",
    "Bunga_Pinjaman_%",
    "Kredit",
    "Debit",
];

/// CSV-based ledger repository
#[derive(Clone)]
pub struct LedgerRepository {
    connection: CsvConnection,
}

impl LedgerRepository {
    /// Create a new CSV ledger repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Parse a date cell, treating blanks and unparseable values as the null date
    fn parse_date_cell(&self, value: &str) -> Option<NaiveDate> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }

        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                warn!(
                    "Failed to parse ledger date '{}', keeping the entry without a date",
                    trimmed
                );
                None
            }
        }
    }

    /// Read all entries from the ledger CSV file
    fn read_entries(&self) -> Result<Vec<LedgerEntry>> {
        let file_path = self.connection.ledger_file_path();

        let file = File::open(&file_path)
            .with_context(|| format!("Failed to open ledger file {:?}", file_path))?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut entries = Vec::new();

        for result in csv_reader.records() {
            let record = result?;

            // A kind nothing in the teller understands would corrupt every
            // balance derived from it, so it fails the whole load.
            let kind_value = record.get(2).unwrap_or("");
            let kind = TransactionKind::parse(kind_value).with_context(|| {
                format!("Unknown transaction kind in ledger file: '{}'", kind_value)
            })?;

            let entry = LedgerEntry {
                date: self.parse_date_cell(record.get(0).unwrap_or("")),
                account_number: record.get(1).unwrap_or("0").parse::<u32>().unwrap_or(0),
                kind,
                amount: record.get(3).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                interest_rate_percent: record.get(4).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                credit: record.get(5).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                debit: record.get(6).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
            };

            entries.push(entry);
        }

        debug!("Read {} ledger entries from {:?}", entries.len(), file_path);
        Ok(entries)
    }

    /// Write all entries to the ledger CSV file
    fn write_entries(&self, entries: &[LedgerEntry]) -> Result<()> {
        let file_path = self.connection.ledger_file_path();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .with_context(|| format!("Failed to open ledger file {:?} for writing", file_path))?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        // Write header
        csv_writer.write_record(&LEDGER_HEADERS)?;

        // Write entries
        for entry in entries {
            let date_cell = entry
                .date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default();

            csv_writer.write_record(&[
                &date_cell,
                &entry.account_number.to_string(),
                &entry.kind.as_str().to_string(),
                &entry.amount.to_string(),
                &entry.interest_rate_percent.to_string(),
                &entry.credit.to_string(),
                &entry.debit.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl LedgerStorage for LedgerRepository {
    fn load_entries(&self) -> Result<Vec<LedgerEntry>> {
        let file_path = self.connection.ledger_file_path();

        if !file_path.exists() {
            info!("Ledger file not found, creating an empty one: {:?}", file_path);
            self.write_entries(&[])?;
            return Ok(Vec::new());
        }

        self.read_entries()
    }

    fn save_entries(&self, entries: &[LedgerEntry]) -> Result<()> {
        self.write_entries(entries)
    }
}
