//! Domain models for ledger entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of ledger entry a teller operation produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "initial deposit")]
    InitialDeposit,
    #[serde(rename = "deposit")]
    Deposit,
    #[serde(rename = "withdrawal")]
    Withdrawal,
    #[serde(rename = "loan")]
    Loan,
}

impl TransactionKind {
    /// String form stored in the `Jenis` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::InitialDeposit => "initial deposit",
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Loan => "loan",
        }
    }

    /// Parse the stored string form back into a kind.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "initial deposit" => Some(TransactionKind::InitialDeposit),
            "deposit" => Some(TransactionKind::Deposit),
            "withdrawal" => Some(TransactionKind::Withdrawal),
            "loan" => Some(TransactionKind::Loan),
            _ => None,
        }
    }
}

/// A single row of the transaction ledger.
///
/// `date` is `None` when the stored `Tanggal` cell failed to parse; such rows
/// are kept rather than rejected. They sort after dated rows in history and
/// are skipped by the monthly summary.
///
/// The `credit`/`debit` columns follow the legacy table convention: deposits
/// book the amount under `debit`, withdrawals and loans under `credit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: Option<NaiveDate>,
    pub account_number: u32,
    pub kind: TransactionKind,
    pub amount: f64,
    pub interest_rate_percent: f64,
    pub credit: f64,
    pub debit: f64,
}

impl LedgerEntry {
    /// Entry for the opening deposit recorded at registration.
    pub fn initial_deposit(date: NaiveDate, account_number: u32, amount: f64) -> Self {
        Self::deposit_row(TransactionKind::InitialDeposit, date, account_number, amount)
    }

    /// Entry for a regular savings deposit.
    pub fn deposit(date: NaiveDate, account_number: u32, amount: f64) -> Self {
        Self::deposit_row(TransactionKind::Deposit, date, account_number, amount)
    }

    /// Entry for a savings withdrawal; the amount is booked under `credit`.
    pub fn withdrawal(date: NaiveDate, account_number: u32, amount: f64) -> Self {
        Self {
            date: Some(date),
            account_number,
            kind: TransactionKind::Withdrawal,
            amount,
            interest_rate_percent: 0.0,
            credit: amount,
            debit: 0.0,
        }
    }

    /// Entry for a loan disbursement; the principal is booked under `credit`.
    pub fn loan(
        date: NaiveDate,
        account_number: u32,
        principal: f64,
        interest_rate_percent: f64,
    ) -> Self {
        Self {
            date: Some(date),
            account_number,
            kind: TransactionKind::Loan,
            amount: principal,
            interest_rate_percent,
            credit: principal,
            debit: 0.0,
        }
    }

    /// Deposits book the amount under `debit`.
    fn deposit_row(kind: TransactionKind, date: NaiveDate, account_number: u32, amount: f64) -> Self {
        Self {
            date: Some(date),
            account_number,
            kind,
            amount,
            interest_rate_percent: 0.0,
            credit: 0.0,
            debit: amount,
        }
    }
}

/// Number of ledger entries an account produced in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    /// Year and month in "YYYY-MM" form.
    pub month: String,
    pub transaction_count: usize,
}
