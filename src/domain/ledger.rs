//! In-memory transaction ledger.
//!
//! Pure table logic over the loaded ledger rows: append plus the per-account
//! reporting queries (history and monthly activity). Entries are append-only;
//! rows are never rewritten or removed once recorded.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::domain::models::transaction::{LedgerEntry, MonthlyActivity};

/// The in-memory transaction table, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new(entries: Vec<LedgerEntry>) -> Self {
        Self { entries }
    }

    /// All rows, in recorded order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Record a new entry at the end of the table.
    pub fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Every entry recorded for the account, newest first. Rows whose stored
    /// date failed to parse sort after all dated rows.
    pub fn history(&self, account_number: u32) -> Vec<LedgerEntry> {
        let mut history: Vec<LedgerEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.account_number == account_number)
            .cloned()
            .collect();
        history.sort_by(|a, b| b.date.cmp(&a.date));
        history
    }

    /// Entry counts per calendar month for the account, oldest month first.
    /// Rows with a null date are left out of the aggregation entirely.
    pub fn monthly_summary(&self, account_number: u32) -> Vec<MonthlyActivity> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for entry in &self.entries {
            if entry.account_number != account_number {
                continue;
            }
            if let Some(date) = entry.date {
                let month = format!("{:04}-{:02}", date.year(), date.month());
                *counts.entry(month).or_insert(0) += 1;
            }
        }
        counts
            .into_iter()
            .map(|(month, transaction_count)| MonthlyActivity {
                month,
                transaction_count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new(Vec::new());
        ledger.append(LedgerEntry::deposit(date("2024-01-05"), 1001, 100_000.0));
        ledger.append(LedgerEntry::withdrawal(date("2024-02-10"), 1001, 50_000.0));
        ledger.append(LedgerEntry::deposit(date("2024-01-25"), 1001, 200_000.0));
        ledger.append(LedgerEntry::deposit(date("2024-01-15"), 1002, 75_000.0));
        ledger
    }

    #[test]
    fn test_history_is_filtered_and_newest_first() {
        let ledger = sample_ledger();

        let history = ledger.history(1001);
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].date, Some(date("2024-02-10")));
        assert_eq!(history[1].date, Some(date("2024-01-25")));
        assert_eq!(history[2].date, Some(date("2024-01-05")));

        assert_eq!(ledger.history(1002).len(), 1);
        assert!(ledger.history(9999).is_empty());
    }

    #[test]
    fn test_history_puts_null_dates_last() {
        let mut ledger = sample_ledger();
        let mut undated = LedgerEntry::deposit(date("2024-03-01"), 1001, 10_000.0);
        undated.date = None;
        ledger.append(undated);

        let history = ledger.history(1001);
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].date, Some(date("2024-02-10")));
        assert_eq!(history[3].date, None);
    }

    #[test]
    fn test_monthly_summary_groups_by_calendar_month() {
        let ledger = sample_ledger();

        let summary = ledger.monthly_summary(1001);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].month, "2024-01");
        assert_eq!(summary[0].transaction_count, 2);
        assert_eq!(summary[1].month, "2024-02");
        assert_eq!(summary[1].transaction_count, 1);
    }

    #[test]
    fn test_monthly_summary_skips_null_dates() {
        let mut ledger = sample_ledger();
        let mut undated = LedgerEntry::deposit(date("2024-03-01"), 1001, 10_000.0);
        undated.date = None;
        ledger.append(undated);

        let summary = ledger.monthly_summary(1001);
        let total: usize = summary.iter().map(|row| row.transaction_count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_monthly_summary_orders_across_years() {
        let mut ledger = Ledger::new(Vec::new());
        ledger.append(LedgerEntry::deposit(date("2024-01-10"), 1001, 1_000.0));
        ledger.append(LedgerEntry::deposit(date("2023-12-28"), 1001, 1_000.0));

        let summary = ledger.monthly_summary(1001);
        assert_eq!(summary[0].month, "2023-12");
        assert_eq!(summary[1].month, "2024-01");
    }

    #[test]
    fn test_monthly_summary_empty_without_history() {
        let ledger = Ledger::new(Vec::new());
        assert!(ledger.monthly_summary(1001).is_empty());
    }
}
