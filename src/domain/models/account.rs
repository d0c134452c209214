//! Domain model for a customer account.

use serde::{Deserialize, Serialize};

/// Account number handed to the very first customer when the store is empty.
pub const FIRST_ACCOUNT_NUMBER: u32 = 1001;

/// Domain model representing a customer account held at the teller desk.
/// Balances are whole-rupiah amounts carried as floats; loan interest is the
/// only operation that can introduce a fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_number: u32,
    pub name: String,
    pub savings_balance: f64,
    /// Sum of every loan principal ever disbursed. Only increases.
    pub loan_principal_total: f64,
    /// Sum of every (principal + interest) obligation. Only increases.
    pub loan_total_with_interest: f64,
}

impl Account {
    /// Create a freshly registered account holding only its opening deposit.
    pub fn open(account_number: u32, name: String, initial_deposit: f64) -> Self {
        Self {
            account_number,
            name,
            savings_balance: initial_deposit,
            loan_principal_total: 0.0,
            loan_total_with_interest: 0.0,
        }
    }
}
