//! Domain-level command and result types.
//!
//! These structs are the inputs and outputs of teller operations. Mutating
//! operations take a command struct and return a result struct carrying the
//! updated account snapshot plus a human-readable success message for the
//! operator screen; reporting queries take plain arguments and return plain
//! model sequences.

pub mod accounts {
    use chrono::NaiveDate;

    use crate::domain::models::account::Account;

    /// Input for opening a new account with its initial deposit.
    #[derive(Debug, Clone)]
    pub struct RegisterAccountCommand {
        pub name: String,
        pub initial_deposit: f64,
        pub date: NaiveDate,
    }

    /// Result of registering an account.
    #[derive(Debug, Clone)]
    pub struct RegisterAccountResult {
        pub account_number: u32,
        pub account: Account,
        pub success_message: String,
    }
}

pub mod teller {
    use chrono::NaiveDate;

    use crate::domain::models::account::Account;

    /// Input for adding money to an account's savings.
    #[derive(Debug, Clone)]
    pub struct DepositCommand {
        pub account_number: u32,
        pub amount: f64,
        pub date: NaiveDate,
    }

    /// Result of a deposit.
    #[derive(Debug, Clone)]
    pub struct DepositResult {
        pub account: Account,
        pub success_message: String,
    }

    /// Input for taking money out of an account's savings.
    #[derive(Debug, Clone)]
    pub struct WithdrawCommand {
        pub account_number: u32,
        pub amount: f64,
        pub date: NaiveDate,
    }

    /// Result of a withdrawal.
    #[derive(Debug, Clone)]
    pub struct WithdrawResult {
        pub account: Account,
        pub success_message: String,
    }

    /// Input for disbursing a loan at a percentage interest rate.
    #[derive(Debug, Clone)]
    pub struct LoanCommand {
        pub account_number: u32,
        pub principal: f64,
        pub interest_rate_percent: f64,
        pub date: NaiveDate,
    }

    /// Result of recording a loan.
    #[derive(Debug, Clone)]
    pub struct LoanResult {
        pub account: Account,
        /// Principal plus computed interest, the full repayment obligation.
        pub total_due: f64,
        pub success_message: String,
    }
}
