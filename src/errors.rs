use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("amount must be greater than zero: {amount}")]
    InvalidAmount {
        amount: Money,
    },

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        balance: Money,
        requested: Money,
    },

    #[error("interest rate must be greater than 0 and less than 100: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("invalid statement month: {year}-{month}")]
    InvalidMonth {
        year: i32,
        month: u32,
    },

    #[error("transaction date {requested} precedes last recorded date {last}")]
    OutOfOrderDate {
        last: NaiveDate,
        requested: NaiveDate,
    },

    #[error("account {account} does not exist")]
    UnknownAccount {
        account: String,
    },

    #[error("interest transactions cannot be entered directly")]
    DirectInterestEntry,
}

pub type Result<T> = std::result::Result<T, LedgerError>;
