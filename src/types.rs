use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};

/// account identifier as supplied by the client
pub type AccountId = String;

/// ledger entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxnKind {
    Deposit,
    Withdrawal,
    /// synthesized at statement time, never entered directly
    Interest,
}

impl TxnKind {
    /// single-letter code used in statements
    pub fn code(&self) -> char {
        match self {
            TxnKind::Deposit => 'D',
            TxnKind::Withdrawal => 'W',
            TxnKind::Interest => 'I',
        }
    }

    /// parse the code used by transaction entry; interest is not accepted
    /// here since it is only ever synthesized at statement time
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'D' => Some(TxnKind::Deposit),
            'W' => Some(TxnKind::Withdrawal),
            _ => None,
        }
    }
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            TxnKind::Deposit => "D",
            TxnKind::Withdrawal => "W",
            TxnKind::Interest => "I",
        })
    }
}

/// transaction identifier: date plus 1-based sequence within that date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TxnId {
    pub date: NaiveDate,
    pub seq: u32,
}

impl fmt::Display for TxnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = format!("{}-{:02}", self.date.format("%Y%m%d"), self.seq);
        f.pad(&rendered)
    }
}

/// one ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub kind: TxnKind,
    pub amount: Money,
    /// present for deposits and withdrawals, absent for interest postings
    pub id: Option<TxnId>,
}

impl Transaction {
    /// amount with the sign it contributes to the balance
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TxnKind::Deposit | TxnKind::Interest => self.amount,
            TxnKind::Withdrawal => -self.amount,
        }
    }
}

/// a validated calendar month for statement generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatementMonth {
    year: i32,
    month: u32,
}

impl StatementMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(LedgerError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // month was validated in the constructor
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.days_in_month())
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if is_leap_year(self.year) {
                    29
                } else {
                    28
                }
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// iterate every calendar day of the month
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first_day().iter_days().take(self.days_in_month() as usize)
    }
}

impl fmt::Display for StatementMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

/// check if year is a leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
