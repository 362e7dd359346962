use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::account::AccountLedger;
use crate::decimal::{Money, Rate};
use crate::rules::RuleTable;
use crate::types::{StatementMonth, Transaction, TxnKind};

/// engine for accruing one calendar month of interest on a ledger
///
/// each day's closing balance earns balance * rate / 100 / 365 under the rule
/// in effect that day; the month total is rounded once, at the end
#[derive(Debug, Clone, Copy, Default)]
pub struct AccrualEngine;

impl AccrualEngine {
    pub fn new() -> Self {
        Self
    }

    /// per-day accrual detail for the month
    pub fn daily_breakdown(
        &self,
        ledger: &AccountLedger,
        rules: &RuleTable,
        month: StatementMonth,
    ) -> Vec<DailyInterest> {
        month
            .days()
            .map(|day| {
                let closing_balance = ledger.balance_as_of(day);
                // days before the first rule accrue nothing
                let annual_rate = rules
                    .rate_effective_on(day)
                    .map(|r| r.rate)
                    .unwrap_or(Rate::ZERO);
                let contribution = closing_balance.as_decimal() * annual_rate.daily_fraction();
                DailyInterest {
                    date: day,
                    closing_balance,
                    annual_rate,
                    contribution,
                }
            })
            .collect()
    }

    /// total interest for the month, rounded half-up to cents exactly once
    pub fn accrue_month(
        &self,
        ledger: &AccountLedger,
        rules: &RuleTable,
        month: StatementMonth,
    ) -> MonthlyInterest {
        let raw: Decimal = self
            .daily_breakdown(ledger, rules, month)
            .iter()
            .map(|d| d.contribution)
            .sum();

        MonthlyInterest {
            month,
            total: Money::from_decimal(raw),
        }
    }
}

/// one day's accrual contribution
#[derive(Debug, Clone, PartialEq)]
pub struct DailyInterest {
    pub date: NaiveDate,
    pub closing_balance: Money,
    pub annual_rate: Rate,
    /// unrounded; rounding happens once on the month total
    pub contribution: Decimal,
}

/// one month's accrued interest
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyInterest {
    pub month: StatementMonth,
    pub total: Money,
}

impl MonthlyInterest {
    /// date the interest posts to the ledger
    pub fn posting_date(&self) -> NaiveDate {
        self.month.last_day()
    }

    /// the synthetic interest transaction for statement display
    pub fn to_transaction(&self) -> Transaction {
        Transaction {
            date: self.posting_date(),
            kind: TxnKind::Interest,
            amount: self.total,
            id: None,
        }
    }
}
