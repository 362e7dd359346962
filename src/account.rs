use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::types::{AccountId, StatementMonth, Transaction, TxnId, TxnKind};

/// per-account ledger: transactions ordered by date, then entry sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountLedger {
    id: AccountId,
    transactions: Vec<Transaction>,
}

impl AccountLedger {
    pub fn new(id: impl Into<AccountId>) -> Self {
        Self {
            id: id.into(),
            transactions: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// date of the most recent entry
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.transactions.last().map(|t| t.date)
    }

    /// record a deposit or withdrawal; the ledger is left untouched on error
    pub fn record(&mut self, date: NaiveDate, kind: TxnKind, amount: Money) -> Result<&Transaction> {
        if kind == TxnKind::Interest {
            return Err(LedgerError::DirectInterestEntry);
        }
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount { amount });
        }
        if let Some(last) = self.last_date() {
            // entry dates must be non-decreasing per account
            if date < last {
                return Err(LedgerError::OutOfOrderDate { last, requested: date });
            }
        }
        if kind == TxnKind::Withdrawal {
            let balance = self.balance();
            if balance - amount < Money::ZERO {
                return Err(LedgerError::InsufficientFunds { balance, requested: amount });
            }
        }

        let id = TxnId { date, seq: self.next_seq(date) };
        self.transactions.push(Transaction {
            date,
            kind,
            amount,
            id: Some(id),
        });
        Ok(&self.transactions[self.transactions.len() - 1])
    }

    /// append a synthesized interest posting, keeping the list date-ordered
    pub(crate) fn post_interest(&mut self, date: NaiveDate, amount: Money) -> &Transaction {
        let pos = self.transactions.partition_point(|t| t.date <= date);
        self.transactions.insert(
            pos,
            Transaction {
                date,
                kind: TxnKind::Interest,
                amount,
                id: None,
            },
        );
        &self.transactions[pos]
    }

    /// balance at the end of the given date
    pub fn balance_as_of(&self, date: NaiveDate) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.date <= date)
            .fold(Money::ZERO, |acc, t| acc + t.signed_amount())
    }

    /// balance at the chronological end of the ledger
    pub fn balance(&self) -> Money {
        self.transactions
            .iter()
            .fold(Money::ZERO, |acc, t| acc + t.signed_amount())
    }

    /// chronological transactions with start <= date <= end
    pub fn transactions_in(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(move |t| t.date >= start && t.date <= end)
    }

    /// whether interest has already been posted for the given month
    pub fn has_interest_for(&self, month: StatementMonth) -> bool {
        self.transactions
            .iter()
            .any(|t| t.kind == TxnKind::Interest && month.contains(t.date))
    }

    fn next_seq(&self, date: NaiveDate) -> u32 {
        let prior = self
            .transactions
            .iter()
            .filter(|t| t.date == date && t.id.is_some())
            .count() as u32;
        prior + 1
    }
}
