use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::account::AccountLedger;
use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::interest::AccrualEngine;
use crate::rules::{InterestRule, RuleTable};
use crate::statement::{Statement, StatementLine};
use crate::types::{AccountId, StatementMonth, TxnKind};

/// owns every account ledger and the shared interest rule table
///
/// registries are independent values with no ambient state; tests can hold
/// as many as they like
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankRegistry {
    accounts: BTreeMap<AccountId, AccountLedger>,
    rules: RuleTable,
    #[serde(skip)]
    engine: AccrualEngine,
}

impl BankRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// record a deposit or withdrawal, creating the account on first use
    ///
    /// returns the account's ledger for echo display; a rejected transaction
    /// never creates an account
    pub fn submit_transaction(
        &mut self,
        date: NaiveDate,
        account: &str,
        kind: TxnKind,
        amount: Money,
    ) -> Result<&AccountLedger> {
        let ledger = self
            .accounts
            .entry(account.to_string())
            .or_insert_with(|| AccountLedger::new(account));

        if let Err(err) = ledger.record(date, kind, amount) {
            if ledger.transactions().is_empty() {
                self.accounts.remove(account);
            }
            return Err(err);
        }
        Ok(&self.accounts[account])
    }

    /// define or replace the interest rule effective from the given date
    pub fn define_rule(&mut self, date: NaiveDate, id: impl Into<String>, rate: Rate) -> Result<&InterestRule> {
        self.rules.add_or_replace(date, id, rate)
    }

    /// monthly statement with the month's interest posted
    ///
    /// posting is guarded by the presence of an interest transaction in the
    /// month, so reprinting a statement never accrues twice
    pub fn statement(&mut self, account: &str, month: StatementMonth) -> Result<Statement> {
        let ledger = self
            .accounts
            .get_mut(account)
            .ok_or_else(|| LedgerError::UnknownAccount {
                account: account.to_string(),
            })?;

        if !ledger.has_interest_for(month) {
            let accrued = self.engine.accrue_month(ledger, &self.rules, month);
            if accrued.total.is_positive() {
                ledger.post_interest(accrued.posting_date(), accrued.total);
            }
        }

        let opening_balance = month
            .first_day()
            .pred_opt()
            .map(|day| ledger.balance_as_of(day))
            .unwrap_or(Money::ZERO);

        let mut balance = opening_balance;
        let mut lines = Vec::new();
        for txn in ledger.transactions_in(month.first_day(), month.last_day()) {
            balance += txn.signed_amount();
            lines.push(StatementLine {
                transaction: txn.clone(),
                balance,
            });
        }

        Ok(Statement {
            account: ledger.id().to_string(),
            month,
            opening_balance,
            lines,
        })
    }

    pub fn account(&self, id: &str) -> Option<&AccountLedger> {
        self.accounts.get(id)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &AccountLedger> {
        self.accounts.values()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::from_str_exact(s).unwrap()
    }

    fn month(y: i32, m: u32) -> StatementMonth {
        StatementMonth::new(y, m).unwrap()
    }

    fn reference_bank() -> BankRegistry {
        let mut bank = BankRegistry::new();
        bank.define_rule(ymd(2023, 1, 1), "RULE01", Rate::from_percent(dec!(1.95))).unwrap();
        bank.define_rule(ymd(2023, 5, 20), "RULE02", Rate::from_percent(dec!(1.90))).unwrap();
        bank.define_rule(ymd(2023, 6, 15), "RULE03", Rate::from_percent(dec!(2.20))).unwrap();

        bank.submit_transaction(ymd(2023, 5, 5), "AC001", TxnKind::Deposit, money("100.00")).unwrap();
        bank.submit_transaction(ymd(2023, 6, 1), "AC001", TxnKind::Deposit, money("150.00")).unwrap();
        bank.submit_transaction(ymd(2023, 6, 26), "AC001", TxnKind::Withdrawal, money("20.00")).unwrap();
        bank.submit_transaction(ymd(2023, 6, 26), "AC001", TxnKind::Withdrawal, money("100.00")).unwrap();
        bank
    }

    #[test]
    fn test_reference_june_statement() {
        let mut bank = reference_bank();
        let statement = bank.statement("AC001", month(2023, 6)).unwrap();

        assert_eq!(statement.opening_balance, money("100.00"));
        assert_eq!(statement.lines.len(), 4);

        let last = statement.lines.last().unwrap();
        assert_eq!(last.transaction.kind, TxnKind::Interest);
        assert_eq!(last.transaction.date, ymd(2023, 6, 30));
        assert_eq!(last.transaction.amount, money("0.39"));
        assert!(last.transaction.id.is_none());

        // 130.00 after the two withdrawals, 130.39 after interest
        assert_eq!(statement.lines[2].balance, money("130.00"));
        assert_eq!(statement.closing_balance(), money("130.39"));
    }

    #[test]
    fn test_statement_reprint_is_idempotent() {
        let mut bank = reference_bank();
        let first = bank.statement("AC001", month(2023, 6)).unwrap();
        let second = bank.statement("AC001", month(2023, 6)).unwrap();

        assert_eq!(first, second);
        let interest_count = bank
            .account("AC001")
            .unwrap()
            .transactions()
            .iter()
            .filter(|t| t.kind == TxnKind::Interest)
            .count();
        assert_eq!(interest_count, 1);
    }

    #[test]
    fn test_posted_interest_feeds_next_month_balance() {
        let mut bank = reference_bank();
        bank.statement("AC001", month(2023, 6)).unwrap();

        let july = bank.statement("AC001", month(2023, 7)).unwrap();
        assert_eq!(july.opening_balance, money("130.39"));
    }

    #[test]
    fn test_statement_for_unknown_account() {
        let mut bank = reference_bank();
        let err = bank.statement("AC999", month(2023, 6)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::UnknownAccount { account: "AC999".to_string() }
        );
    }

    #[test]
    fn test_rejected_first_transaction_does_not_create_account() {
        let mut bank = BankRegistry::new();
        let err = bank
            .submit_transaction(ymd(2023, 6, 1), "AC002", TxnKind::Withdrawal, money("5.00"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert!(bank.account("AC002").is_none());
    }

    #[test]
    fn test_zero_interest_month_posts_no_line() {
        let mut bank = BankRegistry::new();
        bank.submit_transaction(ymd(2023, 6, 1), "AC001", TxnKind::Deposit, money("10.00")).unwrap();

        // no rules defined: every day accrues zero
        let statement = bank.statement("AC001", month(2023, 6)).unwrap();
        assert_eq!(statement.lines.len(), 1);
        assert!(!bank.account("AC001").unwrap().has_interest_for(month(2023, 6)));
    }

    #[test]
    fn test_accounts_are_isolated() {
        let mut bank = BankRegistry::new();
        bank.submit_transaction(ymd(2023, 6, 1), "AC001", TxnKind::Deposit, money("100.00")).unwrap();
        bank.submit_transaction(ymd(2023, 6, 1), "AC002", TxnKind::Deposit, money("7.00")).unwrap();

        let err = bank
            .submit_transaction(ymd(2023, 6, 2), "AC002", TxnKind::Withdrawal, money("50.00"))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert_eq!(bank.account("AC001").unwrap().balance(), money("100.00"));
        assert_eq!(bank.account("AC002").unwrap().balance(), money("7.00"));

        // ids sequence independently per account
        let id = bank.account("AC002").unwrap().transactions()[0].id.unwrap();
        assert_eq!(id.to_string(), "20230601-01");
    }

    #[test]
    fn test_registry_round_trips_through_json() {
        let mut bank = reference_bank();
        bank.statement("AC001", month(2023, 6)).unwrap();

        let json = serde_json::to_string(&bank).unwrap();
        let restored: BankRegistry = serde_json::from_str(&json).unwrap();

        assert_eq!(
            restored.account("AC001").unwrap().transactions(),
            bank.account("AC001").unwrap().transactions()
        );
        assert_eq!(restored.rules().len(), 3);
    }
}
