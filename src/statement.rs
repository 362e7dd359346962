use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;
use crate::rules::InterestRule;
use crate::types::{AccountId, StatementMonth, Transaction};

/// one statement row: a transaction and the balance after it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    pub transaction: Transaction,
    pub balance: Money,
}

/// monthly statement with running balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub account: AccountId,
    pub month: StatementMonth,
    /// balance carried in from before the first day of the month
    pub opening_balance: Money,
    pub lines: Vec<StatementLine>,
}

impl Statement {
    pub fn closing_balance(&self) -> Money {
        self.lines
            .last()
            .map(|l| l.balance)
            .unwrap_or(self.opening_balance)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account: {}", self.account)?;
        writeln!(f, "| Date     | Txn Id      | Type | Amount | Balance |")?;
        for line in &self.lines {
            let t = &line.transaction;
            writeln!(
                f,
                "| {} | {:<11} | {:<4} | {:>6} | {:>7} |",
                t.date.format("%Y%m%d"),
                t.id.map(|id| id.to_string()).unwrap_or_default(),
                t.kind,
                t.amount,
                line.balance,
            )?;
        }
        Ok(())
    }
}

/// full transaction history table, echoed after each accepted entry
pub fn render_history(account: &str, transactions: &[Transaction]) -> String {
    let mut out = format!("Account: {account}\n");
    out.push_str("| Date     | Txn Id      | Type | Amount |\n");
    for t in transactions {
        out.push_str(&format!(
            "| {} | {:<11} | {:<4} | {:>6} |\n",
            t.date.format("%Y%m%d"),
            t.id.map(|id| id.to_string()).unwrap_or_default(),
            t.kind,
            t.amount,
        ));
    }
    out
}

/// interest rule table, echoed after each accepted rule
pub fn render_rules<'a>(rules: impl IntoIterator<Item = &'a InterestRule>) -> String {
    let mut out = String::from("Interest rules:\n");
    out.push_str("| Date     | RuleId | Rate (%) |\n");
    for rule in rules {
        out.push_str(&format!(
            "| {} | {} | {:>8} |\n",
            rule.date.format("%Y%m%d"),
            rule.id,
            rule.rate,
        ));
    }
    out
}
