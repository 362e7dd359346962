use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bank::BankRegistry;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::rules::InterestRule;
use crate::statement::{render_history, render_rules, Statement};
use crate::types::{AccountId, StatementMonth, Transaction, TxnKind};

/// structured request accepted by the registry; the interactive shell is a
/// thin adapter that parses text into these and prints the outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    EnterTransaction {
        date: NaiveDate,
        account: AccountId,
        kind: TxnKind,
        amount: Money,
    },
    DefineRule {
        date: NaiveDate,
        id: String,
        rate: Rate,
    },
    PrintStatement {
        account: AccountId,
        month: StatementMonth,
    },
}

/// structured result of a dispatched command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// full history of the touched account
    Transactions {
        account: AccountId,
        history: Vec<Transaction>,
    },
    /// full rule table after the change
    Rules(Vec<InterestRule>),
    Statement(Statement),
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Transactions { account, history } => {
                f.write_str(&render_history(account, history))
            }
            CommandOutcome::Rules(rules) => f.write_str(&render_rules(rules)),
            CommandOutcome::Statement(statement) => write!(f, "{statement}"),
        }
    }
}

impl BankRegistry {
    /// synchronous dispatch: one command in, one outcome or error out
    pub fn dispatch(&mut self, command: Command) -> Result<CommandOutcome> {
        match command {
            Command::EnterTransaction { date, account, kind, amount } => {
                let ledger = self.submit_transaction(date, &account, kind, amount)?;
                Ok(CommandOutcome::Transactions {
                    account,
                    history: ledger.transactions().to_vec(),
                })
            }
            Command::DefineRule { date, id, rate } => {
                self.define_rule(date, id, rate)?;
                Ok(CommandOutcome::Rules(self.rules().iter().cloned().collect()))
            }
            Command::PrintStatement { account, month } => {
                Ok(CommandOutcome::Statement(self.statement(&account, month)?))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LedgerError;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn money(s: &str) -> Money {
        Money::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_dispatch_echoes_history_and_rules() {
        let mut bank = BankRegistry::new();

        let outcome = bank
            .dispatch(Command::DefineRule {
                date: ymd(2023, 1, 1),
                id: "RULE01".to_string(),
                rate: Rate::from_percent(dec!(1.95)),
            })
            .unwrap();
        match outcome {
            CommandOutcome::Rules(rules) => {
                assert_eq!(rules.len(), 1);
                assert_eq!(rules[0].id, "RULE01");
            }
            other => panic!("expected rules outcome, got {other:?}"),
        }

        let outcome = bank
            .dispatch(Command::EnterTransaction {
                date: ymd(2023, 5, 5),
                account: "AC001".to_string(),
                kind: TxnKind::Deposit,
                amount: money("100.00"),
            })
            .unwrap();
        match outcome {
            CommandOutcome::Transactions { account, history } => {
                assert_eq!(account, "AC001");
                assert_eq!(history.len(), 1);
                assert_eq!(history[0].id.unwrap().to_string(), "20230505-01");
            }
            other => panic!("expected transactions outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_dispatch_surfaces_errors_without_mutating() {
        let mut bank = BankRegistry::new();
        let err = bank
            .dispatch(Command::EnterTransaction {
                date: ymd(2023, 5, 5),
                account: "AC001".to_string(),
                kind: TxnKind::Withdrawal,
                amount: money("10.00"),
            })
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
        assert!(bank.account("AC001").is_none());
    }

    #[test]
    fn test_statement_outcome_renders_like_the_statement() {
        let mut bank = BankRegistry::new();
        bank.dispatch(Command::EnterTransaction {
            date: ymd(2023, 6, 1),
            account: "AC001".to_string(),
            kind: TxnKind::Deposit,
            amount: money("150.00"),
        })
        .unwrap();

        let outcome = bank
            .dispatch(Command::PrintStatement {
                account: "AC001".to_string(),
                month: StatementMonth::new(2023, 6).unwrap(),
            })
            .unwrap();

        let rendered = outcome.to_string();
        assert!(rendered.starts_with("Account: AC001\n"));
        assert!(rendered.contains("| 20230601 | 20230601-01 | D    | 150.00 |  150.00 |"));
    }
}
