pub mod account;
pub mod bank;
pub mod commands;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod rules;
pub mod statement;
pub mod types;

// re-export key types
pub use account::AccountLedger;
pub use bank::BankRegistry;
pub use commands::{Command, CommandOutcome};
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use interest::{AccrualEngine, DailyInterest, MonthlyInterest};
pub use rules::{InterestRule, RuleTable};
pub use statement::{Statement, StatementLine};
pub use types::{AccountId, StatementMonth, Transaction, TxnId, TxnKind};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
