/// quick start - minimal example to get started
use bank_ledger_rs::{BankRegistry, Money, Rate, StatementMonth, TxnKind};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = BankRegistry::new();

    // 1.95% p.a. from the start of the year
    bank.define_rule(
        NaiveDate::from_ymd_opt(2023, 1, 1).ok_or("bad date")?,
        "RULE01",
        Rate::from_percent(dec!(1.95)),
    )?;

    // deposit, then withdraw some of it
    bank.submit_transaction(
        NaiveDate::from_ymd_opt(2023, 6, 1).ok_or("bad date")?,
        "AC001",
        TxnKind::Deposit,
        Money::from_str_exact("250.00")?,
    )?;
    bank.submit_transaction(
        NaiveDate::from_ymd_opt(2023, 6, 26).ok_or("bad date")?,
        "AC001",
        TxnKind::Withdrawal,
        Money::from_str_exact("120.00")?,
    )?;

    // statement posts the month's interest on the last day
    let statement = bank.statement("AC001", StatementMonth::new(2023, 6)?)?;
    println!("{statement}");

    Ok(())
}
