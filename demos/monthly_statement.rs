/// full statement flow using the structured command layer
use bank_ledger_rs::{Command, BankRegistry, Money, Rate, StatementMonth, TxnKind};
use chrono::NaiveDate;
use rust_decimal_macros::dec;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bank = BankRegistry::new();

    let commands = vec![
        Command::DefineRule { date: ymd(2023, 1, 1), id: "RULE01".into(), rate: Rate::from_percent(dec!(1.95)) },
        Command::DefineRule { date: ymd(2023, 5, 20), id: "RULE02".into(), rate: Rate::from_percent(dec!(1.90)) },
        Command::DefineRule { date: ymd(2023, 6, 15), id: "RULE03".into(), rate: Rate::from_percent(dec!(2.20)) },
        Command::EnterTransaction { date: ymd(2023, 5, 5), account: "AC001".into(), kind: TxnKind::Deposit, amount: Money::from_str_exact("100.00")? },
        Command::EnterTransaction { date: ymd(2023, 6, 1), account: "AC001".into(), kind: TxnKind::Deposit, amount: Money::from_str_exact("150.00")? },
        Command::EnterTransaction { date: ymd(2023, 6, 26), account: "AC001".into(), kind: TxnKind::Withdrawal, amount: Money::from_str_exact("20.00")? },
        Command::EnterTransaction { date: ymd(2023, 6, 26), account: "AC001".into(), kind: TxnKind::Withdrawal, amount: Money::from_str_exact("100.00")? },
        Command::PrintStatement { account: "AC001".into(), month: StatementMonth::new(2023, 6)? },
    ];

    for command in commands {
        match bank.dispatch(command) {
            Ok(outcome) => println!("{outcome}"),
            Err(err) => println!("Error: {err}"),
        }
    }

    Ok(())
}
