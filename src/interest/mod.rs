pub mod accrual;

pub use accrual::{AccrualEngine, DailyInterest, MonthlyInterest};
