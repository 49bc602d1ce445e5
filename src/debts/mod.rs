//! Domain records supplied by the data layer: debts, expenses, income.

pub mod debt;
pub mod obligation;

pub use debt::{Debt, Strategy};
pub use obligation::{Expense, MonthlyIncome};
