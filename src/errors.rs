use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for record validation and projection building.
///
/// The engine math itself never errors; non-amortizing situations are
/// reported through `f64::INFINITY` sentinels instead.
#[derive(Error, Debug)]
pub enum PayoffError {
    #[error("No debts to project")]
    EmptyPortfolio,
    #[error("Debt not found: {0}")]
    DebtNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, PayoffError>;
