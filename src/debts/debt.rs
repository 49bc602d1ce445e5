use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{PayoffError, Result};

/// A single outstanding debt as supplied by the data layer.
///
/// The engine never mutates a debt; every computation is a pure function of
/// the record. `remaining_balance`, when present, is the post-payment
/// principal and takes precedence over `amount` in every balance-dependent
/// calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub name: String,
    /// Original principal.
    pub amount: f64,
    /// Current outstanding principal, when the data layer tracks it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_balance: Option<f64>,
    /// Nominal annual percentage rate, e.g. `19.99` for 19.99%/year.
    pub interest_rate: f64,
    /// Contractually required monthly payment.
    pub minimum_payment: f64,
}

impl Debt {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
            remaining_balance: None,
            interest_rate,
            minimum_payment,
        }
    }

    pub fn with_remaining_balance(mut self, balance: f64) -> Self {
        self.remaining_balance = Some(balance);
        self
    }

    /// Outstanding principal used by every balance-dependent computation.
    pub fn current_balance(&self) -> f64 {
        self.remaining_balance.unwrap_or(self.amount)
    }

    /// Monthly periodic rate: annual percentage divided down to one month.
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Checks the record invariants the engine relies on.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PayoffError::InvalidInput(format!(
                "debt {} has an empty name",
                self.id
            )));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "debt `{}` has a negative or non-finite amount",
                self.name
            )));
        }
        if let Some(balance) = self.remaining_balance {
            if !balance.is_finite() || balance < 0.0 {
                return Err(PayoffError::InvalidInput(format!(
                    "debt `{}` has a negative or non-finite remaining balance",
                    self.name
                )));
            }
        }
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "debt `{}` has a negative or non-finite interest rate",
                self.name
            )));
        }
        if !self.minimum_payment.is_finite() || self.minimum_payment <= 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "debt `{}` has a non-positive minimum payment",
                self.name
            )));
        }
        Ok(())
    }
}

/// Payoff prioritization strategy selected by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Smallest current balance first.
    Snowball,
    /// Highest interest rate first.
    Avalanche,
    /// No reallocation; every debt pays exactly its minimum.
    Minimum,
}
