use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{PayoffError, Result};

/// A monthly expense record, used when deriving the budget available for
/// debt payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    /// Recurring expenses repeat every month and reduce the available budget;
    /// one-off expenses are tracked but do not.
    #[serde(default)]
    pub recurring: bool,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: f64, recurring: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            amount,
            recurring,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PayoffError::InvalidInput(format!(
                "expense {} has an empty name",
                self.id
            )));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(PayoffError::InvalidInput(format!(
                "expense `{}` has a negative or non-finite amount",
                self.name
            )));
        }
        Ok(())
    }
}

/// The user's stated monthly income.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub amount: f64,
}

impl MonthlyIncome {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(PayoffError::InvalidInput(
                "monthly income must be a non-negative number".into(),
            ));
        }
        Ok(())
    }
}
