//! Derives the monthly budget available for debt payments from income and
//! expense records, the way the calling layer hands it to the engine.

use serde::{Deserialize, Serialize};

use crate::debts::{Debt, Expense, MonthlyIncome};

/// Aggregated view of how much of the monthly income can go toward debt.
///
/// Minimum payments are *not* subtracted from `available_for_debt`; they are
/// paid out of that pool by the allocator, which also reports the shortfall
/// case when the pool cannot cover them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub monthly_income: f64,
    pub recurring_expenses: f64,
    pub total_minimum_payments: f64,
    pub available_for_debt: f64,
}

impl BudgetSummary {
    pub fn derive(income: MonthlyIncome, expenses: &[Expense], debts: &[Debt]) -> Self {
        let recurring_expenses: f64 = expenses
            .iter()
            .filter(|expense| expense.recurring)
            .map(|expense| expense.amount)
            .sum();
        let total_minimum_payments: f64 = debts.iter().map(|debt| debt.minimum_payment).sum();
        Self {
            monthly_income: income.amount,
            recurring_expenses,
            total_minimum_payments,
            available_for_debt: (income.amount - recurring_expenses).max(0.0),
        }
    }

    /// Whether the available pool covers every contractual minimum.
    pub fn covers_minimums(&self) -> bool {
        self.available_for_debt >= self.total_minimum_payments
    }

    /// How much the available pool falls short of the minimums, zero when
    /// it does not.
    pub fn shortfall(&self) -> f64 {
        (self.total_minimum_payments - self.available_for_debt).max(0.0)
    }
}
