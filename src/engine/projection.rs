use std::collections::HashMap;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::debts::{Debt, Strategy};
use crate::engine::payoff::PayoffEngine;
use crate::errors::{PayoffError, Result};

/// Projection for a single debt at its allocated monthly payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtProjection {
    pub debt_id: String,
    pub name: String,
    pub monthly_payment: f64,
    /// `None` when the payment never amortizes the balance.
    pub months: Option<u32>,
    /// `None` when the payment is at the minimum or never amortizes; the
    /// interest walk only applies above the minimum.
    pub total_interest: Option<f64>,
    pub payoff_date: Option<NaiveDate>,
}

/// Whole-portfolio projection under one strategy and budget.
///
/// Aggregates are `None` whenever any debt in the portfolio cannot be paid
/// off at its allocated payment; serialized output has no way to carry an
/// infinity, and "never" is what the caller should render anyway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffProjection {
    pub strategy: Strategy,
    pub allocations: HashMap<String, f64>,
    /// Per-debt projections, in strategy payoff order.
    pub debts: Vec<DebtProjection>,
    pub total_monthly_payment: f64,
    pub months_to_debt_free: Option<u32>,
    pub debt_free_date: Option<NaiveDate>,
    pub total_interest: Option<f64>,
}

impl PayoffProjection {
    /// Looks up the projection for a specific debt id.
    pub fn debt(&self, debt_id: &str) -> Result<&DebtProjection> {
        self.debts
            .iter()
            .find(|debt| debt.debt_id == debt_id)
            .ok_or_else(|| PayoffError::DebtNotFound(debt_id.to_string()))
    }
}

/// Comparison of the same portfolio and budget across every strategy, in
/// fixed Snowball, Avalanche, Minimum order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub projections: Vec<PayoffProjection>,
}

impl StrategyComparison {
    pub fn for_strategy(&self, strategy: Strategy) -> Option<&PayoffProjection> {
        self.projections
            .iter()
            .find(|projection| projection.strategy == strategy)
    }
}

/// Builds portfolio projections out of the pure engine functions.
pub struct ProjectionService;

impl ProjectionService {
    /// Validates the records, allocates the budget, and projects every debt
    /// at its allocated payment.
    pub fn project(
        debts: &[Debt],
        strategy: Strategy,
        available_budget: f64,
        start: NaiveDate,
    ) -> Result<PayoffProjection> {
        if debts.is_empty() {
            return Err(PayoffError::EmptyPortfolio);
        }
        for debt in debts {
            debt.validate()?;
        }
        if !available_budget.is_finite() {
            return Err(PayoffError::InvalidInput(
                "available budget must be a finite number".into(),
            ));
        }

        let allocations = PayoffEngine::recommended_payments(debts, strategy, available_budget);
        if allocations.is_empty() {
            warn!(
                "budget {:.2} leaves nothing to allocate; projecting at contractual minimums",
                available_budget
            );
        }

        let ordered = PayoffEngine::payoff_order(debts, strategy);
        let mut projections = Vec::with_capacity(ordered.len());
        let mut total_monthly_payment = 0.0;
        for debt in &ordered {
            let payment = allocations
                .get(&debt.id)
                .copied()
                .unwrap_or(debt.minimum_payment);
            total_monthly_payment += payment;

            let months = PayoffEngine::payoff_months(debt, payment);
            if !months.is_finite() {
                warn!(
                    "debt `{}` never amortizes at a payment of {:.2}",
                    debt.name, payment
                );
            }
            let interest = PayoffEngine::total_interest(debt, payment);
            let months = months.is_finite().then(|| months as u32);
            projections.push(DebtProjection {
                debt_id: debt.id.clone(),
                name: debt.name.clone(),
                monthly_payment: payment,
                months,
                total_interest: interest.is_finite().then_some(interest),
                payoff_date: months.and_then(|m| start.checked_add_months(Months::new(m))),
            });
        }

        let months_to_debt_free = projections
            .iter()
            .map(|projection| projection.months)
            .collect::<Option<Vec<_>>>()
            .and_then(|all| all.into_iter().max());
        let total_interest = projections
            .iter()
            .map(|projection| projection.total_interest)
            .sum::<Option<f64>>();
        debug!(
            "projected {} debt(s) under {:?}: debt-free in {:?} month(s)",
            projections.len(),
            strategy,
            months_to_debt_free
        );

        Ok(PayoffProjection {
            strategy,
            allocations,
            debts: projections,
            total_monthly_payment,
            months_to_debt_free,
            debt_free_date: months_to_debt_free
                .and_then(|m| start.checked_add_months(Months::new(m))),
            total_interest,
        })
    }

    /// Projects the same portfolio under all three strategies.
    pub fn compare(
        debts: &[Debt],
        available_budget: f64,
        start: NaiveDate,
    ) -> Result<StrategyComparison> {
        let projections = [Strategy::Snowball, Strategy::Avalanche, Strategy::Minimum]
            .into_iter()
            .map(|strategy| Self::project(debts, strategy, available_budget, start))
            .collect::<Result<Vec<_>>>()?;
        Ok(StrategyComparison { projections })
    }
}
