use std::cmp::Ordering;
use std::collections::HashMap;

use crate::debts::{Debt, Strategy};

/// Term assumed by the minimum-payment solver when the caller does not
/// supply one.
pub const DEFAULT_TERM_MONTHS: u32 = 60;

/// Pure payoff math over in-memory debt records.
///
/// Every function is side-effect free and never mutates its inputs. Invalid
/// or non-amortizing situations are signalled with `f64::INFINITY` (or an
/// empty map), never with errors: "this debt can never be paid off at this
/// payment level" is a valid outcome the caller must render, not a failure.
pub struct PayoffEngine;

impl PayoffEngine {
    /// Reorders debts according to the chosen strategy.
    ///
    /// Snowball sorts ascending by current balance, breaking ties in favor
    /// of the higher interest rate. Avalanche sorts descending by interest
    /// rate, breaking ties in favor of the smaller balance. Minimum keeps
    /// the input order untouched.
    pub fn payoff_order(debts: &[Debt], strategy: Strategy) -> Vec<Debt> {
        let mut ordered = debts.to_vec();
        match strategy {
            Strategy::Snowball => ordered.sort_by(|a, b| {
                compare(a.current_balance(), b.current_balance())
                    .then_with(|| compare(b.interest_rate, a.interest_rate))
            }),
            Strategy::Avalanche => ordered.sort_by(|a, b| {
                compare(b.interest_rate, a.interest_rate)
                    .then_with(|| compare(a.current_balance(), b.current_balance()))
            }),
            Strategy::Minimum => {}
        }
        ordered
    }

    /// Number of months until the debt reaches zero at the given payment,
    /// ceiling-rounded, or `f64::INFINITY` when it never will.
    ///
    /// Known quirk, kept so projections match what users have already been
    /// shown: when the payment exceeds the contractual minimum, the level
    /// payment fed into the amortization formula is the *extra* over the
    /// minimum, applied against the full balance. At or below the minimum,
    /// the minimum itself is the level payment.
    pub fn payoff_months(debt: &Debt, monthly_payment: f64) -> f64 {
        if monthly_payment <= 0.0 || debt.interest_rate < 0.0 {
            return f64::INFINITY;
        }
        let balance = debt.current_balance();
        let pmt = if monthly_payment <= debt.minimum_payment {
            debt.minimum_payment
        } else {
            monthly_payment - debt.minimum_payment
        };
        if debt.interest_rate == 0.0 {
            return (balance / pmt).ceil();
        }
        let rate = debt.monthly_rate();
        let monthly_interest = balance * rate;
        // Both the stated payment and the level payment actually fed into the
        // formula must out-pace the accruing interest; the second condition
        // also keeps the logarithm argument positive.
        if monthly_payment <= monthly_interest || pmt <= monthly_interest {
            return f64::INFINITY;
        }
        (-(1.0 - balance * rate / pmt).ln() / (1.0 + rate).ln()).ceil()
    }

    /// Total interest paid over the life of the debt at the given payment,
    /// cent-rounded, or `f64::INFINITY` when the payment is invalid, at or
    /// below the minimum, or never amortizes the balance.
    ///
    /// The month-by-month walk applies the *full* payment each month, unlike
    /// the month-count formula above. The two disagree deliberately; callers
    /// rely on both numbers staying as they have always been.
    pub fn total_interest(debt: &Debt, monthly_payment: f64) -> f64 {
        if monthly_payment <= 0.0
            || debt.interest_rate < 0.0
            || monthly_payment <= debt.minimum_payment
        {
            return f64::INFINITY;
        }
        let months = Self::payoff_months(debt, monthly_payment);
        if !months.is_finite() {
            return f64::INFINITY;
        }
        if debt.interest_rate == 0.0 {
            return 0.0;
        }
        let rate = debt.monthly_rate();
        let mut balance = debt.current_balance();
        let mut total = 0.0;
        for _ in 0..months as u64 {
            let interest = balance * rate;
            total += interest;
            balance -= monthly_payment - interest;
        }
        round_cents(total)
    }

    /// Splits a monthly budget across debts: minimums first, then the
    /// surplus in strategy order, each debt capped at what it can still
    /// absorb before being fully paid.
    ///
    /// Returns one entry per input debt, every value at least that debt's
    /// minimum payment. A non-positive budget yields an empty map; a budget
    /// below the sum of minimums yields the minimum-only allocation and the
    /// caller is responsible for surfacing the shortfall.
    pub fn recommended_payments(
        debts: &[Debt],
        strategy: Strategy,
        available_budget: f64,
    ) -> HashMap<String, f64> {
        if available_budget <= 0.0 {
            return HashMap::new();
        }
        let mut allocations: HashMap<String, f64> = debts
            .iter()
            .map(|debt| (debt.id.clone(), debt.minimum_payment))
            .collect();
        let total_minimums: f64 = debts.iter().map(|debt| debt.minimum_payment).sum();
        let mut surplus = available_budget - total_minimums;
        if surplus <= 0.0 || strategy == Strategy::Minimum {
            return allocations;
        }
        for debt in Self::payoff_order(debts, strategy) {
            if surplus <= 0.0 {
                break;
            }
            let room = (debt.current_balance() - debt.minimum_payment).max(0.0);
            let extra = surplus.min(room);
            if extra > 0.0 {
                if let Some(allocation) = allocations.get_mut(&debt.id) {
                    *allocation += extra;
                }
                surplus -= extra;
            }
        }
        allocations
    }

    /// Level monthly payment that fully amortizes `principal` over the
    /// default five-year term. See [`Self::minimum_payment_for_term`].
    pub fn minimum_payment(principal: f64, annual_rate_percent: f64) -> f64 {
        Self::minimum_payment_for_term(principal, annual_rate_percent, DEFAULT_TERM_MONTHS)
    }

    /// Standard level-payment solver: `P * r(1+r)^n / ((1+r)^n - 1)`,
    /// rounded *up* to the cent so the final payment never falls short.
    /// Invalid inputs return `0.0`.
    pub fn minimum_payment_for_term(
        principal: f64,
        annual_rate_percent: f64,
        term_months: u32,
    ) -> f64 {
        if principal <= 0.0 || annual_rate_percent < 0.0 || term_months == 0 {
            return 0.0;
        }
        let term = f64::from(term_months);
        if annual_rate_percent == 0.0 {
            return ceil_cents(principal / term);
        }
        let rate = annual_rate_percent / 100.0 / 12.0;
        let growth = (1.0 + rate).powf(term);
        ceil_cents(principal * rate * growth / (growth - 1.0))
    }
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn ceil_cents(value: f64) -> f64 {
    (value * 100.0).ceil() / 100.0
}
