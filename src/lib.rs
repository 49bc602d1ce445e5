#![doc(test(attr(deny(warnings))))]

//! Payoff Core provides the debt payoff projection primitives that power
//! higher level budgeting and planning workflows: amortization math, payoff
//! ordering strategies, and payment allocation under a monthly budget.

pub mod budget;
pub mod debts;
pub mod engine;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Payoff Core tracing initialized.");
    });
}
