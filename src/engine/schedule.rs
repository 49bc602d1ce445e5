use serde::{Deserialize, Serialize};

use crate::debts::Debt;
use crate::engine::payoff::round_cents;

/// One month of an amortization walk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub month: u32,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

/// Guard against schedules that would outlive any realistic loan term.
const MAX_SCHEDULE_MONTHS: u32 = 1200;

/// Month-by-month amortization of a debt at a fixed payment, with the full
/// payment applied each month and the final payment clamped so the balance
/// lands on exactly zero. Figures are cent-rounded for display.
///
/// Returns an empty schedule when the payment is invalid, the balance is
/// already zero, or the payment never amortizes the balance.
pub fn amortization_schedule(debt: &Debt, monthly_payment: f64) -> Vec<ScheduleEntry> {
    if monthly_payment <= 0.0 || debt.interest_rate < 0.0 {
        return Vec::new();
    }
    let mut balance = debt.current_balance();
    if balance <= 0.0 {
        return Vec::new();
    }
    let rate = debt.monthly_rate();
    if monthly_payment <= balance * rate {
        return Vec::new();
    }

    let mut entries = Vec::new();
    let mut month = 0;
    while balance > 0.0 && month < MAX_SCHEDULE_MONTHS {
        month += 1;
        let interest = balance * rate;
        let principal = (monthly_payment - interest).min(balance);
        balance -= principal;
        entries.push(ScheduleEntry {
            month,
            interest: round_cents(interest),
            principal: round_cents(principal),
            balance: round_cents(balance),
        });
    }
    entries
}
