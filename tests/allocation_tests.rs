use payoff_core::{
    debts::{Debt, Strategy},
    engine::PayoffEngine,
};

fn portfolio() -> Vec<Debt> {
    vec![
        Debt::new("Store card", 3000.0, 22.0, 60.0),
        Debt::new("Overdraft", 500.0, 10.0, 20.0),
    ]
}

#[test]
fn non_positive_budget_allocates_nothing() {
    let debts = portfolio();
    assert!(PayoffEngine::recommended_payments(&debts, Strategy::Snowball, 0.0).is_empty());
    assert!(PayoffEngine::recommended_payments(&debts, Strategy::Avalanche, -50.0).is_empty());
}

#[test]
fn budget_at_sum_of_minimums_keeps_every_minimum() {
    let debts = portfolio();
    for strategy in [Strategy::Snowball, Strategy::Avalanche] {
        let allocations = PayoffEngine::recommended_payments(&debts, strategy, 80.0);
        assert_eq!(allocations.len(), 2);
        assert_eq!(allocations[&debts[0].id], 60.0);
        assert_eq!(allocations[&debts[1].id], 20.0);
    }
}

#[test]
fn budget_below_minimums_still_returns_the_floor() {
    let debts = portfolio();
    let allocations = PayoffEngine::recommended_payments(&debts, Strategy::Snowball, 45.0);
    assert_eq!(allocations[&debts[0].id], 60.0);
    assert_eq!(allocations[&debts[1].id], 20.0);
}

#[test]
fn minimum_strategy_never_reallocates_surplus() {
    let debts = portfolio();
    let allocations = PayoffEngine::recommended_payments(&debts, Strategy::Minimum, 1000.0);
    assert_eq!(allocations[&debts[0].id], 60.0);
    assert_eq!(allocations[&debts[1].id], 20.0);
}

#[test]
fn snowball_surplus_targets_the_smallest_balance_first() {
    let debts = portfolio();
    // Minimums total 80, leaving 520 of surplus. The overdraft (balance 500)
    // comes first and absorbs 480 before being fully paid; the rest lands on
    // the store card.
    let allocations = PayoffEngine::recommended_payments(&debts, Strategy::Snowball, 600.0);
    assert_eq!(allocations[&debts[1].id], 500.0);
    assert_eq!(allocations[&debts[0].id], 100.0);
}

#[test]
fn avalanche_surplus_targets_the_highest_rate_first() {
    let debts = portfolio();
    let allocations = PayoffEngine::recommended_payments(&debts, Strategy::Avalanche, 600.0);
    assert_eq!(allocations[&debts[0].id], 580.0);
    assert_eq!(allocations[&debts[1].id], 20.0);
}

#[test]
fn allocations_conserve_the_budget() {
    let debts = portfolio();
    for strategy in [Strategy::Snowball, Strategy::Avalanche] {
        let allocations = PayoffEngine::recommended_payments(&debts, strategy, 600.0);
        let total: f64 = allocations.values().sum();
        assert!((total - 600.0).abs() < 1e-9);
        for debt in &debts {
            assert!(allocations[&debt.id] >= debt.minimum_payment);
        }
    }
}

#[test]
fn room_caps_stop_allocation_once_debts_are_fully_funded() {
    let debts = vec![
        Debt::new("Tiny A", 100.0, 15.0, 40.0),
        Debt::new("Tiny B", 120.0, 12.0, 50.0),
    ];
    let allocations = PayoffEngine::recommended_payments(&debts, Strategy::Snowball, 1000.0);
    // Room is 60 and 70; the rest of the budget has nowhere to go.
    assert_eq!(allocations[&debts[0].id], 100.0);
    assert_eq!(allocations[&debts[1].id], 120.0);
    let total: f64 = allocations.values().sum();
    assert_eq!(total, 220.0);
}

#[test]
fn room_uses_remaining_balance_when_present() {
    let debts = vec![Debt::new("Nearly done", 5000.0, 18.0, 100.0).with_remaining_balance(150.0)];
    let allocations = PayoffEngine::recommended_payments(&debts, Strategy::Avalanche, 400.0);
    // Only 50 of room is left above the minimum.
    assert_eq!(allocations[&debts[0].id], 150.0);
}

#[test]
fn balance_already_below_minimum_never_drops_the_floor() {
    let debts = vec![Debt::new("Stub", 5000.0, 18.0, 100.0).with_remaining_balance(30.0)];
    let allocations = PayoffEngine::recommended_payments(&debts, Strategy::Snowball, 500.0);
    assert_eq!(allocations[&debts[0].id], 100.0);
}

#[test]
fn every_input_id_appears_exactly_once() {
    let debts = vec![
        Debt::new("A", 900.0, 9.0, 30.0),
        Debt::new("B", 700.0, 19.0, 35.0),
        Debt::new("C", 1100.0, 14.0, 45.0),
    ];
    let allocations = PayoffEngine::recommended_payments(&debts, Strategy::Avalanche, 400.0);
    assert_eq!(allocations.len(), debts.len());
    for debt in &debts {
        assert!(allocations.contains_key(&debt.id));
    }
}
