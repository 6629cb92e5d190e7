use touchless_core::*;

#[test]
fn award_adds_points() {
    let mut ledger = ScoreLedger::default();
    assert_eq!(ledger.score(), 0);
    assert_eq!(ledger.award(), 100);
    assert_eq!(ledger.award(), 200);
}

#[test]
fn penalty_clamps_at_zero() {
    let mut ledger = ScoreLedger::new(100, 50);
    assert_eq!(ledger.penalize(), 0);
    ledger.award();
    assert_eq!(ledger.penalize(), 50);
    assert_eq!(ledger.penalize(), 0);
    assert_eq!(ledger.penalize(), 0);
}

#[test]
fn mixed_sequence() {
    let mut ledger = ScoreLedger::new(AWARD_POINTS, PENALTY_POINTS);
    ledger.award();
    ledger.award();
    ledger.penalize();
    ledger.award();
    assert_eq!(ledger.score(), 250);
}
