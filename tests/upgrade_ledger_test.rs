//! Integration test: permanent and per-run upgrade ledgers

use orb::upgrades::{PermanentUpgrade, RunUpgrade, UpgradeKind, UpgradeLedger};
use orb::SaveRecord;

fn assert_cost_curve<K: UpgradeKind>(kind: K) {
    let mut previous = 0;
    for level in 0..kind.max_level() {
        let cost = kind.cost_for_level(level);
        assert!(cost > previous, "{:?} level {} cost {}", kind, level, cost);
        previous = cost;
    }
    assert_eq!(kind.cost_for_level(kind.max_level()), u64::MAX);
}

#[test]
fn test_every_cost_curve_grows_and_caps() {
    for kind in PermanentUpgrade::ALL {
        assert_cost_curve(kind);
    }
    for kind in RunUpgrade::ALL {
        assert_cost_curve(kind);
    }
}

#[test]
fn test_slow_curves_step_by_at_least_one() {
    // 8 x 1.12 floors back to 8; the price still moves up.
    assert_eq!(RunUpgrade::GoldIncrease.cost_for_level(0), 8);
    assert_eq!(RunUpgrade::GoldIncrease.cost_for_level(1), 9);
    assert_eq!(RunUpgrade::DamageIncrease.cost_for_level(1), 11);
}

#[test]
fn test_purchase_until_maxed() {
    let mut ledger = UpgradeLedger::<RunUpgrade>::new();
    let mut silver = u64::MAX / 2;

    let mut bought = 0;
    while ledger.purchase(RunUpgrade::EnemySpawnCount, &mut silver).is_some() {
        bought += 1;
    }

    assert_eq!(bought, RunUpgrade::EnemySpawnCount.max_level());
    assert!(ledger.is_maxed(RunUpgrade::EnemySpawnCount));
    assert_eq!(ledger.spawn_count_bonus(), 3);
}

#[test]
fn test_short_balance_leaves_state_unchanged() {
    let mut ledger = UpgradeLedger::<PermanentUpgrade>::new();
    let mut gold = 9;
    assert_eq!(ledger.purchase(PermanentUpgrade::Damage, &mut gold), None);
    assert_eq!(gold, 9);
    assert_eq!(ledger.level(PermanentUpgrade::Damage), 0);
}

#[test]
fn test_reset_refunds_exact_spend() {
    let mut record = SaveRecord::default();
    record.gold = 1_000;

    for _ in 0..4 {
        record
            .permanent_upgrades
            .purchase(PermanentUpgrade::Damage, &mut record.gold)
            .unwrap();
    }
    record
        .permanent_upgrades
        .purchase(PermanentUpgrade::Range, &mut record.gold)
        .unwrap();
    let spent = 1_000 - record.gold;
    assert_eq!(spent, 10 + 11 + 13 + 15 + 15);

    let refund = record.reset_permanent_upgrades();
    assert_eq!(refund, spent);
    assert_eq!(record.gold, 1_000);
    assert!(record.permanent_upgrades.is_empty());
}

#[test]
fn test_run_progress_cleared_without_refund() {
    let mut record = SaveRecord::default();
    record.silver = 100;
    record
        .run_upgrades
        .purchase(RunUpgrade::DamageIncrease, &mut record.silver)
        .unwrap();

    record.clear_run_progress();
    assert_eq!(record.silver, 0);
    assert_eq!(record.run_upgrades.level(RunUpgrade::DamageIncrease), 0);
}

#[test]
fn test_run_bonuses_respect_caps() {
    let mut ledger = UpgradeLedger::<RunUpgrade>::new();
    ledger.set_level(RunUpgrade::CriticalChance, 500);
    assert_eq!(ledger.level(RunUpgrade::CriticalChance), 19);
    assert_eq!(ledger.crit_chance_percent(), 95.0);
}
