//! Integration test: enemy health growth over a run
//!
//! Checks the scaling curve itself, the balance table built on it, and that
//! the run engine applies it to enemies at spawn time.

use orb::core::engine::RunEngine;
use orb::core::progression::{
    balance_curve, expected_player_damage_multiplier, health_scaling_multiplier, interval_rate,
};
use orb::enemy::{Enemy, SpawnBounds};
use orb::save::NoPersist;
use orb::SaveRecord;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_no_growth_in_first_interval() {
    assert_eq!(health_scaling_multiplier(0.0), 1.0);
    assert_eq!(health_scaling_multiplier(29.0), 1.0);
    assert!(health_scaling_multiplier(31.0) > 1.0);
}

#[test]
fn test_growth_never_decreases() {
    let mut previous = health_scaling_multiplier(0.0);
    for second in 1..=900 {
        let current = health_scaling_multiplier(second as f64);
        assert!(current >= previous, "dropped at {}s", second);
        previous = current;
    }
}

#[test]
fn test_rate_decays_to_floor() {
    assert!(interval_rate(0) > interval_rate(1));
    assert_eq!(interval_rate(5), interval_rate(100));
    assert!((interval_rate(100) - 1.15).abs() < 1e-12);
}

#[test]
fn test_balance_table() {
    let curve = balance_curve(10);
    assert_eq!(curve.len(), 10);
    assert_eq!(curve[0].minute, 1);
    for pair in curve.windows(2) {
        assert!(pair[1].enemy_health_multiplier > pair[0].enemy_health_multiplier);
        assert!(pair[1].expected_player_multiplier >= pair[0].expected_player_multiplier);
    }
    assert!(expected_player_damage_multiplier(0.0) >= 1.0);
}

#[test]
fn test_engine_scales_health_at_spawn() {
    // No skills equipped: nothing dies, so every spawn stays in the arena.
    let record = SaveRecord {
        equipped_skills: Vec::new(),
        ..Default::default()
    };
    let mut engine = RunEngine::new(
        record,
        SpawnBounds::default(),
        ChaCha8Rng::seed_from_u64(8),
        NoPersist,
    )
    .unwrap();

    // Spawns land at 0.5s, 1.5s, ..., 30.5s.
    for _ in 0..62 {
        engine.advance(0.5);
    }
    assert_eq!(engine.stats().spawned, 31);

    let unscaled = |enemy: &Enemy| Enemy::new(enemy.class, enemy.element, 0.0, 0.0).max_hp;

    let (_, first) = engine.enemies().iter().next().unwrap();
    assert_eq!(first.max_hp, unscaled(first));

    let (_, last) = engine.enemies().iter().last().unwrap();
    let expected = (unscaled(last) as f64 * health_scaling_multiplier(30.5)).floor() as i64;
    assert_eq!(last.max_hp, expected);
    assert!(last.max_hp > unscaled(last));
}
