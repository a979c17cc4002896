//! Time-based difficulty curve and the balance oracle used to audit it.
//!
//! Enemy health grows once per 30s interval. Growth per interval starts near
//! +25% and decays towards a +15% floor, so the ramp is front-loaded.
//! `expected_player_damage_multiplier` never touches gameplay state; it only
//! estimates how fast a greedy player can keep up.

use crate::core::constants::{
    BASE_SCALING_RATE, EXPECTED_DAMAGE_PER_LEVEL, EXPECTED_DAMAGE_UPGRADE_BASE_COST,
    EXPECTED_DAMAGE_UPGRADE_COST_GROWTH, EXPECTED_SILVER_PER_INTERVAL, SCALING_CURVE_DECAY,
    SCALING_FLOOR_RATE, SCALING_INTERVAL_SECONDS,
};
use serde::Serialize;

/// Number of whole scaling intervals contained in `elapsed_seconds`.
pub fn completed_intervals(elapsed_seconds: f64) -> u32 {
    if !elapsed_seconds.is_finite() || elapsed_seconds <= 0.0 {
        return 0;
    }
    (elapsed_seconds / SCALING_INTERVAL_SECONDS).floor() as u32
}

/// Growth factor applied for interval `index` (1-based).
pub fn interval_rate(index: u32) -> f64 {
    (BASE_SCALING_RATE - index as f64 * SCALING_CURVE_DECAY).max(SCALING_FLOOR_RATE)
}

/// Enemy health multiplier after `elapsed_seconds` of run time.
///
/// Returns 1.0 until the first full interval has passed.
pub fn health_scaling_multiplier(elapsed_seconds: f64) -> f64 {
    (1..=completed_intervals(elapsed_seconds)).fold(1.0, |acc, i| acc * interval_rate(i))
}

/// Silver cost of the next estimator damage level after `level` purchases.
fn expected_upgrade_cost(level: u32) -> u64 {
    (EXPECTED_DAMAGE_UPGRADE_BASE_COST * EXPECTED_DAMAGE_UPGRADE_COST_GROWTH.powi(level as i32))
        .floor() as u64
}

/// Damage levels a greedy player could afford after `elapsed_seconds`.
///
/// Assumes a flat silver income per interval, all of it spent on the
/// cheapest damage upgrade as soon as it is affordable.
pub fn expected_damage_levels(elapsed_seconds: f64) -> u32 {
    let budget = completed_intervals(elapsed_seconds) as u64 * EXPECTED_SILVER_PER_INTERVAL;
    let mut spent = 0u64;
    let mut level = 0u32;
    let mut cost = expected_upgrade_cost(0);

    while spent + cost <= budget {
        spent += cost;
        level += 1;
        cost = expected_upgrade_cost(level);
    }

    level
}

/// Estimated player damage multiplier after `elapsed_seconds`.
pub fn expected_player_damage_multiplier(elapsed_seconds: f64) -> f64 {
    1.0 + EXPECTED_DAMAGE_PER_LEVEL * expected_damage_levels(elapsed_seconds) as f64
}

/// Enemy scaling divided by expected player scaling.
///
/// Values above 1.0 mean the curve is outpacing the player.
pub fn balance_ratio(elapsed_seconds: f64) -> f64 {
    health_scaling_multiplier(elapsed_seconds) / expected_player_damage_multiplier(elapsed_seconds)
}

/// One row of the per-minute balance table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceSample {
    pub minute: u32,
    pub enemy_health_multiplier: f64,
    pub expected_player_multiplier: f64,
    pub ratio: f64,
}

/// Balance samples for minutes `1..=minutes`.
pub fn balance_curve(minutes: u32) -> Vec<BalanceSample> {
    (1..=minutes)
        .map(|minute| {
            let seconds = minute as f64 * 60.0;
            BalanceSample {
                minute,
                enemy_health_multiplier: health_scaling_multiplier(seconds),
                expected_player_multiplier: expected_player_damage_multiplier(seconds),
                ratio: balance_ratio(seconds),
            }
        })
        .collect()
}
