//! Headless runs on the real `RunEngine`.
//!
//! Statistics come from the engine's own counters and from `TickResult`
//! events, so the simulator can't drift from gameplay.

use super::config::SimConfig;
use super::report::SimReport;
use crate::combat::types::CombatEvent;
use crate::core::engine::RunEngine;
use crate::enemy::factory::SpawnBounds;
use crate::error::GameError;
use crate::save::record::SaveRecord;
use crate::save::NoPersist;
use crate::upgrades::run::RunUpgrade;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Outcome of one simulated run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub elapsed: f64,
    pub spawned: u64,
    pub kills: u64,
    pub boss_kills: u64,
    pub gold: u64,
    pub gems: u64,
    pub peak_alive: usize,
    pub damage_dealt: u64,
    pub damage_upgrades: u32,
}

/// Run the whole batch and aggregate a report.
///
/// Fails only on configuration errors, such as an unknown orb.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, GameError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let summary = simulate_single_run(config, rng)?;

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {:.0}s, Kills {}, Boss Kills {}, Gold {}, Peak Alive {}",
                run_idx + 1,
                config.num_runs,
                summary.elapsed,
                summary.kills,
                summary.boss_kills,
                summary.gold,
                summary.peak_alive
            );
        }
        all_runs.push(summary);
    }

    Ok(SimReport::from_runs(all_runs, config.curve_minutes))
}

/// Play one run from a fresh record.
pub fn simulate_single_run(config: &SimConfig, rng: ChaCha8Rng) -> Result<RunSummary, GameError> {
    let record = SaveRecord {
        selected_orb: config.orb.clone(),
        ..Default::default()
    };
    let mut engine = RunEngine::new(record, SpawnBounds::default(), rng, NoPersist)?;

    let duration = config.effective_duration();
    let tick = config.tick_seconds.max(0.001);
    let mut damage_dealt = 0u64;
    let mut damage_upgrades = 0u32;

    while engine.elapsed() < duration && !engine.is_finished() {
        let result = engine.advance(tick);
        for event in &result.events {
            if let CombatEvent::DamageDealt { damage, .. } = event {
                damage_dealt += *damage as u64;
            }
        }

        if config.buy_upgrades {
            while engine
                .purchase_run_upgrade(RunUpgrade::DamageIncrease)
                .is_some()
            {
                damage_upgrades += 1;
            }
        }
    }

    let stats = *engine.stats();
    Ok(RunSummary {
        elapsed: engine.elapsed(),
        spawned: stats.spawned,
        kills: stats.kills,
        boss_kills: stats.boss_kills,
        gold: stats.gold_earned,
        gems: stats.gems_earned,
        peak_alive: stats.peak_alive,
        damage_dealt,
        damage_upgrades,
    })
}
