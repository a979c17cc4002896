//! Simulation configuration.

use crate::core::constants::{DEFAULT_ORB_ID, MAX_RUN_SECONDS};

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Game seconds per run, capped at the run time limit
    pub duration_seconds: f64,

    /// Fixed step passed to `advance`
    pub tick_seconds: f64,

    /// Passive item equipped for every run
    pub orb: String,

    /// Spend silver on damage upgrades as soon as affordable
    pub buy_upgrades: bool,

    /// Minutes covered by the balance table
    pub curve_minutes: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            duration_seconds: MAX_RUN_SECONDS,
            tick_seconds: 0.05,
            orb: DEFAULT_ORB_ID.to_string(),
            buy_upgrades: true,
            curve_minutes: 10,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// A handful of short runs for a quick sanity pass.
    pub fn quick_check() -> Self {
        Self {
            num_runs: 10,
            duration_seconds: 120.0,
            ..Default::default()
        }
    }

    /// Full-length runs with one orb, for comparing passive items.
    pub fn orb_comparison(orb: &str) -> Self {
        Self {
            num_runs: 50,
            orb: orb.to_string(),
            ..Default::default()
        }
    }

    /// Runs where silver is hoarded, to see how much upgrades matter.
    pub fn no_upgrades() -> Self {
        Self {
            buy_upgrades: false,
            ..Default::default()
        }
    }

    /// Duration actually simulated.
    pub fn effective_duration(&self) -> f64 {
        self.duration_seconds.clamp(0.0, MAX_RUN_SECONDS)
    }
}
