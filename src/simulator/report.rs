//! Simulation report generation.

use super::runner::RunSummary;
use crate::core::progression::{balance_curve, BalanceSample};
use serde::Serialize;

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,

    // Aggregated stats
    pub avg_elapsed: f64,
    pub avg_kills: f64,
    pub avg_boss_kills: f64,
    pub avg_gold: f64,
    pub avg_gems: f64,
    pub avg_damage_dealt: f64,
    pub avg_damage_upgrades: f64,
    pub avg_peak_alive: f64,
    pub max_peak_alive: usize,
    /// Kills divided by spawns across all runs.
    pub kill_ratio: f64,

    /// Enemy health vs. expected player damage, minute by minute.
    pub balance: Vec<BalanceSample>,

    // Individual run stats for detailed analysis
    pub runs: Vec<RunSummary>,
}

fn average(runs: &[RunSummary], pick: impl Fn(&RunSummary) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(pick).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunSummary>, curve_minutes: u32) -> Self {
        let total_kills: u64 = runs.iter().map(|r| r.kills).sum();
        let total_spawned: u64 = runs.iter().map(|r| r.spawned).sum();

        Self {
            num_runs: runs.len() as u32,
            avg_elapsed: average(&runs, |r| r.elapsed),
            avg_kills: average(&runs, |r| r.kills as f64),
            avg_boss_kills: average(&runs, |r| r.boss_kills as f64),
            avg_gold: average(&runs, |r| r.gold as f64),
            avg_gems: average(&runs, |r| r.gems as f64),
            avg_damage_dealt: average(&runs, |r| r.damage_dealt as f64),
            avg_damage_upgrades: average(&runs, |r| r.damage_upgrades as f64),
            avg_peak_alive: average(&runs, |r| r.peak_alive as f64),
            max_peak_alive: runs.iter().map(|r| r.peak_alive).max().unwrap_or(0),
            kill_ratio: total_kills as f64 / total_spawned.max(1) as f64,
            balance: balance_curve(curve_minutes),
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("               (Using the Real Run Engine)\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {}, avg length {:.0}s\n\n",
            self.num_runs, self.avg_elapsed
        ));

        report.push_str("── COMBAT ───────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Kills:           {:.0}\n", self.avg_kills));
        report.push_str(&format!("  Avg Boss Kills:      {:.2}\n", self.avg_boss_kills));
        report.push_str(&format!(
            "  Kill Ratio:          {:.1}%\n",
            self.kill_ratio * 100.0
        ));
        report.push_str(&format!(
            "  Avg Damage Dealt:    {:.0}\n",
            self.avg_damage_dealt
        ));
        report.push_str(&format!(
            "  Peak Enemies Alive:  {:.1} avg, {} max\n\n",
            self.avg_peak_alive, self.max_peak_alive
        ));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Gold:            {:.0}\n", self.avg_gold));
        report.push_str(&format!("  Avg Gems:            {:.2}\n", self.avg_gems));
        report.push_str(&format!(
            "  Avg Damage Upgrades: {:.1}\n\n",
            self.avg_damage_upgrades
        ));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let overrun_rating = if self.kill_ratio > 0.95 {
            "TOO EASY - Nearly everything dies"
        } else if self.kill_ratio > 0.6 {
            "GOOD - Pressure builds but the caster keeps up"
        } else if self.kill_ratio > 0.3 {
            "HARD - Enemies pile up"
        } else {
            "TOO HARD - The field is overrun"
        };
        report.push_str(&format!("  Overrun Rating:  {}\n", overrun_rating));

        if let Some(worst) = self
            .balance
            .iter()
            .max_by(|a, b| a.ratio.total_cmp(&b.ratio))
        {
            if worst.ratio > 2.0 {
                report.push_str(&format!(
                    "  ⚠️  Minute {} enemies are {:.1}x ahead of expected damage\n",
                    worst.minute, worst.ratio
                ));
            }
        }
        if self.avg_boss_kills < 0.5 && self.avg_elapsed >= 120.0 {
            report.push_str("  ⚠️  Bosses rarely die - boss health too high?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Per-minute table of enemy health growth against expected player damage.
    pub fn balance_curve_text(&self) -> String {
        let mut text = String::new();
        text.push_str("── BALANCE CURVE ────────────────────────────────────────────────\n");
        text.push_str("  Minute   Enemy HP x   Player Dmg x   Ratio\n");
        text.push_str("  ──────   ──────────   ────────────   ─────\n");
        for sample in &self.balance {
            text.push_str(&format!(
                "  {:6}   {:10.2}   {:12.2}   {:5.2}\n",
                sample.minute,
                sample.enemy_health_multiplier,
                sample.expected_player_multiplier,
                sample.ratio
            ));
        }
        text
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
