//! Per-run upgrades bought with silver. Cleared at stage end with no refund.

use super::ledger::{UpgradeKind, UpgradeLedger};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RunUpgrade {
    DamageIncrease,
    CooldownReduction,
    CriticalChance,
    CriticalDamage,
    GoldIncrease,
    SilverIncrease,
    GemIncrease,
    EnemySpawnSpeed,
    EnemySpawnCount,
}

impl RunUpgrade {
    pub const ALL: [RunUpgrade; 9] = [
        RunUpgrade::DamageIncrease,
        RunUpgrade::CooldownReduction,
        RunUpgrade::CriticalChance,
        RunUpgrade::CriticalDamage,
        RunUpgrade::GoldIncrease,
        RunUpgrade::SilverIncrease,
        RunUpgrade::GemIncrease,
        RunUpgrade::EnemySpawnSpeed,
        RunUpgrade::EnemySpawnCount,
    ];

    /// Bonus per level: percent points, except gem and spawn count which
    /// are whole units.
    pub fn bonus_per_level(&self) -> f64 {
        match self {
            RunUpgrade::DamageIncrease => 10.0,
            RunUpgrade::CooldownReduction => 5.0,
            RunUpgrade::CriticalChance => 5.0,
            RunUpgrade::CriticalDamage => 10.0,
            RunUpgrade::GoldIncrease => 10.0,
            RunUpgrade::SilverIncrease => 10.0,
            RunUpgrade::GemIncrease => 1.0,
            RunUpgrade::EnemySpawnSpeed => 5.0,
            RunUpgrade::EnemySpawnCount => 1.0,
        }
    }

    pub fn max_bonus(&self) -> f64 {
        match self {
            RunUpgrade::DamageIncrease => 200.0,
            RunUpgrade::CooldownReduction => 50.0,
            RunUpgrade::CriticalChance => 95.0,
            RunUpgrade::CriticalDamage => 350.0,
            RunUpgrade::GoldIncrease => 300.0,
            RunUpgrade::SilverIncrease => 200.0,
            RunUpgrade::GemIncrease => 5.0,
            RunUpgrade::EnemySpawnSpeed => 100.0,
            RunUpgrade::EnemySpawnCount => 3.0,
        }
    }

    /// `min(bonus_per_level * level, max_bonus)`.
    pub fn bonus_at_level(&self, level: u32) -> f64 {
        (self.bonus_per_level() * level as f64).min(self.max_bonus())
    }
}

impl UpgradeKind for RunUpgrade {
    fn base_cost(&self) -> f64 {
        match self {
            RunUpgrade::DamageIncrease => 10.0,
            RunUpgrade::CooldownReduction => 15.0,
            RunUpgrade::CriticalChance => 20.0,
            RunUpgrade::CriticalDamage => 12.0,
            RunUpgrade::GoldIncrease => 8.0,
            RunUpgrade::SilverIncrease => 10.0,
            RunUpgrade::GemIncrease => 100.0,
            RunUpgrade::EnemySpawnSpeed => 25.0,
            RunUpgrade::EnemySpawnCount => 150.0,
        }
    }

    fn cost_multiplier(&self) -> f64 {
        match self {
            RunUpgrade::DamageIncrease => 1.15,
            RunUpgrade::CooldownReduction => 1.2,
            RunUpgrade::CriticalChance => 1.25,
            RunUpgrade::CriticalDamage => 1.1,
            RunUpgrade::GoldIncrease => 1.12,
            RunUpgrade::SilverIncrease => 1.15,
            RunUpgrade::GemIncrease => 2.0,
            RunUpgrade::EnemySpawnSpeed => 1.3,
            RunUpgrade::EnemySpawnCount => 2.5,
        }
    }

    fn max_level(&self) -> u32 {
        match self {
            RunUpgrade::DamageIncrease => 20,
            RunUpgrade::CooldownReduction => 10,
            RunUpgrade::CriticalChance => 19,
            RunUpgrade::CriticalDamage => 35,
            RunUpgrade::GoldIncrease => 30,
            RunUpgrade::SilverIncrease => 20,
            RunUpgrade::GemIncrease => 5,
            RunUpgrade::EnemySpawnSpeed => 20,
            RunUpgrade::EnemySpawnCount => 3,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            RunUpgrade::DamageIncrease => "Damage Increase",
            RunUpgrade::CooldownReduction => "Cooldown Reduction",
            RunUpgrade::CriticalChance => "Critical Chance",
            RunUpgrade::CriticalDamage => "Critical Damage",
            RunUpgrade::GoldIncrease => "Gold Increase",
            RunUpgrade::SilverIncrease => "Silver Increase",
            RunUpgrade::GemIncrease => "Gem Increase",
            RunUpgrade::EnemySpawnSpeed => "Enemy Spawn Speed",
            RunUpgrade::EnemySpawnCount => "Enemy Spawn Count",
        }
    }
}

pub type RunLedger = UpgradeLedger<RunUpgrade>;

impl UpgradeLedger<RunUpgrade> {
    pub fn bonus(&self, kind: RunUpgrade) -> f64 {
        kind.bonus_at_level(self.level(kind))
    }

    /// `1 + damage% / 100`, fed into the Increase stage.
    pub fn damage_multiplier(&self) -> f64 {
        1.0 + self.bonus(RunUpgrade::DamageIncrease) / 100.0
    }

    /// `1 - reduction% / 100`. Below 1 means faster recovery.
    pub fn cooldown_multiplier(&self) -> f64 {
        1.0 - self.bonus(RunUpgrade::CooldownReduction) / 100.0
    }

    pub fn crit_chance_percent(&self) -> f64 {
        self.bonus(RunUpgrade::CriticalChance)
    }

    pub fn crit_damage_percent(&self) -> f64 {
        self.bonus(RunUpgrade::CriticalDamage)
    }

    pub fn gold_bonus_percent(&self) -> f64 {
        self.bonus(RunUpgrade::GoldIncrease)
    }

    pub fn silver_multiplier(&self) -> f64 {
        1.0 + self.bonus(RunUpgrade::SilverIncrease) / 100.0
    }

    pub fn gem_bonus(&self) -> u64 {
        self.bonus(RunUpgrade::GemIncrease) as u64
    }

    /// Spawn timer runs this many times faster.
    pub fn spawn_speed_multiplier(&self) -> f64 {
        1.0 + self.bonus(RunUpgrade::EnemySpawnSpeed) / 100.0
    }

    pub fn spawn_count_bonus(&self) -> u32 {
        self.bonus(RunUpgrade::EnemySpawnCount) as u32
    }
}
