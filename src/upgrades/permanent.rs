//! Permanent upgrades bought with gold. Survive across runs and can be
//! reset for a full refund.

use super::ledger::{UpgradeKind, UpgradeLedger};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PermanentUpgrade {
    Damage,
    CriticalChance,
    CriticalDamage,
    Health,
    Armor,
    Regeneration,
    Range,
    CooldownReduction,
    MovementSpeed,
    GoldBonus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeCategory {
    Attack,
    Defense,
    Utility,
}

impl PermanentUpgrade {
    pub const ALL: [PermanentUpgrade; 10] = [
        PermanentUpgrade::Damage,
        PermanentUpgrade::CriticalChance,
        PermanentUpgrade::CriticalDamage,
        PermanentUpgrade::Health,
        PermanentUpgrade::Armor,
        PermanentUpgrade::Regeneration,
        PermanentUpgrade::Range,
        PermanentUpgrade::CooldownReduction,
        PermanentUpgrade::MovementSpeed,
        PermanentUpgrade::GoldBonus,
    ];

    /// Value gained per level. Units depend on the kind: flat damage, crit
    /// percent points, max hp, or a fraction for range/cooldown/gold.
    pub fn base_increase(&self) -> f64 {
        match self {
            PermanentUpgrade::Damage => 2.0,
            PermanentUpgrade::CriticalChance => 1.0,
            PermanentUpgrade::CriticalDamage => 3.0,
            PermanentUpgrade::Health => 20.0,
            PermanentUpgrade::Armor => 1.0,
            PermanentUpgrade::Regeneration => 2.0,
            PermanentUpgrade::Range => 0.05,
            PermanentUpgrade::CooldownReduction => 0.03,
            PermanentUpgrade::MovementSpeed => 0.02,
            PermanentUpgrade::GoldBonus => 0.05,
        }
    }

    pub fn category(&self) -> UpgradeCategory {
        match self {
            PermanentUpgrade::Damage
            | PermanentUpgrade::CriticalChance
            | PermanentUpgrade::CriticalDamage => UpgradeCategory::Attack,
            PermanentUpgrade::Health | PermanentUpgrade::Armor | PermanentUpgrade::Regeneration => {
                UpgradeCategory::Defense
            }
            PermanentUpgrade::Range
            | PermanentUpgrade::CooldownReduction
            | PermanentUpgrade::MovementSpeed
            | PermanentUpgrade::GoldBonus => UpgradeCategory::Utility,
        }
    }

    /// Linear value at `level`.
    pub fn value_at_level(&self, level: u32) -> f64 {
        self.base_increase() * level as f64
    }
}

impl UpgradeKind for PermanentUpgrade {
    fn base_cost(&self) -> f64 {
        match self {
            PermanentUpgrade::Damage => 10.0,
            PermanentUpgrade::CriticalChance => 25.0,
            PermanentUpgrade::CriticalDamage => 30.0,
            PermanentUpgrade::Health => 15.0,
            PermanentUpgrade::Armor => 20.0,
            PermanentUpgrade::Regeneration => 25.0,
            PermanentUpgrade::Range => 15.0,
            PermanentUpgrade::CooldownReduction => 20.0,
            PermanentUpgrade::MovementSpeed => 18.0,
            PermanentUpgrade::GoldBonus => 22.0,
        }
    }

    fn cost_multiplier(&self) -> f64 {
        match self {
            PermanentUpgrade::Damage => 1.15,
            PermanentUpgrade::CriticalChance => 1.8,
            PermanentUpgrade::CriticalDamage => 1.6,
            PermanentUpgrade::Health => 1.4,
            PermanentUpgrade::Armor => 1.7,
            PermanentUpgrade::Regeneration => 1.5,
            PermanentUpgrade::Range => 1.5,
            PermanentUpgrade::CooldownReduction => 1.7,
            PermanentUpgrade::MovementSpeed => 1.3,
            PermanentUpgrade::GoldBonus => 1.4,
        }
    }

    fn max_level(&self) -> u32 {
        match self {
            PermanentUpgrade::Damage => 50,
            PermanentUpgrade::CriticalChance => 30,
            PermanentUpgrade::CriticalDamage => 25,
            PermanentUpgrade::Health => 40,
            PermanentUpgrade::Armor => 20,
            PermanentUpgrade::Regeneration => 35,
            PermanentUpgrade::Range => 14,
            PermanentUpgrade::CooldownReduction => 25,
            PermanentUpgrade::MovementSpeed => 30,
            PermanentUpgrade::GoldBonus => 20,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PermanentUpgrade::Damage => "Damage",
            PermanentUpgrade::CriticalChance => "Critical Chance",
            PermanentUpgrade::CriticalDamage => "Critical Damage",
            PermanentUpgrade::Health => "Health",
            PermanentUpgrade::Armor => "Armor",
            PermanentUpgrade::Regeneration => "Regeneration",
            PermanentUpgrade::Range => "Range",
            PermanentUpgrade::CooldownReduction => "Cooldown Reduction",
            PermanentUpgrade::MovementSpeed => "Movement Speed",
            PermanentUpgrade::GoldBonus => "Gold Bonus",
        }
    }
}

pub type PermanentLedger = UpgradeLedger<PermanentUpgrade>;

impl UpgradeLedger<PermanentUpgrade> {
    pub fn value(&self, kind: PermanentUpgrade) -> f64 {
        kind.value_at_level(self.level(kind))
    }

    /// Flat damage bonus expressed as an Increase-stage multiplier over the
    /// caster's base damage of 10.
    pub fn damage_multiplier(&self) -> f64 {
        (10.0 + self.value(PermanentUpgrade::Damage)) / 10.0
    }

    /// `1 + range fraction`.
    pub fn range_multiplier(&self) -> f64 {
        1.0 + self.value(PermanentUpgrade::Range)
    }

    /// `1 - reduction fraction`. Below 1 means faster recovery.
    pub fn cooldown_multiplier(&self) -> f64 {
        1.0 - self.value(PermanentUpgrade::CooldownReduction)
    }

    pub fn crit_chance_percent(&self) -> f64 {
        self.value(PermanentUpgrade::CriticalChance)
    }

    pub fn crit_damage_percent(&self) -> f64 {
        self.value(PermanentUpgrade::CriticalDamage)
    }

    pub fn gold_bonus_fraction(&self) -> f64 {
        self.value(PermanentUpgrade::GoldBonus)
    }

    pub fn bonus_health(&self) -> f64 {
        self.value(PermanentUpgrade::Health)
    }

    /// Clear every level and return the exact cumulative spend.
    ///
    /// The caller credits the refund to its gold balance.
    pub fn reset_all(&mut self) -> u64 {
        let refund = self.total_spent();
        self.clear();
        log::info!("permanent upgrades reset, refunding {} gold", refund);
        refund
    }
}
