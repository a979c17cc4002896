//! Caster capability derived from the upgrade layers.
//!
//! Rebuilt from the record every tick so purchases land on the next shot.

use super::damage::DamageModifier;
use crate::core::constants::{
    BASE_CRIT_CHANCE_PERCENT, BASE_CRIT_DAMAGE_PERCENT, MIN_COOLDOWN_MULTIPLIER,
    PLAYER_BASE_DAMAGE, PLAYER_BASE_HP, PLAYER_BASE_RANGE,
};
use crate::save::record::SaveRecord;
use crate::upgrades::orbs::{orb_or_default, PassiveItem};

/// Gather every damage modifier source for one attack.
///
/// Orb damage abilities pass through as-is. The permanent and per-run damage
/// upgrades are converted into Increase-stage modifiers and skipped while
/// they are still neutral.
pub fn collect_modifiers(record: &SaveRecord, orb: &PassiveItem) -> Vec<DamageModifier> {
    let mut modifiers = orb.damage_modifiers();

    let permanent = record.permanent_upgrades.damage_multiplier();
    if permanent != 1.0 {
        modifiers.push(DamageModifier::increase(permanent));
    }

    let run = record.run_upgrades.damage_multiplier();
    if run != 1.0 {
        modifiers.push(DamageModifier::increase(run));
    }

    modifiers
}

#[derive(Debug, Clone, PartialEq)]
pub struct CasterStats {
    pub base_damage: f64,
    pub modifiers: Vec<DamageModifier>,
    /// Probability in `[0, 1]`.
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    /// Cooldowns tick down at `delta / cooldown_multiplier`.
    pub cooldown_multiplier: f64,
    pub range: f64,
    pub gold_multiplier: f64,
    pub silver_multiplier: f64,
    pub max_hp: f64,
}

impl CasterStats {
    pub fn from_record(record: &SaveRecord) -> Self {
        let orb = orb_or_default(&record.selected_orb);
        let permanent = &record.permanent_upgrades;
        let run = &record.run_upgrades;

        let crit_percent = BASE_CRIT_CHANCE_PERCENT
            + run.crit_chance_percent()
            + permanent.crit_chance_percent();
        let crit_chance = (crit_percent / 100.0 + orb.crit_chance_bonus()).clamp(0.0, 1.0);

        let crit_damage_percent = BASE_CRIT_DAMAGE_PERCENT
            + run.crit_damage_percent()
            + permanent.crit_damage_percent();
        let crit_multiplier = crit_damage_percent / 100.0 * orb.crit_damage_multiplier();

        let cooldown_multiplier = (run.cooldown_multiplier()
            * permanent.cooldown_multiplier()
            * orb.cooldown_multiplier())
        .max(MIN_COOLDOWN_MULTIPLIER);

        Self {
            base_damage: PLAYER_BASE_DAMAGE as f64,
            modifiers: collect_modifiers(record, orb),
            crit_chance,
            crit_multiplier,
            cooldown_multiplier,
            range: PLAYER_BASE_RANGE * permanent.range_multiplier() * orb.range_multiplier(),
            gold_multiplier: 1.0
                + run.gold_bonus_percent() / 100.0
                + permanent.gold_bonus_fraction(),
            silver_multiplier: run.silver_multiplier(),
            max_hp: (PLAYER_BASE_HP as f64 + permanent.bonus_health()) * orb.health_multiplier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::damage::CalculationStage;
    use crate::upgrades::permanent::PermanentUpgrade;
    use crate::upgrades::run::RunUpgrade;

    #[test]
    fn test_fresh_record_stats() {
        let stats = CasterStats::from_record(&SaveRecord::default());
        assert_eq!(stats.base_damage, 10.0);
        assert!((stats.crit_chance - 0.05).abs() < 1e-9);
        assert!((stats.crit_multiplier - 1.5).abs() < 1e-9);
        assert_eq!(stats.cooldown_multiplier, 1.0);
        assert_eq!(stats.range, 130.0);
        assert_eq!(stats.gold_multiplier, 1.0);
        assert_eq!(stats.max_hp, 100.0);
        // Base orb contributes a neutral Increase modifier only.
        assert_eq!(stats.modifiers.len(), 1);
    }

    #[test]
    fn test_upgrade_layers_become_increase_modifiers() {
        let mut record = SaveRecord::default();
        record.permanent_upgrades.set_level(PermanentUpgrade::Damage, 5);
        record.run_upgrades.set_level(RunUpgrade::DamageIncrease, 2);

        let orb = orb_or_default("base");
        let mods = collect_modifiers(&record, orb);

        assert_eq!(mods.len(), 3);
        assert!(mods.iter().all(|m| m.stage == CalculationStage::Increase));
        assert!((mods[1].value - 2.0).abs() < 1e-9);
        assert!((mods[2].value - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_cooldown_layers_multiply() {
        let mut record = SaveRecord::default();
        record.selected_orb = "balance".to_string();
        record.run_upgrades.set_level(RunUpgrade::CooldownReduction, 4);
        record
            .permanent_upgrades
            .set_level(PermanentUpgrade::CooldownReduction, 10);

        let stats = CasterStats::from_record(&record);
        assert!((stats.cooldown_multiplier - 0.8 * 0.7 * 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_cooldown_multiplier_fully_upgraded() {
        let mut record = SaveRecord::default();
        record.selected_orb = "ice".to_string();
        record.run_upgrades.set_level(RunUpgrade::CooldownReduction, 10);
        record
            .permanent_upgrades
            .set_level(PermanentUpgrade::CooldownReduction, 25);

        let stats = CasterStats::from_record(&record);
        assert!((stats.cooldown_multiplier - 0.5 * 0.25 * 0.9).abs() < 1e-9);
        assert!(stats.cooldown_multiplier >= MIN_COOLDOWN_MULTIPLIER);
    }

    #[test]
    fn test_crit_sources_combine() {
        let mut record = SaveRecord::default();
        record.selected_orb = "critical".to_string();
        record.run_upgrades.set_level(RunUpgrade::CriticalChance, 2);
        record
            .permanent_upgrades
            .set_level(PermanentUpgrade::CriticalDamage, 10);

        let stats = CasterStats::from_record(&record);
        // (5 + 10 + 0) / 100 + 0.15
        assert!((stats.crit_chance - 0.30).abs() < 1e-9);
        // (150 + 0 + 30) / 100 * 1.4
        assert!((stats.crit_multiplier - 2.52).abs() < 1e-9);
    }

    #[test]
    fn test_crit_chance_capped_at_one() {
        let mut record = SaveRecord::default();
        record.selected_orb = "critical".to_string();
        record.run_upgrades.set_level(RunUpgrade::CriticalChance, 19);
        let stats = CasterStats::from_record(&record);
        assert_eq!(stats.crit_chance, 1.0);
    }

    #[test]
    fn test_range_layers() {
        let mut record = SaveRecord::default();
        record.selected_orb = "angel".to_string();
        record.permanent_upgrades.set_level(PermanentUpgrade::Range, 2);
        let stats = CasterStats::from_record(&record);
        assert!((stats.range - 130.0 * 1.1 * 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_gold_layers_add() {
        let mut record = SaveRecord::default();
        record.run_upgrades.set_level(RunUpgrade::GoldIncrease, 3);
        record.permanent_upgrades.set_level(PermanentUpgrade::GoldBonus, 2);
        let stats = CasterStats::from_record(&record);
        assert!((stats.gold_multiplier - 1.4).abs() < 1e-9);
    }
}
