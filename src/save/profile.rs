//! Between-run profile actions: loadout, ranks, permanent upgrades and
//! game-speed settings.
//!
//! `Profile` owns the record and the persistence sink the same way
//! `RunEngine` does, and persists after every action that changed state.

use super::record::SaveRecord;
use super::Persist;
use crate::error::GameError;
use crate::skills::inventory::SkillItem;
use crate::skills::loadout;
use crate::skills::types::{SkillKind, SkillRank};
use crate::upgrades::orbs::find_orb;
use crate::upgrades::permanent::PermanentUpgrade;

pub struct Profile<P: Persist> {
    record: SaveRecord,
    persist: P,
}

impl<P: Persist> Profile<P> {
    pub fn new(record: SaveRecord, persist: P) -> Self {
        Self { record, persist }
    }

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }

    /// Hand the record back, e.g. to start a run with it.
    pub fn into_record(self) -> SaveRecord {
        self.record
    }

    fn save(&mut self) {
        self.persist.persist(&self.record);
    }

    pub fn equip(&mut self, kind: SkillKind, rank: SkillRank) -> Result<usize, GameError> {
        let slot = loadout::equip(&mut self.record, kind, rank)?;
        self.save();
        Ok(slot)
    }

    pub fn unequip(&mut self, slot: usize) -> Option<String> {
        let removed = loadout::unequip(&mut self.record, slot)?;
        self.save();
        Some(removed)
    }

    pub fn unlock_skill_slot(&mut self) -> Option<u64> {
        let cost = loadout::unlock_skill_slot(&mut self.record)?;
        self.save();
        Some(cost)
    }

    /// Add a newly acquired copy to the inventory.
    pub fn add_skill(&mut self, kind: SkillKind, rank: SkillRank) -> SkillItem {
        let item = self.record.skill_inventory.add(kind, rank);
        self.save();
        item
    }

    pub fn promote_skill(&mut self, kind: SkillKind, rank: SkillRank) -> Option<SkillItem> {
        let promoted = loadout::promote_skill(&mut self.record, kind, rank)?;
        self.save();
        Some(promoted)
    }

    /// Buy one permanent level with gold.
    pub fn purchase_permanent(&mut self, kind: PermanentUpgrade) -> Option<u64> {
        let cost = self
            .record
            .permanent_upgrades
            .purchase(kind, &mut self.record.gold)?;
        self.save();
        Some(cost)
    }

    /// Refund every permanent level. Nothing is saved when there was
    /// nothing to refund.
    pub fn reset_permanent_upgrades(&mut self) -> u64 {
        if self.record.permanent_upgrades.is_empty() {
            return 0;
        }
        let refund = self.record.reset_permanent_upgrades();
        self.save();
        refund
    }

    pub fn unlock_speed_tier(&mut self) -> bool {
        if !self.record.unlock_speed_tier() {
            return false;
        }
        self.save();
        true
    }

    pub fn cycle_speed(&mut self) -> f64 {
        let speed = self.record.cycle_speed();
        self.save();
        speed
    }

    /// Equip a passive item from the catalog.
    pub fn select_orb(&mut self, id: &str) -> Result<(), GameError> {
        let orb = find_orb(id)?;
        self.record.selected_orb = orb.id.to_string();
        self.save();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::NoPersist;

    #[test]
    fn test_select_orb_validates_id() {
        let mut profile = Profile::new(SaveRecord::default(), NoPersist);
        assert_eq!(
            profile.select_orb("nope"),
            Err(GameError::UnknownOrb("nope".to_string()))
        );
        assert_eq!(profile.record().selected_orb, "base");

        profile.select_orb("fire").unwrap();
        assert_eq!(profile.record().selected_orb, "fire");
    }

    #[test]
    fn test_reset_without_levels_is_noop() {
        let mut record = SaveRecord::default();
        record.gold = 40;
        let mut profile = Profile::new(record.clone(), NoPersist);
        assert_eq!(profile.reset_permanent_upgrades(), 0);
        assert_eq!(profile.into_record(), record);
    }
}
