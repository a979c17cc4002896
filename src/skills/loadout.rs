//! Equipped skill slots: parsing, equip/unequip, slot unlocks and turning the
//! slot list into live skill instances.

use super::inventory::SkillItem;
use super::types::{Skill, SkillKind, SkillRank};
use crate::core::constants::{MAX_SKILL_SLOTS, SKILL_SLOT_UNLOCK_COSTS};
use crate::error::GameError;
use crate::save::record::SaveRecord;

/// Split a `Kind:Rank` slot id. Rejects anything that is not exactly two
/// non-empty parts.
pub fn split_slot_id(slot_id: &str) -> Option<(&str, &str)> {
    let mut parts = slot_id.split(':');
    let kind = parts.next()?;
    let rank = parts.next()?;
    if parts.next().is_some() || kind.is_empty() || rank.is_empty() {
        return None;
    }
    Some((kind, rank))
}

/// Parse a slot id into a known kind and rank.
pub fn parse_slot_id(slot_id: &str) -> Result<(SkillKind, SkillRank), GameError> {
    let (kind, rank) =
        split_slot_id(slot_id).ok_or_else(|| GameError::UnknownSkill(slot_id.to_string()))?;
    Ok((SkillKind::from_id(kind)?, rank.parse::<SkillRank>()?))
}

pub fn slot_id(kind: SkillKind, rank: SkillRank) -> String {
    format!("{}:{}", kind.id(), rank.name())
}

/// Drop malformed entries and anything beyond the unlocked slot count.
///
/// Returns how many entries were removed.
pub fn sanitize_equipped(record: &mut SaveRecord) -> usize {
    let before = record.equipped_skills.len();
    record.equipped_skills.retain(|entry| {
        let keep = split_slot_id(entry).is_some();
        if !keep {
            log::warn!("dropping malformed skill slot entry {:?}", entry);
        }
        keep
    });
    let slots = record.max_skill_slots.min(MAX_SKILL_SLOTS);
    if record.equipped_skills.len() > slots {
        log::warn!(
            "dropping {} skill slot entries beyond {} unlocked slots",
            record.equipped_skills.len() - slots,
            slots
        );
        record.equipped_skills.truncate(slots);
    }
    before - record.equipped_skills.len()
}

/// Equip an owned skill into the first free slot.
pub fn equip(record: &mut SaveRecord, kind: SkillKind, rank: SkillRank) -> Result<usize, GameError> {
    let id = slot_id(kind, rank);
    if !record.skill_inventory.owns(kind, rank) {
        return Err(GameError::NotOwned(id));
    }
    if record.equipped_skills.contains(&id) {
        return Err(GameError::AlreadyEquipped(id));
    }
    if record.equipped_skills.len() >= record.max_skill_slots {
        return Err(GameError::SlotsFull(record.max_skill_slots));
    }
    record.equipped_skills.push(id);
    Ok(record.equipped_skills.len() - 1)
}

/// Remove the skill in `slot`. Later slots shift down.
pub fn unequip(record: &mut SaveRecord, slot: usize) -> Option<String> {
    if slot < record.equipped_skills.len() {
        Some(record.equipped_skills.remove(slot))
    } else {
        None
    }
}

/// Promote owned copies of `kind` at `rank` and keep the loadout valid.
///
/// When the last copy of an equipped `Kind:Rank` is consumed, its slot is
/// re-pointed at the promoted rank, or dropped if that rank is already
/// equipped elsewhere.
pub fn promote_skill(record: &mut SaveRecord, kind: SkillKind, rank: SkillRank) -> Option<SkillItem> {
    let promoted = record.skill_inventory.promote(kind, rank)?;
    if record.skill_inventory.owns(kind, rank) {
        return Some(promoted);
    }

    let old_id = slot_id(kind, rank);
    let new_id = promoted.slot_id();
    if let Some(pos) = record.equipped_skills.iter().position(|e| *e == old_id) {
        if record.equipped_skills.contains(&new_id) {
            record.equipped_skills.remove(pos);
        } else {
            record.equipped_skills[pos] = new_id;
        }
        log::info!("slot {} now holds {}", pos, promoted.display_name());
    }
    Some(promoted)
}

/// Gem price of the next slot, or `None` when all slots are unlocked.
pub fn next_slot_cost(current_slots: usize) -> Option<u64> {
    if current_slots >= MAX_SKILL_SLOTS {
        return None;
    }
    SKILL_SLOT_UNLOCK_COSTS.get(current_slots.checked_sub(1)?).copied()
}

/// Unlock one more skill slot for gems.
///
/// Returns the gems spent, or `None` (nothing changes) at the cap or when
/// short on gems.
pub fn unlock_skill_slot(record: &mut SaveRecord) -> Option<u64> {
    let cost = next_slot_cost(record.max_skill_slots)?;
    if record.gems < cost {
        return None;
    }
    record.gems -= cost;
    record.max_skill_slots += 1;
    log::info!(
        "unlocked skill slot {} for {} gems",
        record.max_skill_slots,
        cost
    );
    Some(cost)
}

/// Instantiate the equipped skills in slot order.
///
/// Fails on ids that are well-formed but unknown, since the record should
/// only ever hold ids the game offered.
pub fn build_loadout(record: &SaveRecord) -> Result<Vec<Skill>, GameError> {
    record
        .equipped_skills
        .iter()
        .map(|entry| parse_slot_id(entry).map(|(kind, rank)| Skill::new(kind, rank)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_slot_id() {
        assert_eq!(split_slot_id("Fireball:C"), Some(("Fireball", "C")));
        assert_eq!(split_slot_id("Fireball"), None);
        assert_eq!(split_slot_id("Fireball:C:extra"), None);
        assert_eq!(split_slot_id(":C"), None);
        assert_eq!(split_slot_id(""), None);
    }

    #[test]
    fn test_sanitize_drops_malformed() {
        let mut record = SaveRecord::default();
        record.max_skill_slots = 6;
        record.equipped_skills = vec![
            "Fireball:C".to_string(),
            "garbage".to_string(),
            "IceLance:B:x".to_string(),
            "".to_string(),
            "IceLance:A".to_string(),
        ];
        assert_eq!(sanitize_equipped(&mut record), 3);
        assert_eq!(record.equipped_skills, vec!["Fireball:C", "IceLance:A"]);
    }

    #[test]
    fn test_sanitize_truncates_to_slot_count() {
        let mut record = SaveRecord::default();
        record.equipped_skills.push("IceLance:C".to_string());
        assert_eq!(sanitize_equipped(&mut record), 1);
        assert_eq!(record.equipped_skills, vec!["Fireball:C"]);
    }

    #[test]
    fn test_build_loadout_unknown_skill() {
        let mut record = SaveRecord::default();
        record.equipped_skills = vec!["Meteor:C".to_string()];
        assert_eq!(
            build_loadout(&record),
            Err(GameError::UnknownSkill("Meteor".to_string()))
        );
    }

    #[test]
    fn test_build_loadout_order() {
        let mut record = SaveRecord::default();
        record.equipped_skills = vec!["DivineNova:S".to_string(), "Fireball:C".to_string()];
        let skills = build_loadout(&record).unwrap();
        assert_eq!(skills[0].kind, SkillKind::DivineNova);
        assert_eq!(skills[0].rank, SkillRank::S);
        assert_eq!(skills[1].kind, SkillKind::Fireball);
        assert!(skills.iter().all(|s| s.is_ready()));
    }

    #[test]
    fn test_equip_rules() {
        let mut record = SaveRecord::default();
        record.skill_inventory.add(SkillKind::IceLance, SkillRank::C);

        assert_eq!(
            equip(&mut record, SkillKind::Fireball, SkillRank::C),
            Err(GameError::AlreadyEquipped("Fireball:C".to_string()))
        );
        assert_eq!(
            equip(&mut record, SkillKind::IceLance, SkillRank::C),
            Err(GameError::SlotsFull(1))
        );
        assert_eq!(
            equip(&mut record, SkillKind::DivineNova, SkillRank::C),
            Err(GameError::NotOwned("DivineNova:C".to_string()))
        );

        record.max_skill_slots = 2;
        assert_eq!(equip(&mut record, SkillKind::IceLance, SkillRank::C), Ok(1));
        assert_eq!(unequip(&mut record, 0), Some("Fireball:C".to_string()));
        assert_eq!(record.equipped_skills, vec!["IceLance:C"]);
        assert_eq!(unequip(&mut record, 5), None);
    }

    #[test]
    fn test_slot_costs() {
        assert_eq!(next_slot_cost(1), Some(100));
        assert_eq!(next_slot_cost(2), Some(200));
        assert_eq!(next_slot_cost(5), Some(1600));
        assert_eq!(next_slot_cost(6), None);
    }

    #[test]
    fn test_unlock_skill_slot() {
        let mut record = SaveRecord::default();
        record.gems = 250;

        assert_eq!(unlock_skill_slot(&mut record), Some(100));
        assert_eq!(record.max_skill_slots, 2);
        assert_eq!(unlock_skill_slot(&mut record), None);
        assert_eq!(record.gems, 150);
        assert_eq!(record.max_skill_slots, 2);
    }

    #[test]
    fn test_unlock_stops_at_max() {
        let mut record = SaveRecord::default();
        record.gems = u64::MAX;
        for _ in 0..10 {
            unlock_skill_slot(&mut record);
        }
        assert_eq!(record.max_skill_slots, MAX_SKILL_SLOTS);
    }

    #[test]
    fn test_promote_last_equipped_copy_repoints_slot() {
        let mut record = SaveRecord::default();
        for _ in 0..9 {
            record.skill_inventory.add(SkillKind::Fireball, SkillRank::C);
        }

        let promoted = promote_skill(&mut record, SkillKind::Fireball, SkillRank::C).unwrap();

        assert_eq!(promoted.rank, SkillRank::B);
        assert!(!record.skill_inventory.owns(SkillKind::Fireball, SkillRank::C));
        assert_eq!(record.equipped_skills, vec!["Fireball:B"]);
        let skills = build_loadout(&record).unwrap();
        assert_eq!(skills[0].rank, SkillRank::B);
    }

    #[test]
    fn test_promote_drops_slot_when_next_rank_equipped() {
        let mut record = SaveRecord::default();
        record.max_skill_slots = 2;
        record.skill_inventory.add(SkillKind::Fireball, SkillRank::B);
        equip(&mut record, SkillKind::Fireball, SkillRank::B).unwrap();
        for _ in 0..9 {
            record.skill_inventory.add(SkillKind::Fireball, SkillRank::C);
        }

        promote_skill(&mut record, SkillKind::Fireball, SkillRank::C).unwrap();

        assert_eq!(record.equipped_skills, vec!["Fireball:B"]);
    }

    #[test]
    fn test_promote_with_spare_copies_keeps_slot() {
        let mut record = SaveRecord::default();
        for _ in 0..10 {
            record.skill_inventory.add(SkillKind::Fireball, SkillRank::C);
        }
        promote_skill(&mut record, SkillKind::Fireball, SkillRank::C).unwrap();
        assert_eq!(record.equipped_skills, vec!["Fireball:C"]);
    }
}
