//! Skill catalog, owned inventory and the equipped loadout.

pub mod inventory;
pub mod loadout;
pub mod types;

pub use inventory::{SkillInventory, SkillItem};
pub use loadout::{
    build_loadout, equip, parse_slot_id, promote_skill, unequip, unlock_skill_slot,
};
pub use types::{Skill, SkillBehavior, SkillKind, SkillRank};
