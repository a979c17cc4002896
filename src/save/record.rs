//! The flat persisted state record.
//!
//! The core only reads and writes this struct in memory. Turning it into
//! bytes on disk is the embedding application's job; `to_json`/`from_json`
//! are provided for convenience.

use crate::core::constants::{
    DEFAULT_MAX_SPEED_MULTIPLIER, DEFAULT_ORB_ID, DEFAULT_SPEED_MULTIPLIER,
    PREMIUM_MAX_SPEED_MULTIPLIER, PREMIUM_SPEED_UNLOCK_COST, STARTING_SKILL_SLOTS,
};
use crate::error::SaveError;
use crate::skills::inventory::SkillInventory;
use crate::skills::types::{SkillKind, SkillRank};
use crate::upgrades::permanent::PermanentLedger;
use crate::upgrades::run::RunLedger;
use serde::{Deserialize, Deserializer, Serialize};

pub const SAVE_VERSION: u32 = 1;

fn default_version() -> u32 {
    SAVE_VERSION
}

fn default_orb() -> String {
    DEFAULT_ORB_ID.to_string()
}

fn default_speed() -> f64 {
    DEFAULT_SPEED_MULTIPLIER
}

fn default_max_speed() -> f64 {
    DEFAULT_MAX_SPEED_MULTIPLIER
}

fn default_slots() -> usize {
    STARTING_SKILL_SLOTS
}

fn default_stages() -> u32 {
    1
}

/// Keep string entries and drop anything else, so one bad slot never costs
/// the rest of the record.
fn string_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|entry| match entry {
            serde_json::Value::String(id) => Some(id),
            other => {
                log::warn!("dropping non-string skill slot entry {}", other);
                None
            }
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Persistent currency for permanent upgrades.
    #[serde(default)]
    pub gold: u64,
    /// Persistent currency from bosses, spent on skill slots.
    #[serde(default)]
    pub gems: u64,
    /// Run-local currency, zeroed at stage end.
    #[serde(default)]
    pub silver: u64,
    #[serde(default)]
    pub premium: u64,

    #[serde(default)]
    pub permanent_upgrades: PermanentLedger,
    #[serde(default)]
    pub run_upgrades: RunLedger,

    /// `Kind:Rank` references, in firing priority order.
    #[serde(default, deserialize_with = "string_entries")]
    pub equipped_skills: Vec<String>,
    #[serde(default)]
    pub skill_inventory: SkillInventory,
    #[serde(default = "default_orb")]
    pub selected_orb: String,

    #[serde(default = "default_speed")]
    pub current_speed_multiplier: f64,
    #[serde(default = "default_max_speed")]
    pub max_speed_multiplier: f64,
    #[serde(default = "default_slots")]
    pub max_skill_slots: usize,
    #[serde(default = "default_stages")]
    pub unlocked_stages: u32,
}

impl Default for SaveRecord {
    /// Fresh profile: one Fireball C owned and equipped, one slot.
    fn default() -> Self {
        let mut skill_inventory = SkillInventory::new();
        let starter = skill_inventory.add(SkillKind::Fireball, SkillRank::C);
        Self {
            version: SAVE_VERSION,
            gold: 0,
            gems: 0,
            silver: 0,
            premium: 0,
            permanent_upgrades: PermanentLedger::new(),
            run_upgrades: RunLedger::new(),
            equipped_skills: vec![starter.slot_id()],
            skill_inventory,
            selected_orb: default_orb(),
            current_speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
            max_speed_multiplier: DEFAULT_MAX_SPEED_MULTIPLIER,
            max_skill_slots: STARTING_SKILL_SLOTS,
            unlocked_stages: 1,
        }
    }
}

impl SaveRecord {
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a record and drop malformed skill-slot entries.
    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        let mut record: SaveRecord = serde_json::from_str(json)?;
        if record.version > SAVE_VERSION {
            return Err(SaveError::UnsupportedVersion(record.version));
        }
        record.version = SAVE_VERSION;
        crate::skills::loadout::sanitize_equipped(&mut record);
        Ok(record)
    }

    /// Step 1x -> 2x -> 3x (if unlocked) -> 1x.
    pub fn cycle_speed(&mut self) -> f64 {
        let next = self.current_speed_multiplier.floor() + 1.0;
        self.current_speed_multiplier = if next > self.max_speed_multiplier {
            DEFAULT_SPEED_MULTIPLIER
        } else {
            next
        };
        self.current_speed_multiplier
    }

    /// Raise the speed cap to 3x for premium currency.
    ///
    /// Returns false (nothing changes) if already unlocked or too poor.
    pub fn unlock_speed_tier(&mut self) -> bool {
        if self.max_speed_multiplier >= PREMIUM_MAX_SPEED_MULTIPLIER
            || self.premium < PREMIUM_SPEED_UNLOCK_COST
        {
            return false;
        }
        self.premium -= PREMIUM_SPEED_UNLOCK_COST;
        self.max_speed_multiplier = PREMIUM_MAX_SPEED_MULTIPLIER;
        log::info!("unlocked {}x game speed", PREMIUM_MAX_SPEED_MULTIPLIER);
        true
    }

    /// Refund every permanent upgrade into gold.
    pub fn reset_permanent_upgrades(&mut self) -> u64 {
        let refund = self.permanent_upgrades.reset_all();
        self.gold += refund;
        refund
    }

    /// Discard run-local progress. No refund.
    pub fn clear_run_progress(&mut self) {
        self.silver = 0;
        self.run_upgrades.clear();
    }
}
