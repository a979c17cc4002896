//! Error types for the equip/instantiate boundary and the persisted record.

use thiserror::Error;

/// Data or programmer errors. Callers are expected to offer only known ids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown skill id: {0}")]
    UnknownSkill(String),

    #[error("unknown skill rank: {0}")]
    UnknownRank(String),

    #[error("unknown orb id: {0}")]
    UnknownOrb(String),

    #[error("all {0} skill slots are in use")]
    SlotsFull(usize),

    #[error("skill slot {0} is already equipped")]
    AlreadyEquipped(String),

    #[error("no owned skill matches {0}")]
    NotOwned(String),
}

/// Failure to decode or encode the persisted record.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save record has unsupported version {0}")]
    UnsupportedVersion(u32),
}
