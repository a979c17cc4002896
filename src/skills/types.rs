//! Skill kinds, ranks and the per-instance skill state.

use crate::core::element::Element;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Power tier of a skill, upgraded by consuming same-rank copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillRank {
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl SkillRank {
    pub const ALL: [SkillRank; 6] = [
        SkillRank::C,
        SkillRank::B,
        SkillRank::A,
        SkillRank::S,
        SkillRank::SS,
        SkillRank::SSS,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkillRank::C => "C",
            SkillRank::B => "B",
            SkillRank::A => "A",
            SkillRank::S => "S",
            SkillRank::SS => "SS",
            SkillRank::SSS => "SSS",
        }
    }

    /// Same-rank copies consumed to promote. 0 for the terminal rank.
    pub fn upgrade_requirement(&self) -> usize {
        match self {
            SkillRank::C => 10,
            SkillRank::B => 10,
            SkillRank::A => 5,
            SkillRank::S => 4,
            SkillRank::SS => 3,
            SkillRank::SSS => 0,
        }
    }

    pub fn next(&self) -> Option<SkillRank> {
        match self {
            SkillRank::C => Some(SkillRank::B),
            SkillRank::B => Some(SkillRank::A),
            SkillRank::A => Some(SkillRank::S),
            SkillRank::S => Some(SkillRank::SS),
            SkillRank::SS => Some(SkillRank::SSS),
            SkillRank::SSS => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for SkillRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkillRank {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillRank::ALL
            .iter()
            .copied()
            .find(|rank| rank.name() == s)
            .ok_or_else(|| GameError::UnknownRank(s.to_string()))
    }
}

/// Constant identity of a skill kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillBehavior {
    pub name: &'static str,
    pub base_cooldown: f64,
    pub element: Element,
    pub base_damage_multiplier: f64,
    /// Indexed by `SkillRank` order, C through SSS.
    pub rank_multipliers: [f64; 6],
    /// Lands on the next projectile step instead of travelling.
    pub is_instant: bool,
    /// Hits everything in range at once.
    pub is_aoe: bool,
}

impl SkillBehavior {
    pub fn rank_multiplier(&self, rank: SkillRank) -> f64 {
        self.rank_multipliers[rank.index()]
    }
}

const DEFAULT_RANK_MULTIPLIERS: [f64; 6] = [1.0, 1.3, 1.7, 2.2, 2.8, 3.5];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkillKind {
    LightningStrike,
    Fireball,
    IceLance,
    DivineNova,
}

impl SkillKind {
    pub const ALL: [SkillKind; 4] = [
        SkillKind::LightningStrike,
        SkillKind::Fireball,
        SkillKind::IceLance,
        SkillKind::DivineNova,
    ];

    /// Identifier used in slot ids and the persisted record.
    pub fn id(&self) -> &'static str {
        match self {
            SkillKind::LightningStrike => "LightningStrike",
            SkillKind::Fireball => "Fireball",
            SkillKind::IceLance => "IceLance",
            SkillKind::DivineNova => "DivineNova",
        }
    }

    pub fn from_id(id: &str) -> Result<SkillKind, GameError> {
        SkillKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| GameError::UnknownSkill(id.to_string()))
    }

    pub fn behavior(&self) -> SkillBehavior {
        match self {
            SkillKind::LightningStrike => SkillBehavior {
                name: "Lightning Strike",
                base_cooldown: 0.5,
                element: Element::Lightning,
                base_damage_multiplier: 1.3,
                rank_multipliers: [1.0, 1.4, 1.9, 2.7, 3.6, 4.8],
                is_instant: true,
                is_aoe: false,
            },
            SkillKind::Fireball => SkillBehavior {
                name: "Fireball",
                base_cooldown: 0.7,
                element: Element::Fire,
                base_damage_multiplier: 1.8,
                rank_multipliers: DEFAULT_RANK_MULTIPLIERS,
                is_instant: false,
                is_aoe: false,
            },
            SkillKind::IceLance => SkillBehavior {
                name: "Ice Lance",
                base_cooldown: 0.75,
                element: Element::Cold,
                base_damage_multiplier: 1.6,
                rank_multipliers: [1.0, 1.35, 1.8, 2.4, 3.1, 4.0],
                is_instant: false,
                is_aoe: false,
            },
            SkillKind::DivineNova => SkillBehavior {
                name: "Divine Nova",
                base_cooldown: 2.0,
                element: Element::Angel,
                base_damage_multiplier: 2.5,
                rank_multipliers: [1.0, 1.5, 2.2, 3.2, 4.5, 6.0],
                is_instant: true,
                is_aoe: true,
            },
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An equipped skill with its cooldown state.
#[derive(Debug, Clone, PartialEq)]
pub struct Skill {
    pub kind: SkillKind,
    pub rank: SkillRank,
    /// Counts down; ready at or below zero.
    pub cooldown_timer: f64,
}

impl Skill {
    /// New skills start ready.
    pub fn new(kind: SkillKind, rank: SkillRank) -> Self {
        Self {
            kind,
            rank,
            cooldown_timer: 0.0,
        }
    }

    pub fn behavior(&self) -> SkillBehavior {
        self.kind.behavior()
    }

    pub fn element(&self) -> Element {
        self.behavior().element
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown_timer <= 0.0
    }

    /// Only called right after the skill fires.
    pub fn reset_cooldown(&mut self) {
        self.cooldown_timer = self.behavior().base_cooldown;
    }

    /// Count down by `delta / cooldown_multiplier` seconds.
    pub fn advance_cooldown(&mut self, delta: f64, cooldown_multiplier: f64) {
        self.cooldown_timer -= delta / cooldown_multiplier;
    }

    pub fn damage_multiplier(&self) -> f64 {
        let behavior = self.behavior();
        behavior.base_damage_multiplier * behavior.rank_multiplier(self.rank)
    }

    pub fn slot_id(&self) -> String {
        format!("{}:{}", self.kind.id(), self.rank.name())
    }
}
