//! Passive items (orbs). Read-only catalog; exactly one is equipped.

use crate::combat::damage::{CalculationStage, DamageModifier};
use crate::core::element::Element;
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrbAbility {
    /// Feeds a modifier into the damage pipeline.
    Damage {
        stage: CalculationStage,
        element: Option<Element>,
        value: f64,
    },
    /// Cooldown multiplier; 0.9 means 10% faster.
    CooldownReduction(f64),
    RangeIncrease(f64),
    /// Added to the crit probability (0.10 = +10 points).
    CritChance(f64),
    /// Multiplies the crit damage factor.
    CritDamage(f64),
    HealthBoost(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassiveItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub abilities: &'static [OrbAbility],
}

const fn increase(element: Option<Element>, value: f64) -> OrbAbility {
    OrbAbility::Damage {
        stage: CalculationStage::Increase,
        element,
        value,
    }
}

const fn amplify(element: Option<Element>, value: f64) -> OrbAbility {
    OrbAbility::Damage {
        stage: CalculationStage::Amplify,
        element,
        value,
    }
}

pub static ORB_CATALOG: [PassiveItem; 8] = [
    PassiveItem {
        id: "base",
        name: "Base Orb",
        description: "A plain orb with no special ability.",
        abilities: &[increase(None, 1.0)],
    },
    PassiveItem {
        id: "balance",
        name: "Orb of Balance",
        description: "All damage +15%, cooldowns 10% faster.",
        abilities: &[increase(None, 1.15), OrbAbility::CooldownReduction(0.9)],
    },
    PassiveItem {
        id: "fire",
        name: "Orb of Blazing Heat",
        description: "Fire damage +30%.",
        abilities: &[increase(Some(Element::Fire), 1.3)],
    },
    PassiveItem {
        id: "lightning",
        name: "Orb of Thunder",
        description: "Lightning damage +20%, crit chance +10%.",
        abilities: &[
            increase(Some(Element::Lightning), 1.2),
            OrbAbility::CritChance(0.10),
        ],
    },
    PassiveItem {
        id: "ice",
        name: "Orb of Frost",
        description: "Cold damage +20%, cooldowns 10% faster.",
        abilities: &[
            increase(Some(Element::Cold), 1.2),
            OrbAbility::CooldownReduction(0.9),
        ],
    },
    PassiveItem {
        id: "angel",
        name: "Angel Orb",
        description: "Angel damage +30%, range +15%.",
        abilities: &[
            increase(Some(Element::Angel), 1.3),
            OrbAbility::RangeIncrease(1.15),
        ],
    },
    PassiveItem {
        id: "demon",
        name: "Demon Orb",
        description: "Demon damage amplified 20%, all damage amplified 20%.",
        abilities: &[amplify(Some(Element::Demon), 1.2), amplify(None, 1.2)],
    },
    PassiveItem {
        id: "critical",
        name: "Orb of Precision",
        description: "Crit chance +15%, crit damage +40%.",
        abilities: &[OrbAbility::CritChance(0.15), OrbAbility::CritDamage(1.4)],
    },
];

pub fn find_orb(id: &str) -> Result<&'static PassiveItem, GameError> {
    ORB_CATALOG
        .iter()
        .find(|orb| orb.id == id)
        .ok_or_else(|| GameError::UnknownOrb(id.to_string()))
}

/// Look up `id`, falling back to the plain base orb.
pub fn orb_or_default(id: &str) -> &'static PassiveItem {
    find_orb(id).unwrap_or(&ORB_CATALOG[0])
}

impl PassiveItem {
    /// Damage-related abilities as pipeline modifiers.
    pub fn damage_modifiers(&self) -> Vec<DamageModifier> {
        self.abilities
            .iter()
            .filter_map(|ability| match ability {
                OrbAbility::Damage {
                    stage,
                    element,
                    value,
                } => Some(DamageModifier {
                    stage: *stage,
                    value: *value,
                    element: *element,
                }),
                _ => None,
            })
            .collect()
    }

    fn product(&self, pick: impl Fn(&OrbAbility) -> Option<f64>) -> f64 {
        self.abilities.iter().filter_map(pick).product()
    }

    pub fn cooldown_multiplier(&self) -> f64 {
        self.product(|a| match a {
            OrbAbility::CooldownReduction(v) => Some(*v),
            _ => None,
        })
    }

    pub fn range_multiplier(&self) -> f64 {
        self.product(|a| match a {
            OrbAbility::RangeIncrease(v) => Some(*v),
            _ => None,
        })
    }

    pub fn crit_damage_multiplier(&self) -> f64 {
        self.product(|a| match a {
            OrbAbility::CritDamage(v) => Some(*v),
            _ => None,
        })
    }

    pub fn health_multiplier(&self) -> f64 {
        self.product(|a| match a {
            OrbAbility::HealthBoost(v) => Some(*v),
            _ => None,
        })
    }

    pub fn crit_chance_bonus(&self) -> f64 {
        self.abilities
            .iter()
            .filter_map(|a| match a {
                OrbAbility::CritChance(v) => Some(*v),
                _ => None,
            })
            .sum()
    }
}
