//! Damage resolution.
//!
//! Every attack runs through the same fixed pipeline:
//! Addition -> Increase -> Amplify -> Crit -> Resistance, then floor with a
//! minimum of 1. Each stage feeds the next, so the order matters.

use crate::core::element::Element;
use crate::enemy::types::clamp_resist;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which composition stage a modifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationStage {
    /// Flat amount added to the base damage.
    Addition,
    /// Percentage bonuses summed with each other, applied as one factor.
    Increase,
    /// Like Increase, but applied as a separate later factor.
    Amplify,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageModifier {
    pub stage: CalculationStage,
    /// Flat amount for Addition; a multiplier such as 1.2 otherwise.
    pub value: f64,
    /// `None` applies to every element.
    pub element: Option<Element>,
}

impl DamageModifier {
    pub fn addition(value: f64) -> Self {
        Self {
            stage: CalculationStage::Addition,
            value,
            element: None,
        }
    }

    pub fn increase(value: f64) -> Self {
        Self {
            stage: CalculationStage::Increase,
            value,
            element: None,
        }
    }

    pub fn amplify(value: f64) -> Self {
        Self {
            stage: CalculationStage::Amplify,
            value,
            element: None,
        }
    }

    pub fn for_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    fn applies_to(&self, element: Option<Element>) -> bool {
        match self.element {
            None => true,
            Some(scope) => element == Some(scope),
        }
    }
}

/// Sum of Addition values that apply to `element`.
pub fn addition_total(modifiers: &[DamageModifier], element: Option<Element>) -> f64 {
    modifiers
        .iter()
        .filter(|m| m.stage == CalculationStage::Addition && m.applies_to(element))
        .map(|m| m.value)
        .sum()
}

/// Sum of `(value - 1)` for matching modifiers of `stage`.
pub fn percent_total(
    modifiers: &[DamageModifier],
    stage: CalculationStage,
    element: Option<Element>,
) -> f64 {
    modifiers
        .iter()
        .filter(|m| m.stage == stage && m.applies_to(element))
        .map(|m| m.value - 1.0)
        .sum()
}

/// Damage before the crit roll and resistance.
pub fn pre_crit_damage(
    base_damage: f64,
    modifiers: &[DamageModifier],
    element: Option<Element>,
) -> f64 {
    let mut damage = base_damage + addition_total(modifiers, element);
    damage *= 1.0 + percent_total(modifiers, CalculationStage::Increase, element);
    damage *= 1.0 + percent_total(modifiers, CalculationStage::Amplify, element);
    damage
}

/// Resolve one hit into integer damage.
///
/// # Arguments
/// * `base_damage` - Caster base damage times the skill multiplier
/// * `modifiers` - Every modifier source collected for this attack
/// * `element` - Skill element, used to scope element-specific modifiers
/// * `crit_chance` - Probability in `[0, 1]`
/// * `crit_multiplier` - Damage factor on a crit (1.5 = +50%)
/// * `resistance` - Target resistance; clamped to `[0, 0.75]` here as well
/// * `rng` - Random number generator for the crit roll
///
/// # Returns
/// Floored damage, never below 1.
pub fn resolve(
    base_damage: f64,
    modifiers: &[DamageModifier],
    element: Option<Element>,
    crit_chance: f64,
    crit_multiplier: f64,
    resistance: f64,
    rng: &mut impl Rng,
) -> u32 {
    let mut damage = pre_crit_damage(base_damage, modifiers, element);

    if rng.gen::<f64>() < crit_chance {
        damage *= crit_multiplier;
    }

    damage *= 1.0 - clamp_resist(resistance);

    finalize(damage)
}

/// Floor to an integer with a minimum of 1. NaN and negatives become 1.
pub fn finalize(damage: f64) -> u32 {
    if damage.is_nan() || damage < 1.0 {
        return 1;
    }
    if damage >= u32::MAX as f64 {
        return u32::MAX;
    }
    damage.floor() as u32
}
