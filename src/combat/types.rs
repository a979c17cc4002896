use crate::core::element::Element;
use crate::enemy::types::{EnemyClass, EnemyId};
use crate::skills::types::SkillKind;

/// Something that happened during a tick, for the effects/UI layer.
///
/// The simulation never depends on anyone consuming these.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// A skill fired. AOE casts report how many enemies they caught.
    SkillCast {
        skill: SkillKind,
        x: f64,
        y: f64,
        targets: usize,
    },
    /// A ready single-target skill held fire because its target is already
    /// lethally committed.
    OverkillSkipped { skill: SkillKind, enemy: EnemyId },
    /// Damage landed on an enemy's real health.
    DamageDealt {
        enemy: EnemyId,
        damage: u32,
        x: f64,
        y: f64,
        element: Element,
        skill: SkillKind,
    },
    EnemyDied {
        enemy: EnemyId,
        class: EnemyClass,
        x: f64,
        y: f64,
        gold: u64,
        silver: u64,
        gems: u64,
    },
    BossSpawned { enemy: EnemyId },
    RunEnded { elapsed: f64 },
}
