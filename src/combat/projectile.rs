//! Projectiles carrying damage that was resolved when the shot was committed.

use super::types::CombatEvent;
use crate::core::constants::PROJECTILE_SPEED;
use crate::enemy::arena::EnemyArena;
use crate::enemy::types::EnemyId;
use crate::skills::types::SkillKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    /// Locked at fire time; never retargets.
    pub target: EnemyId,
    pub skill: SkillKind,
    /// Already deducted from the target's virtual hp.
    pub damage: u32,
    pub speed: f64,
    pub alive: bool,
}

impl Projectile {
    pub fn new(x: f64, y: f64, target: EnemyId, skill: SkillKind, damage: u32) -> Self {
        Self {
            x,
            y,
            target,
            skill,
            damage,
            speed: PROJECTILE_SPEED,
            alive: true,
        }
    }

    /// Fly towards the target and land if close enough.
    ///
    /// Deactivates without effect when the target is gone or already dead,
    /// so damage is never applied twice.
    pub fn update(&mut self, delta: f64, arena: &mut EnemyArena) -> Option<CombatEvent> {
        if !self.alive {
            return None;
        }
        let target = match arena.get_mut(self.target) {
            Some(enemy) if !enemy.is_dead() => enemy,
            _ => {
                self.alive = false;
                return None;
            }
        };

        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let step = self.speed * delta;

        if dist < target.radius() || dist <= step {
            target.apply_damage(self.damage);
            self.alive = false;
            self.x = target.x;
            self.y = target.y;
            return Some(CombatEvent::DamageDealt {
                enemy: self.target,
                damage: self.damage,
                x: target.x,
                y: target.y,
                element: self.skill.behavior().element,
                skill: self.skill,
            });
        }

        self.x += dx / dist * step;
        self.y += dy / dist * step;
        None
    }
}
