//! Per-tick caster state machine: cooldowns, targeting and firing.
//!
//! Same-tick invariant: a shot lowers its target's `virtual_hp` the moment
//! it is committed, long before the projectile lands. A single-target skill
//! never fires at an enemy whose `virtual_hp` is already at or below zero,
//! so two commits can't both spend damage on a doomed enemy.

use super::damage::resolve;
use super::projectile::Projectile;
use super::stats::CasterStats;
use super::types::CombatEvent;
use crate::enemy::arena::EnemyArena;
use crate::enemy::types::Enemy;
use crate::skills::types::Skill;
use rand::Rng;

/// Resolve one hit of `skill` against `enemy` with the current stats.
pub fn damage_against(
    skill: &Skill,
    enemy: &Enemy,
    stats: &CasterStats,
    rng: &mut impl Rng,
) -> u32 {
    let element = skill.element();
    resolve(
        stats.base_damage * skill.damage_multiplier(),
        &stats.modifiers,
        Some(element),
        stats.crit_chance,
        stats.crit_multiplier,
        enemy.resist_against(element),
        rng,
    )
}

/// The stationary caster and its equipped skills.
#[derive(Debug, Clone)]
pub struct Caster {
    pub x: f64,
    pub y: f64,
    /// Firing priority is slot order.
    pub skills: Vec<Skill>,
}

impl Caster {
    pub fn new(x: f64, y: f64, skills: Vec<Skill>) -> Self {
        Self { x, y, skills }
    }

    /// Run one tick of targeting and firing. At most one skill fires.
    ///
    /// 1. Every skill's cooldown advances by `delta / cooldown_multiplier`.
    /// 2. The nearest living enemy is the single-target candidate.
    /// 3. Skills are tried in slot order; the first that is ready and has a
    ///    valid target fires.
    ///
    /// AOE skills hit every living enemy in range at once. Single-target
    /// skills commit damage to the candidate's virtual hp and launch a
    /// projectile. A single-target skill whose candidate is already doomed
    /// holds fire with its cooldown untouched, and the next slot is tried.
    pub fn update(
        &mut self,
        delta: f64,
        stats: &CasterStats,
        arena: &mut EnemyArena,
        projectiles: &mut Vec<Projectile>,
        rng: &mut impl Rng,
    ) -> Vec<CombatEvent> {
        let mut events = Vec::new();

        for skill in &mut self.skills {
            skill.advance_cooldown(delta, stats.cooldown_multiplier);
        }

        let nearest = arena.nearest_living(self.x, self.y);
        let range2 = stats.range * stats.range;

        for skill in &mut self.skills {
            if !skill.is_ready() {
                continue;
            }
            let behavior = skill.behavior();

            if behavior.is_aoe {
                let targets = arena.living_within(self.x, self.y, stats.range);
                if targets.is_empty() {
                    continue;
                }
                let hit_count = targets.len();
                events.push(CombatEvent::SkillCast {
                    skill: skill.kind,
                    x: self.x,
                    y: self.y,
                    targets: hit_count,
                });
                for id in targets {
                    if let Some(enemy) = arena.get_mut(id) {
                        let damage = damage_against(skill, enemy, stats, rng);
                        enemy.commit(damage);
                        enemy.apply_damage(damage);
                        events.push(CombatEvent::DamageDealt {
                            enemy: id,
                            damage,
                            x: enemy.x,
                            y: enemy.y,
                            element: behavior.element,
                            skill: skill.kind,
                        });
                    }
                }
                skill.reset_cooldown();
                log::debug!("{} hit {} enemies", behavior.name, hit_count);
                break;
            }

            let Some(target_id) = nearest else {
                continue;
            };
            let Some(target) = arena.get_mut(target_id) else {
                continue;
            };
            if target.distance_squared_to(self.x, self.y) > range2 {
                continue;
            }
            if target.is_doomed() {
                log::debug!(
                    "{} holding fire, enemy {:?} already committed",
                    behavior.name,
                    target_id
                );
                events.push(CombatEvent::OverkillSkipped {
                    skill: skill.kind,
                    enemy: target_id,
                });
                continue;
            }

            let damage = damage_against(skill, target, stats, rng);
            target.commit(damage);

            let (sx, sy) = if behavior.is_instant {
                (target.x, target.y)
            } else {
                (self.x, self.y)
            };
            projectiles.push(Projectile::new(sx, sy, target_id, skill.kind, damage));
            events.push(CombatEvent::SkillCast {
                skill: skill.kind,
                x: self.x,
                y: self.y,
                targets: 1,
            });
            skill.reset_cooldown();
            log::debug!(
                "{} fired at {:?} for {} (virtual hp now {})",
                behavior.name,
                target_id,
                damage,
                target.virtual_hp
            );
            break;
        }

        events
    }
}
