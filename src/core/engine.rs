//! The run loop: one explicit context object per run.
//!
//! `RunEngine` owns everything a run touches (the record, the enemy arena,
//! projectiles, the caster, timers, the rng and the persistence sink) and
//! exposes a single `advance(delta)` step. Nothing here is global.

use crate::combat::logic::Caster;
use crate::combat::projectile::Projectile;
use crate::combat::stats::CasterStats;
use crate::combat::types::CombatEvent;
use crate::core::constants::{
    BASE_SPAWN_COUNT, BOSS_GEM_REWARD, BOSS_SPAWN_INTERVAL_SECONDS, MAX_RUN_SECONDS,
    SPAWN_INTERVAL_SECONDS,
};
use crate::core::progression::health_scaling_multiplier;
use crate::enemy::arena::EnemyArena;
use crate::enemy::factory::{spawn_boss, spawn_random, SpawnBounds};
use crate::enemy::types::{Enemy, EnemyId};
use crate::error::GameError;
use crate::save::record::SaveRecord;
use crate::save::Persist;
use crate::skills::loadout::build_loadout;
use crate::upgrades::orbs::find_orb;
use crate::upgrades::run::RunUpgrade;
use rand::Rng;

/// Result of one `advance` call.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events in the order they happened.
    pub events: Vec<CombatEvent>,
    /// True once the run has hit its time limit.
    pub finished: bool,
}

/// Running totals for one run, read by the simulator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunStats {
    pub spawned: u64,
    pub kills: u64,
    pub boss_kills: u64,
    pub gold_earned: u64,
    pub silver_earned: u64,
    pub gems_earned: u64,
    pub peak_alive: usize,
}

pub struct RunEngine<R: Rng, P: Persist> {
    record: SaveRecord,
    bounds: SpawnBounds,
    caster: Caster,
    enemies: EnemyArena,
    projectiles: Vec<Projectile>,
    elapsed: f64,
    spawn_timer: f64,
    boss_timer: f64,
    finished: bool,
    stats: RunStats,
    rng: R,
    persist: P,
}

impl<R: Rng, P: Persist> RunEngine<R, P> {
    /// Start a run from a loaded record.
    ///
    /// Fails if the selected orb or an equipped skill doesn't exist. The
    /// caster stands in the middle of the playfield.
    pub fn new(
        record: SaveRecord,
        bounds: SpawnBounds,
        rng: R,
        persist: P,
    ) -> Result<Self, GameError> {
        find_orb(&record.selected_orb)?;
        let skills = build_loadout(&record)?;
        let caster = Caster::new(
            bounds.width / 2.0,
            bounds.start_y + bounds.height / 2.0,
            skills,
        );
        log::info!(
            "run started with {} skills, orb '{}', {}x speed",
            caster.skills.len(),
            record.selected_orb,
            record.current_speed_multiplier
        );

        Ok(Self {
            record,
            bounds,
            caster,
            enemies: EnemyArena::new(),
            projectiles: Vec::new(),
            elapsed: 0.0,
            spawn_timer: 0.0,
            boss_timer: BOSS_SPAWN_INTERVAL_SECONDS,
            finished: false,
            stats: RunStats::default(),
            rng,
            persist,
        })
    }

    /// Advance the run by `delta` real seconds.
    ///
    /// Game speed scales `delta` before anything else sees it. A finished run
    /// ignores further calls.
    pub fn advance(&mut self, delta: f64) -> TickResult {
        let mut result = TickResult::default();
        if self.finished {
            result.finished = true;
            return result;
        }

        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let adjusted = delta * self.record.current_speed_multiplier;
        self.elapsed += adjusted;

        // ── 1. Spawn timers ─────────────────────────────────────────
        self.spawn_timer -= adjusted * self.record.run_upgrades.spawn_speed_multiplier();
        if self.spawn_timer <= 0.0 {
            let count = BASE_SPAWN_COUNT + self.record.run_upgrades.spawn_count_bonus();
            for _ in 0..count {
                let enemy = spawn_random(&self.bounds, &mut self.rng);
                self.add_scaled(enemy);
            }
            self.spawn_timer = SPAWN_INTERVAL_SECONDS;
        }

        self.boss_timer -= adjusted;
        if self.boss_timer <= 0.0 {
            let boss = spawn_boss(&self.bounds, &mut self.rng);
            let id = self.add_scaled(boss);
            self.boss_timer = BOSS_SPAWN_INTERVAL_SECONDS;
            log::info!("boss {:?} spawned at {:.1}s", id, self.elapsed);
            result.events.push(CombatEvent::BossSpawned { enemy: id });
        }

        // ── 2. Enemies close in ─────────────────────────────────────
        let (cx, cy) = (self.caster.x, self.caster.y);
        for (_, enemy) in self.enemies.iter_mut() {
            if !enemy.is_dead() {
                enemy.step_toward(cx, cy, adjusted);
            }
        }

        // ── 3. Caster fires ─────────────────────────────────────────
        let stats = CasterStats::from_record(&self.record);
        let cast_events = self.caster.update(
            adjusted,
            &stats,
            &mut self.enemies,
            &mut self.projectiles,
            &mut self.rng,
        );
        result.events.extend(cast_events);

        // ── 4. Projectiles land ─────────────────────────────────────
        for projectile in &mut self.projectiles {
            if let Some(event) = projectile.update(adjusted, &mut self.enemies) {
                result.events.push(event);
            }
        }
        self.projectiles.retain(|p| p.alive);

        self.stats.peak_alive = self.stats.peak_alive.max(self.enemies.living_count());

        // ── 5. Rewards ──────────────────────────────────────────────
        let dead = self.enemies.compact();
        if !dead.is_empty() {
            for (id, enemy) in dead {
                result.events.push(self.reward(id, &enemy, &stats));
            }
            self.persist.persist(&self.record);
        }

        // ── 6. Time limit ───────────────────────────────────────────
        if self.elapsed >= MAX_RUN_SECONDS {
            self.finished = true;
            log::info!(
                "run ended at {:.1}s: {} kills, {} gold",
                self.elapsed,
                self.stats.kills,
                self.stats.gold_earned
            );
            result.events.push(CombatEvent::RunEnded {
                elapsed: self.elapsed,
            });
        }

        result.finished = self.finished;
        result
    }

    fn add_scaled(&mut self, mut enemy: Enemy) -> EnemyId {
        enemy.scale_health(health_scaling_multiplier(self.elapsed));
        self.stats.spawned += 1;
        self.enemies.insert(enemy)
    }

    /// Pay out one death. Called exactly once per enemy, right after the
    /// arena drops it.
    fn reward(&mut self, id: EnemyId, enemy: &Enemy, stats: &CasterStats) -> CombatEvent {
        let gold = (enemy.reward_gold as f64 * stats.gold_multiplier).floor() as u64;
        let silver = (enemy.reward_gold as f64 * stats.silver_multiplier).floor() as u64;
        let gems = if enemy.is_boss() {
            BOSS_GEM_REWARD + self.record.run_upgrades.gem_bonus()
        } else {
            0
        };

        self.record.gold += gold;
        self.record.silver += silver;
        self.record.gems += gems;

        self.stats.kills += 1;
        if enemy.is_boss() {
            self.stats.boss_kills += 1;
        }
        self.stats.gold_earned += gold;
        self.stats.silver_earned += silver;
        self.stats.gems_earned += gems;

        CombatEvent::EnemyDied {
            enemy: id,
            class: enemy.class,
            x: enemy.x,
            y: enemy.y,
            gold,
            silver,
            gems,
        }
    }

    /// Buy one level of a per-run upgrade with silver.
    ///
    /// Returns the price paid, or `None` if maxed or too expensive. Takes
    /// effect on the next shot.
    pub fn purchase_run_upgrade(&mut self, kind: RunUpgrade) -> Option<u64> {
        let cost = self
            .record
            .run_upgrades
            .purchase(kind, &mut self.record.silver)?;
        self.persist.persist(&self.record);
        Some(cost)
    }

    /// Step to the next game speed and persist the choice.
    pub fn cycle_speed(&mut self) -> f64 {
        let speed = self.record.cycle_speed();
        self.persist.persist(&self.record);
        speed
    }

    /// Put an enemy on the field as-is, without health scaling.
    pub fn spawn_enemy(&mut self, enemy: Enemy) -> EnemyId {
        self.stats.spawned += 1;
        self.enemies.insert(enemy)
    }

    pub fn enemies(&self) -> &EnemyArena {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn caster(&self) -> &Caster {
        &self.caster
    }

    pub fn record(&self) -> &SaveRecord {
        &self.record
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// End the run: silver and per-run levels are discarded, the rest kept.
    pub fn finish(mut self) -> SaveRecord {
        self.record.clear_run_progress();
        self.persist.persist(&self.record);
        log::info!("run closed after {:.1}s", self.elapsed);
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::element::Element;
    use crate::enemy::types::EnemyClass;
    use crate::save::NoPersist;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::cell::Cell;
    use std::rc::Rc;

    fn engine(record: SaveRecord) -> RunEngine<ChaCha8Rng, NoPersist> {
        RunEngine::new(
            record,
            SpawnBounds::default(),
            ChaCha8Rng::seed_from_u64(7),
            NoPersist,
        )
        .unwrap()
    }

    #[test]
    fn test_first_spawn_is_immediate() {
        let mut engine = engine(SaveRecord::default());
        engine.advance(0.0);
        assert_eq!(engine.stats().spawned, 1);
        assert_eq!(engine.enemies().len(), 1);
    }

    #[test]
    fn test_spawn_interval() {
        let mut engine = engine(SaveRecord::default());
        for _ in 0..5 {
            engine.advance(0.25);
        }
        // t=0.25 and t=1.25
        assert_eq!(engine.stats().spawned, 2);
    }

    #[test]
    fn test_spawn_count_bonus() {
        let mut record = SaveRecord::default();
        record.run_upgrades.set_level(RunUpgrade::EnemySpawnCount, 2);
        let mut engine = engine(record);
        engine.advance(0.1);
        assert_eq!(engine.stats().spawned, 3);
    }

    #[test]
    fn test_speed_multiplier_scales_time() {
        let mut record = SaveRecord::default();
        record.current_speed_multiplier = 2.0;
        let mut engine = engine(record);
        engine.advance(0.25);
        assert_eq!(engine.elapsed(), 0.5);
    }

    #[test]
    fn test_invalid_delta_is_ignored() {
        let mut engine = engine(SaveRecord::default());
        engine.advance(f64::NAN);
        engine.advance(-3.0);
        assert_eq!(engine.elapsed(), 0.0);
    }

    #[test]
    fn test_boss_every_minute() {
        let mut engine = engine(SaveRecord::default());
        let mut bosses = 0;
        for _ in 0..121 {
            let result = engine.advance(0.5);
            bosses += result
                .events
                .iter()
                .filter(|e| matches!(e, CombatEvent::BossSpawned { .. }))
                .count();
        }
        assert_eq!(bosses, 1);
    }

    #[test]
    fn test_unknown_orb_rejected() {
        let mut record = SaveRecord::default();
        record.selected_orb = "void".to_string();
        let result = RunEngine::new(
            record,
            SpawnBounds::default(),
            ChaCha8Rng::seed_from_u64(1),
            NoPersist,
        );
        assert!(matches!(result, Err(GameError::UnknownOrb(_))));
    }

    #[test]
    fn test_kill_pays_once_and_persists() {
        let saves = Rc::new(Cell::new(0));
        let counter = Rc::clone(&saves);
        let mut engine = RunEngine::new(
            SaveRecord::default(),
            SpawnBounds::default(),
            ChaCha8Rng::seed_from_u64(3),
            move |_: &SaveRecord| counter.set(counter.get() + 1),
        )
        .unwrap();

        let (cx, cy) = (engine.caster().x, engine.caster().y);
        let mut weak = Enemy::new(EnemyClass::Normal, Element::Demon, cx + 40.0, cy);
        weak.scale_health(0.5);
        let id = engine.spawn_enemy(weak);

        let result = engine.advance(0.1);
        let deaths: Vec<_> = result
            .events
            .iter()
            .filter(|e| matches!(e, CombatEvent::EnemyDied { enemy, .. } if *enemy == id))
            .collect();

        assert_eq!(deaths.len(), 1);
        assert_eq!(engine.record().gold, 1);
        assert_eq!(engine.record().silver, 1);
        assert_eq!(saves.get(), 1);
        assert!(engine.enemies().get(id).is_none());

        engine.advance(0.1);
        assert_eq!(engine.stats().kills, 1);
        assert_eq!(engine.record().gold, 1);
    }

    #[test]
    fn test_purchase_run_upgrade_spends_silver() {
        let mut record = SaveRecord::default();
        record.silver = 25;
        let mut engine = engine(record);

        assert_eq!(engine.purchase_run_upgrade(RunUpgrade::DamageIncrease), Some(10));
        assert_eq!(engine.record().silver, 15);
        assert_eq!(engine.purchase_run_upgrade(RunUpgrade::GemIncrease), None);
        assert_eq!(engine.record().silver, 15);
    }

    #[test]
    fn test_run_ends_at_time_limit() {
        let mut engine = engine(SaveRecord::default());
        let result = engine.advance(MAX_RUN_SECONDS);
        assert!(result.finished);
        assert!(result
            .events
            .iter()
            .any(|e| matches!(e, CombatEvent::RunEnded { .. })));

        let after = engine.advance(1.0);
        assert!(after.finished);
        assert!(after.events.is_empty());
        assert_eq!(engine.elapsed(), MAX_RUN_SECONDS);
    }

    #[test]
    fn test_finish_clears_run_progress() {
        let mut record = SaveRecord::default();
        record.silver = 40;
        record.gold = 12;
        record.run_upgrades.set_level(RunUpgrade::DamageIncrease, 3);
        let engine = engine(record);

        let record = engine.finish();
        assert_eq!(record.silver, 0);
        assert!(record.run_upgrades.is_empty());
        assert_eq!(record.gold, 12);
    }
}
