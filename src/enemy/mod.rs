//! Enemies: classes and stats, the spawn factory and the per-run arena.

pub mod arena;
pub mod factory;
pub mod types;

pub use arena::EnemyArena;
pub use factory::{spawn_boss, spawn_random, SpawnBounds};
pub use types::{clamp_resist, Enemy, EnemyClass, EnemyId, Resistances};
