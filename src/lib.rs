//! Orb - combat resolution and progression core for a top-down survival game
//!
//! A single stationary caster fires equipped skills at enemies that spawn on
//! the playfield edges and walk inward. This crate owns the simulation only:
//! rendering, input and file I/O belong to the embedding application, which
//! drives `core::engine::RunEngine::advance` once per frame and persists the
//! `SaveRecord` through a `save::Persist` sink.

pub mod build_info;
pub mod combat;
pub mod core;
pub mod enemy;
pub mod error;
pub mod save;
pub mod simulator;
pub mod skills;
pub mod upgrades;

pub use crate::core::engine::{RunEngine, TickResult};
pub use crate::error::{GameError, SaveError};
pub use crate::save::record::SaveRecord;
pub use crate::save::Profile;
