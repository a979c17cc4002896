//! Balance constants, shared helpers and the run loop.

pub mod constants;
pub mod element;
pub mod engine;
pub mod progression;
pub mod weighted;

pub use element::Element;
pub use engine::{RunEngine, RunStats, TickResult};
pub use progression::{balance_curve, health_scaling_multiplier, BalanceSample};
pub use weighted::weighted_pick;
