//! Headless balance simulator.
//!
//! Runs batches of seeded runs to check:
//! - How many enemies the caster keeps up with over a full run
//! - Gold, gem and silver income per run
//! - Whether enemy health growth outpaces a greedy upgrade path
//!
//! Every run drives the real `RunEngine` (src/core/engine.rs), so results
//! match gameplay.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunSummary};
