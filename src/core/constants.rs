//! Balance constants shared by the run loop, the factories and the simulator.
//!
//! Change once, test everywhere.

// =============================================================================
// RESISTANCE
// =============================================================================

/// Hard ceiling on any elemental resistance.
pub const MAX_RESIST: f64 = 0.75;

/// Resistance every enemy has against every element.
pub const BASE_RESIST: f64 = 0.10;

/// Resistance an enemy has against its own element.
pub const MATCH_RESIST: f64 = 0.25;

// =============================================================================
// ENEMY BASE STATS (multiplied by the type class)
// =============================================================================

pub const BASE_ENEMY_HP: f64 = 20.0;
pub const BASE_ENEMY_SPEED: f64 = 40.0;
pub const BASE_CONTACT_DAMAGE: f64 = 5.0;
pub const BASE_REWARD_GOLD: f64 = 1.0;

/// Enemies stop advancing once this close to the caster.
pub const ENEMY_STOP_DISTANCE: f64 = 1.0;

// =============================================================================
// PLAYFIELD
// =============================================================================

pub const DEFAULT_FIELD_WIDTH: f64 = 480.0;
pub const DEFAULT_FIELD_HEIGHT: f64 = 550.0;
pub const DEFAULT_FIELD_START_Y: f64 = 150.0;

// =============================================================================
// CASTER
// =============================================================================

pub const PLAYER_BASE_HP: u32 = 100;
pub const PLAYER_BASE_DAMAGE: u32 = 10;
pub const PLAYER_BASE_RANGE: f64 = 130.0;

/// Base crit chance in percent points.
pub const BASE_CRIT_CHANCE_PERCENT: f64 = 5.0;

/// Base crit damage in percent (150 = x1.5).
pub const BASE_CRIT_DAMAGE_PERCENT: f64 = 150.0;

/// Lower bound on the combined cooldown multiplier.
pub const MIN_COOLDOWN_MULTIPLIER: f64 = 0.1;

/// Travel speed of non-instant projectiles (units per second).
pub const PROJECTILE_SPEED: f64 = 500.0;

// =============================================================================
// RUN TIMING
// =============================================================================

/// A run ends once this much (speed-adjusted) time has elapsed.
pub const MAX_RUN_SECONDS: f64 = 600.0;

pub const SPAWN_INTERVAL_SECONDS: f64 = 1.0;
pub const BOSS_SPAWN_INTERVAL_SECONDS: f64 = 60.0;
pub const BASE_SPAWN_COUNT: u32 = 1;

/// Gems granted by a boss kill before the per-run gem bonus.
pub const BOSS_GEM_REWARD: u64 = 1;

// =============================================================================
// PROGRESSION SCALING
// =============================================================================

/// Enemy health is re-scaled once per interval of this length.
pub const SCALING_INTERVAL_SECONDS: f64 = 30.0;

/// Growth factor of the first interval (+25%).
pub const BASE_SCALING_RATE: f64 = 1.25;

/// Each later interval grows by this much less than the previous one.
pub const SCALING_CURVE_DECAY: f64 = 0.02;

/// Growth never drops below +15% per interval.
pub const SCALING_FLOOR_RATE: f64 = 1.15;

/// Silver a typical player collects per scaling interval (10-15 kills).
pub const EXPECTED_SILVER_PER_INTERVAL: u64 = 12;

/// Starting silver cost of the per-run damage upgrade, as seen by the estimator.
pub const EXPECTED_DAMAGE_UPGRADE_BASE_COST: f64 = 10.0;

/// Cost growth per purchased level, as seen by the estimator.
pub const EXPECTED_DAMAGE_UPGRADE_COST_GROWTH: f64 = 1.15;

/// Damage multiplier gained per purchased level, as seen by the estimator.
pub const EXPECTED_DAMAGE_PER_LEVEL: f64 = 0.1;

// =============================================================================
// META PROGRESSION
// =============================================================================

pub const STARTING_SKILL_SLOTS: usize = 1;
pub const MAX_SKILL_SLOTS: usize = 6;

/// Gem cost to unlock the next slot, indexed by the current slot count.
pub const SKILL_SLOT_UNLOCK_COSTS: [u64; 5] = [100, 200, 400, 800, 1600];

pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_MAX_SPEED_MULTIPLIER: f64 = 2.0;
pub const PREMIUM_MAX_SPEED_MULTIPLIER: f64 = 3.0;

/// Premium currency needed to raise the speed cap to 3x.
pub const PREMIUM_SPEED_UNLOCK_COST: u64 = 50;

pub const DEFAULT_ORB_ID: &str = "base";
