//! Damage resolution, caster targeting and projectiles.

pub mod damage;
pub mod logic;
pub mod projectile;
pub mod stats;
pub mod types;

pub use damage::{resolve, CalculationStage, DamageModifier};
pub use logic::Caster;
pub use projectile::Projectile;
pub use stats::{collect_modifiers, CasterStats};
pub use types::CombatEvent;
