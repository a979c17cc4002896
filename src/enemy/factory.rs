//! Enemy spawning: class, element and edge position.

use super::types::{Enemy, EnemyClass};
use crate::core::constants::{DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_START_Y, DEFAULT_FIELD_WIDTH};
use crate::core::element::Element;
use crate::core::weighted::weighted_pick;
use rand::Rng;

/// Playfield rectangle enemies spawn on the edges of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnBounds {
    pub width: f64,
    pub height: f64,
    /// Bottom edge of the playfield (the HUD sits below it).
    pub start_y: f64,
}

impl Default for SpawnBounds {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
            start_y: DEFAULT_FIELD_START_Y,
        }
    }
}

impl SpawnBounds {
    /// Uniform point on one of the four edges.
    ///
    /// Left/right edges get a random y inside the vertical band, bottom/top
    /// edges get a random x across the width.
    pub fn edge_point(&self, rng: &mut impl Rng) -> (f64, f64) {
        match rng.gen_range(0..4) {
            0 => (0.0, rng.gen::<f64>() * self.height + self.start_y),
            1 => (self.width, rng.gen::<f64>() * self.height + self.start_y),
            2 => (rng.gen::<f64>() * self.width, self.start_y),
            _ => (rng.gen::<f64>() * self.width, self.height + self.start_y),
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (self.start_y..=self.start_y + self.height).contains(&y)
    }
}

fn roll_element(rng: &mut impl Rng) -> Element {
    weighted_pick(&Element::spawn_weights(), rng).unwrap_or(Element::Fire)
}

fn spawn(class: EnemyClass, bounds: &SpawnBounds, rng: &mut impl Rng) -> Enemy {
    let element = roll_element(rng);
    let (x, y) = bounds.edge_point(rng);
    Enemy::new(class, element, x, y)
}

/// Spawn a regular (non-boss) enemy.
pub fn spawn_random(bounds: &SpawnBounds, rng: &mut impl Rng) -> Enemy {
    let class =
        weighted_pick(&EnemyClass::regular_spawn_weights(), rng).unwrap_or(EnemyClass::Normal);
    spawn(class, bounds, rng)
}

/// Spawn a boss with a random element.
pub fn spawn_boss(bounds: &SpawnBounds, rng: &mut impl Rng) -> Enemy {
    spawn(EnemyClass::Boss, bounds, rng)
}
