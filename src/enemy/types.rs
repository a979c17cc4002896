//! Enemy classes, resistances and the per-instance enemy record.

use crate::core::constants::{
    BASE_CONTACT_DAMAGE, BASE_ENEMY_HP, BASE_ENEMY_SPEED, BASE_RESIST, BASE_REWARD_GOLD,
    ENEMY_STOP_DISTANCE, MATCH_RESIST, MAX_RESIST,
};
use crate::core::element::Element;
use serde::{Deserialize, Serialize};

/// Stable handle into the enemy arena. Never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EnemyClass {
    Normal,
    Speed,
    Tank,
    Boss,
}

/// Stat multipliers applied to the base enemy stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassMultipliers {
    pub hp: f64,
    pub speed: f64,
    pub damage: f64,
    pub gold: f64,
}

impl EnemyClass {
    pub const ALL: [EnemyClass; 4] = [
        EnemyClass::Normal,
        EnemyClass::Speed,
        EnemyClass::Tank,
        EnemyClass::Boss,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyClass::Normal => "Normal",
            EnemyClass::Speed => "Speed",
            EnemyClass::Tank => "Tank",
            EnemyClass::Boss => "Boss",
        }
    }

    pub fn multipliers(&self) -> ClassMultipliers {
        let (hp, speed, damage, gold) = match self {
            EnemyClass::Normal => (1.0, 1.0, 1.0, 1.0),
            EnemyClass::Speed => (0.7, 1.8, 1.0, 1.3),
            EnemyClass::Tank => (3.0, 0.8, 1.0, 2.0),
            EnemyClass::Boss => (7.0, 0.5, 3.0, 5.0),
        };
        ClassMultipliers {
            hp,
            speed,
            damage,
            gold,
        }
    }

    /// Hit radius used by projectiles.
    pub fn radius(&self) -> f64 {
        match self {
            EnemyClass::Normal => 15.0,
            EnemyClass::Speed => 12.0,
            EnemyClass::Tank => 18.0,
            EnemyClass::Boss => 20.0,
        }
    }

    /// Weights for regular spawns. Bosses only come from the boss timer.
    pub fn regular_spawn_weights() -> [(EnemyClass, i64); 3] {
        [
            (EnemyClass::Normal, 80),
            (EnemyClass::Speed, 15),
            (EnemyClass::Tank, 45),
        ]
    }

    /// Weights including bosses, for callers that want a mixed table.
    pub fn spawn_weights() -> [(EnemyClass, i64); 4] {
        [
            (EnemyClass::Normal, 80),
            (EnemyClass::Speed, 15),
            (EnemyClass::Tank, 4),
            (EnemyClass::Boss, 1),
        ]
    }
}

/// Per-element resistance fractions, each kept within `[0, MAX_RESIST]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resistances {
    values: [f64; 5],
}

impl Resistances {
    /// Base resistance everywhere, matched resistance against `own`.
    pub fn for_element(own: Element) -> Self {
        let mut values = [0.0; 5];
        for element in Element::ALL {
            let raw = if element == own {
                MATCH_RESIST
            } else {
                BASE_RESIST
            };
            values[element as usize] = clamp_resist(raw);
        }
        Self { values }
    }

    pub fn uniform(value: f64) -> Self {
        Self {
            values: [clamp_resist(value); 5],
        }
    }

    pub fn against(&self, element: Element) -> f64 {
        self.values[element as usize]
    }

    pub fn set(&mut self, element: Element, value: f64) {
        self.values[element as usize] = clamp_resist(value);
    }
}

/// Clamp a raw resistance into `[0, MAX_RESIST]`. NaN becomes 0.
pub fn clamp_resist(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, MAX_RESIST)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub class: EnemyClass,
    pub element: Element,
    pub max_hp: i64,
    /// Reduced only when damage actually lands.
    pub hp: i64,
    /// Reduced the moment a shot is committed. May go negative.
    pub virtual_hp: i64,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub contact_damage: u32,
    pub reward_gold: u64,
    pub resistances: Resistances,
}

impl Enemy {
    /// Build an enemy from the base stats scaled by its class.
    pub fn new(class: EnemyClass, element: Element, x: f64, y: f64) -> Self {
        let mul = class.multipliers();
        let hp = (BASE_ENEMY_HP * mul.hp) as i64;
        Self {
            class,
            element,
            max_hp: hp,
            hp,
            virtual_hp: hp,
            x,
            y,
            speed: BASE_ENEMY_SPEED * mul.speed,
            contact_damage: (BASE_CONTACT_DAMAGE * mul.damage) as u32,
            reward_gold: (BASE_REWARD_GOLD * mul.gold) as u64,
            resistances: Resistances::for_element(element),
        }
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Already lethally committed by shots in flight.
    pub fn is_doomed(&self) -> bool {
        self.virtual_hp <= 0
    }

    pub fn is_boss(&self) -> bool {
        self.class == EnemyClass::Boss
    }

    pub fn radius(&self) -> f64 {
        self.class.radius()
    }

    pub fn resist_against(&self, element: Element) -> f64 {
        self.resistances.against(element)
    }

    /// Multiply health by a difficulty factor. Keeps at least 1 hp.
    pub fn scale_health(&mut self, multiplier: f64) {
        let scaled = ((self.max_hp as f64) * multiplier).floor() as i64;
        self.max_hp = scaled.max(1);
        self.hp = self.max_hp;
        self.virtual_hp = self.max_hp;
    }

    /// Optimistic pre-commit of a shot's damage.
    pub fn commit(&mut self, damage: u32) {
        self.virtual_hp -= damage as i64;
    }

    /// Damage landing on the real health pool.
    pub fn apply_damage(&mut self, damage: u32) {
        self.hp -= damage as i64;
    }

    pub fn distance_squared_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }

    /// Walk straight towards `(tx, ty)`, stopping once within one unit.
    pub fn step_toward(&mut self, tx: f64, ty: f64, delta: f64) {
        let dx = tx - self.x;
        let dy = ty - self.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > ENEMY_STOP_DISTANCE {
            let step = (self.speed * delta).min(dist - ENEMY_STOP_DISTANCE);
            self.x += dx / dist * step;
            self.y += dy / dist * step;
        }
    }
}
