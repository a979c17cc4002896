//! Damage elements shared by enemies and skills.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Cold,
    Lightning,
    Angel,
    Demon,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Fire,
        Element::Cold,
        Element::Lightning,
        Element::Angel,
        Element::Demon,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Cold => "Cold",
            Element::Lightning => "Lightning",
            Element::Angel => "Angel",
            Element::Demon => "Demon",
        }
    }

    /// Relative spawn weight. Holy and demonic enemies are rare.
    pub fn spawn_weight(&self) -> i64 {
        match self {
            Element::Fire | Element::Cold | Element::Lightning => 30,
            Element::Angel | Element::Demon => 5,
        }
    }

    pub fn spawn_weights() -> Vec<(Element, i64)> {
        Element::ALL.iter().map(|e| (*e, e.spawn_weight())).collect()
    }
}
