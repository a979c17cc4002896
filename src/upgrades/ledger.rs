//! Shared level/cost bookkeeping for the permanent and per-run ledgers.

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Static cost table of one upgrade kind.
pub trait UpgradeKind: Copy + Ord + std::fmt::Debug {
    fn base_cost(&self) -> f64;
    fn cost_multiplier(&self) -> f64;
    fn max_level(&self) -> u32;
    fn name(&self) -> &'static str;

    /// Cost of buying the level after `level`.
    ///
    /// Grows exponentially and returns `u64::MAX` once `level` reaches the
    /// cap, so a maxed upgrade is never affordable. Slow multipliers would
    /// floor to the same price twice, so each level costs at least one more
    /// than the one before.
    fn cost_for_level(&self, level: u32) -> u64 {
        if level >= self.max_level() {
            return u64::MAX;
        }
        let raw = (self.base_cost() * self.cost_multiplier().powi(level as i32)).floor() as u64;
        raw.max(self.base_cost() as u64 + level as u64)
    }

    /// Total spent to reach `level` from zero.
    fn cumulative_cost(&self, level: u32) -> u64 {
        (0..level.min(self.max_level()))
            .map(|l| self.cost_for_level(l))
            .sum()
    }
}

/// Upgrade levels keyed by kind. Missing entries are level 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UpgradeLedger<K: Ord> {
    levels: BTreeMap<K, u32>,
}

impl<K: Ord> Default for UpgradeLedger<K> {
    fn default() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }
}

/// Reads a name-to-level map. Unknown names are skipped and levels are
/// capped, so saves from other versions still load.
impl<'de, K> Deserialize<'de> for UpgradeLedger<K>
where
    K: UpgradeKind + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, u32>::deserialize(deserializer)?;
        let mut ledger = Self::default();
        for (name, level) in raw {
            let key: serde::de::value::StrDeserializer<'_, D::Error> =
                name.as_str().into_deserializer();
            match K::deserialize(key) {
                Ok(kind) => ledger.set_level(kind, level),
                Err(_) => log::warn!("skipping unknown upgrade {:?}", name),
            }
        }
        Ok(ledger)
    }
}

impl<K: UpgradeKind> UpgradeLedger<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self, kind: K) -> u32 {
        self.levels.get(&kind).copied().unwrap_or(0)
    }

    pub fn next_cost(&self, kind: K) -> u64 {
        kind.cost_for_level(self.level(kind))
    }

    pub fn is_maxed(&self, kind: K) -> bool {
        self.level(kind) >= kind.max_level()
    }

    pub fn can_afford(&self, kind: K, balance: u64) -> bool {
        !self.is_maxed(kind) && balance >= self.next_cost(kind)
    }

    /// Buy one level of `kind`, paying from `balance`.
    ///
    /// Returns the price paid, or `None` (nothing changes) when the upgrade
    /// is maxed or the balance is short.
    pub fn purchase(&mut self, kind: K, balance: &mut u64) -> Option<u64> {
        if !self.can_afford(kind, *balance) {
            return None;
        }
        let cost = self.next_cost(kind);
        *balance -= cost;
        *self.levels.entry(kind).or_insert(0) += 1;
        log::info!(
            "purchased {} level {} for {}",
            kind.name(),
            self.level(kind),
            cost
        );
        Some(cost)
    }

    /// Set a level directly, capped at the kind's max. Used when loading.
    pub fn set_level(&mut self, kind: K, level: u32) {
        let level = level.min(kind.max_level());
        if level == 0 {
            self.levels.remove(&kind);
        } else {
            self.levels.insert(kind, level);
        }
    }

    /// Total currency spent across every kind.
    pub fn total_spent(&self) -> u64 {
        self.levels
            .iter()
            .map(|(kind, level)| kind.cumulative_cost(*level))
            .sum()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.levels.values().all(|level| *level == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, u32)> + '_ {
        self.levels.iter().map(|(kind, level)| (*kind, *level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Dummy {
        Cheap,
    }

    impl UpgradeKind for Dummy {
        fn base_cost(&self) -> f64 {
            10.0
        }
        fn cost_multiplier(&self) -> f64 {
            2.0
        }
        fn max_level(&self) -> u32 {
            3
        }
        fn name(&self) -> &'static str {
            "Cheap"
        }
    }

    #[test]
    fn test_cost_growth_and_cap() {
        assert_eq!(Dummy::Cheap.cost_for_level(0), 10);
        assert_eq!(Dummy::Cheap.cost_for_level(1), 20);
        assert_eq!(Dummy::Cheap.cost_for_level(2), 40);
        assert_eq!(Dummy::Cheap.cost_for_level(3), u64::MAX);
        assert_eq!(Dummy::Cheap.cost_for_level(99), u64::MAX);
    }

    #[test]
    fn test_cumulative_cost() {
        assert_eq!(Dummy::Cheap.cumulative_cost(0), 0);
        assert_eq!(Dummy::Cheap.cumulative_cost(3), 70);
        assert_eq!(Dummy::Cheap.cumulative_cost(10), 70);
    }

    #[test]
    fn test_purchase_deducts_and_levels() {
        let mut ledger = UpgradeLedger::new();
        let mut balance = 35;

        assert_eq!(ledger.purchase(Dummy::Cheap, &mut balance), Some(10));
        assert_eq!(ledger.purchase(Dummy::Cheap, &mut balance), Some(20));
        assert_eq!(balance, 5);
        assert_eq!(ledger.level(Dummy::Cheap), 2);
    }

    #[test]
    fn test_purchase_rejected_when_short() {
        let mut ledger = UpgradeLedger::new();
        let mut balance = 9;
        assert_eq!(ledger.purchase(Dummy::Cheap, &mut balance), None);
        assert_eq!(balance, 9);
        assert_eq!(ledger.level(Dummy::Cheap), 0);
    }

    #[test]
    fn test_purchase_rejected_when_maxed() {
        let mut ledger = UpgradeLedger::new();
        let mut balance = u64::MAX;
        for _ in 0..3 {
            assert!(ledger.purchase(Dummy::Cheap, &mut balance).is_some());
        }
        let before = balance;
        assert!(ledger.is_maxed(Dummy::Cheap));
        assert_eq!(ledger.purchase(Dummy::Cheap, &mut balance), None);
        assert_eq!(balance, before);
    }

    #[test]
    fn test_set_level_caps() {
        let mut ledger = UpgradeLedger::new();
        ledger.set_level(Dummy::Cheap, 50);
        assert_eq!(ledger.level(Dummy::Cheap), 3);
        assert_eq!(ledger.total_spent(), 70);
        ledger.set_level(Dummy::Cheap, 0);
        assert!(ledger.is_empty());
    }
}
