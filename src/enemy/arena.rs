//! Enemy storage addressed by stable ids.
//!
//! Dead enemies stay in place (hp <= 0 is their tombstone) until `compact`
//! runs at the end of a tick, so nothing is removed mid-iteration.

use super::types::{Enemy, EnemyId};

#[derive(Debug, Clone, Default)]
pub struct EnemyArena {
    /// Sorted by id; ids are handed out in increasing order.
    slots: Vec<(EnemyId, Enemy)>,
    next_id: u64,
}

impl EnemyArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, enemy: Enemy) -> EnemyId {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, enemy));
        id
    }

    fn index_of(&self, id: EnemyId) -> Option<usize> {
        self.slots.binary_search_by_key(&id, |(slot_id, _)| *slot_id).ok()
    }

    pub fn get(&self, id: EnemyId) -> Option<&Enemy> {
        self.index_of(id).map(|i| &self.slots[i].1)
    }

    pub fn get_mut(&mut self, id: EnemyId) -> Option<&mut Enemy> {
        let i = self.index_of(id)?;
        Some(&mut self.slots[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> {
        self.slots.iter().map(|(id, enemy)| (*id, enemy))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EnemyId, &mut Enemy)> {
        self.slots.iter_mut().map(|(id, enemy)| (*id, enemy))
    }

    pub fn living(&self) -> impl Iterator<Item = (EnemyId, &Enemy)> {
        self.iter().filter(|(_, enemy)| !enemy.is_dead())
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    /// Nearest living enemy to `(x, y)`. Ties go to the oldest enemy.
    pub fn nearest_living(&self, x: f64, y: f64) -> Option<EnemyId> {
        let mut best: Option<(EnemyId, f64)> = None;
        for (id, enemy) in self.living() {
            let d2 = enemy.distance_squared_to(x, y);
            match best {
                Some((_, best_d2)) if d2 >= best_d2 => {}
                _ => best = Some((id, d2)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Living enemies within `range` of `(x, y)`, in arena order.
    pub fn living_within(&self, x: f64, y: f64, range: f64) -> Vec<EnemyId> {
        let range2 = range * range;
        self.living()
            .filter(|(_, enemy)| enemy.distance_squared_to(x, y) <= range2)
            .map(|(id, _)| id)
            .collect()
    }

    /// Remove every dead enemy and hand them back, in arena order.
    pub fn compact(&mut self) -> Vec<(EnemyId, Enemy)> {
        let (dead, alive): (Vec<_>, Vec<_>) = std::mem::take(&mut self.slots)
            .into_iter()
            .partition(|(_, enemy)| enemy.is_dead());
        self.slots = alive;
        dead
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
