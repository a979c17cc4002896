//! Owned skill copies and rank promotion.

use super::types::{SkillKind, SkillRank};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub kind: SkillKind,
    pub rank: SkillRank,
    pub id: String,
}

impl SkillItem {
    pub fn new(kind: SkillKind, rank: SkillRank) -> Self {
        Self {
            kind,
            rank,
            id: Uuid::new_v4().to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.rank.name(), self.kind.behavior().name)
    }

    pub fn slot_id(&self) -> String {
        format!("{}:{}", self.kind.id(), self.rank.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillInventory {
    items: Vec<SkillItem>,
}

impl SkillInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: SkillKind, rank: SkillRank) -> SkillItem {
        let item = SkillItem::new(kind, rank);
        self.items.push(item.clone());
        item
    }

    /// Remove the item with `id`. Returns false if it was not owned.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[SkillItem] {
        &self.items
    }

    pub fn count(&self, kind: SkillKind, rank: SkillRank) -> usize {
        self.items
            .iter()
            .filter(|item| item.kind == kind && item.rank == rank)
            .count()
    }

    pub fn owns(&self, kind: SkillKind, rank: SkillRank) -> bool {
        self.count(kind, rank) > 0
    }

    pub fn can_promote(&self, kind: SkillKind, rank: SkillRank) -> bool {
        !rank.is_terminal() && self.count(kind, rank) >= rank.upgrade_requirement()
    }

    /// Consume `upgrade_requirement` copies of `kind` at `rank` and add one
    /// copy at the next rank.
    ///
    /// Returns `None` and leaves the inventory untouched when there are not
    /// enough copies or the rank is terminal.
    pub fn promote(&mut self, kind: SkillKind, rank: SkillRank) -> Option<SkillItem> {
        if !self.can_promote(kind, rank) {
            return None;
        }
        let next = rank.next()?;

        let mut to_consume = rank.upgrade_requirement();
        self.items.retain(|item| {
            if to_consume > 0 && item.kind == kind && item.rank == rank {
                to_consume -= 1;
                false
            } else {
                true
            }
        });

        log::info!("promoted {} {} -> {}", kind, rank, next);
        Some(self.add(kind, next))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
