//! Static registry of obtainable items with rarity-weighted selection.
//!
//! The catalog is constructed once at startup (from code or from a data
//! file via `quest-content`) and is read-only afterwards. It is passed by
//! reference to the adventure engine and the feedback classifier rather
//! than reached through ambient global state, which keeps it swappable in
//! tests.

mod drop;
mod item;

pub use drop::{DropTable, RarityTiers};
pub use item::{Item, ItemEffect, ItemId, ItemKind, Rarity, StatKind};

use std::collections::HashMap;

use crate::rng::{RngOracle, mix_seed};

/// Roll contexts for the independent draws inside a drop resolution.
const ROLL_RARITY: u32 = 0;
const ROLL_GATE: u32 = 1;
const ROLL_PICK: u32 = 2;

/// Read-only, insertion-ordered item registry.
#[derive(Clone, Debug, Default)]
pub struct ItemCatalog {
    /// Items in insertion order; iteration and filtered views are stable.
    items: Vec<Item>,
    /// Id to index into `items`.
    index: HashMap<ItemId, usize>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of items.
    ///
    /// Returns the duplicated id if two items share one; callers treat a
    /// duplicate as a content-authoring bug.
    pub fn from_items(items: Vec<Item>) -> Result<Self, ItemId> {
        let mut catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, item: Item) -> Result<(), ItemId> {
        if self.index.contains_key(&item.id) {
            return Err(item.id);
        }
        self.index.insert(item.id.clone(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Exact lookup by id.
    ///
    /// A miss is a caller bug, not an exceptional runtime condition, so
    /// this returns `None` rather than an error.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// All items of one kind, in insertion order.
    pub fn items_by_kind(&self, kind: ItemKind) -> Vec<&Item> {
        self.items.iter().filter(|item| item.kind == kind).collect()
    }

    /// Uniformly select one item, optionally restricted to a rarity.
    ///
    /// Returns `None` when no item matches the filter.
    pub fn random_item(
        &self,
        rarity: Option<Rarity>,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Option<&Item> {
        let pool: Vec<&Item> = match rarity {
            Some(rarity) => self.items.iter().filter(|i| i.rarity == rarity).collect(),
            None => self.items.iter().collect(),
        };
        if pool.is_empty() {
            return None;
        }
        Some(pool[rng.index(seed, pool.len())])
    }

    /// Resolve an adventure drop for a daily health score.
    ///
    /// Two independent rolls: a uniform `[0, 100)` value picks a rarity
    /// tier from the score bucket, then a separate roll must pass the drop
    /// gate. Failing the gate yields no drop. A third roll picks uniformly
    /// among the items of the selected rarity.
    pub fn drop_for_adventure(
        &self,
        table: &DropTable,
        health_score: u32,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Option<&Item> {
        let rarity = table.rarity_for(health_score, rng.roll_percent(mix_seed(seed, 0, ROLL_RARITY)));

        if !table.passes_gate(rng.roll_percent(mix_seed(seed, 0, ROLL_GATE))) {
            return None;
        }

        self.random_item(Some(rarity), rng, mix_seed(seed, 0, ROLL_PICK))
    }
}
