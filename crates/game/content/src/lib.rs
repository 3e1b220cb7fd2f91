//! Data-driven content definitions and loaders.
//!
//! This crate houses the built-in item catalog and provides loaders for
//! RON catalog files. Content is constructed once at startup and handed
//! to the engine by reference; nothing here appears in game state.

pub mod loaders;

pub use loaders::{CatalogLoader, LoadResult};

use quest_core::ItemCatalog;

/// Built-in catalog data shipped with the crate.
const DEFAULT_ITEMS: &str = include_str!("../data/items.ron");

/// Build the built-in item catalog.
///
/// Parsing can only fail if the embedded data file is broken, which is a
/// packaging bug; the error is surfaced rather than hidden behind a
/// panic.
pub fn default_catalog() -> LoadResult<ItemCatalog> {
    CatalogLoader::parse(DEFAULT_ITEMS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::{ItemId, ItemKind, Rarity};

    #[test]
    fn default_catalog_parses_and_is_complete() {
        let catalog = default_catalog().expect("embedded catalog is valid");
        assert_eq!(catalog.len(), 14);

        // Entries the adventure engine looks up by id must exist.
        for id in ["dream_crystal", "adventurer_boots", "health_ring"] {
            assert!(catalog.get(&ItemId::from(id)).is_some(), "missing {id}");
        }
    }

    #[test]
    fn default_catalog_covers_every_kind() {
        let catalog = default_catalog().expect("embedded catalog is valid");
        for kind in [
            ItemKind::Weapon,
            ItemKind::Armor,
            ItemKind::Accessory,
            ItemKind::Consumable,
            ItemKind::Material,
        ] {
            assert!(!catalog.items_by_kind(kind).is_empty(), "no {kind} items");
        }
    }

    #[test]
    fn dream_crystal_is_rare() {
        let catalog = default_catalog().expect("embedded catalog is valid");
        let crystal = catalog.get(&ItemId::from("dream_crystal")).unwrap();
        assert_eq!(crystal.rarity, Rarity::Rare);
    }
}
