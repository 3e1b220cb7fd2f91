//! Item catalog loader.

use std::path::Path;

use quest_core::{Item, ItemCatalog};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<Item>,
}

/// Loader for item catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an item catalog from a RON file.
    ///
    /// Duplicate ids in the file are a content-authoring bug and fail the
    /// load.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let file: ItemCatalogFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        ItemCatalog::from_items(file.items)
            .map_err(|id| anyhow::anyhow!("Duplicate item id in catalog: {}", id.as_str()))
    }
}
