//! Content loaders for reading game data from files.
//!
//! Loaders convert RON files into the read-only registries consumed by
//! the engine.

pub mod catalog;

pub use catalog::CatalogLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
