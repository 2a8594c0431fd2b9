//! Content loaders for reading game data from files.
//!
//! Each loader parses one file format into `crawler-core` types;
//! [`ContentFactory`] wires them together for a whole data directory.

pub mod actors;
pub mod campaign;
pub mod config;
pub mod factory;
pub mod item;
pub mod map;

pub use actors::{ActorLoader, ActorTemplate, TemplateKind};
pub use campaign::{Campaign, CampaignLoader};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use map::{ChestPlacement, ItemPlacement, MapData, MapLoader, SpawnPlacement};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
