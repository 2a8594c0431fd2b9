//! Game configuration loader.

use std::path::Path;

use crawler_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`], so a config file
    /// only needs to name the values it overrides.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(config.tile_size.is_finite() && config.tile_size > 0.0) {
            anyhow::bail!("Invalid config: tile_size must be positive, got {}", config.tile_size);
        }
        if !(config.tick_seconds.is_finite() && config.tick_seconds >= 0.0) {
            anyhow::bail!(
                "Invalid config: tick_seconds must not be negative, got {}",
                config.tick_seconds
            );
        }

        Ok(config)
    }
}
