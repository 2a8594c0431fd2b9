//! Content factory for building a playable game from data files.

use std::path::{Path, PathBuf};

use crawler_core::{
    ActorId, Chest, DungeonLevel, Game, GameConfig, PcgRng, TilePosition, compute_seed,
};
use rand::Rng;
use tracing::{debug, info};

use crate::loaders::{
    ActorLoader, ActorTemplate, Campaign, CampaignLoader, ConfigLoader, ItemCatalog, ItemLoader,
    LoadResult, MapData, MapLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── campaign.ron
/// ├── items.ron
/// ├── actors.ron
/// └── maps/
///     ├── cellar.ron
///     └── crypt.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Random stream for loot rolls, kept clear of the per-level streams.
    const LOOT_STREAM: u64 = u64::MAX;

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the campaign description from `campaign.ron`.
    pub fn load_campaign(&self) -> LoadResult<Campaign> {
        let path = self.data_dir.join("campaign.ron");
        CampaignLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load actor templates from `actors.ron`.
    pub fn load_actors(&self) -> LoadResult<Vec<(String, ActorTemplate)>> {
        let path = self.data_dir.join("actors.ron");
        ActorLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    ///
    /// Returns terrain and unresolved placements; see [`Self::build_level`].
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapData> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Builds a populated level from map `map_name`.
    ///
    /// Enemy ids are drawn from `next_id`, which is advanced past every
    /// spawned enemy so ids stay unique across levels. Enemy loot is rolled
    /// from `rng`.
    pub fn build_level<R: Rng + ?Sized>(
        &self,
        map_name: &str,
        items: &ItemCatalog,
        templates: &[(String, ActorTemplate)],
        config: &GameConfig,
        next_id: &mut u32,
        rng: &mut R,
    ) -> LoadResult<DungeonLevel> {
        let map = self.load_map(map_name)?;
        Self::populate(map, items, templates, config, next_id, rng)
            .map_err(|e| anyhow::anyhow!("Failed to build level '{}': {}", map_name, e))
    }

    fn populate<R: Rng + ?Sized>(
        map: MapData,
        items: &ItemCatalog,
        templates: &[(String, ActorTemplate)],
        config: &GameConfig,
        next_id: &mut u32,
        rng: &mut R,
    ) -> LoadResult<DungeonLevel> {
        let mut level = DungeonLevel::from_grid(map.tiles).with_tile_size(config.tile_size);
        level.entry_position = level.tile_center(map.entry);

        for placement in map.chests {
            let at = TilePosition::new(placement.at.0, placement.at.1);
            let chest = Chest::new(placement.level)
                .with_items(items.instantiate_all(&placement.items)?)
                .map_err(|e| anyhow::anyhow!("Chest at {} overflows: {}", at, e))?;
            let tile = level
                .tile_mut(at)
                .ok_or_else(|| anyhow::anyhow!("Chest at {} is off the map", at))?;
            if tile.building.is_some() {
                anyhow::bail!("Two buildings placed at {}", at);
            }
            tile.building = Some(chest.into());
        }

        for placement in map.items {
            let at = TilePosition::new(placement.at.0, placement.at.1);
            let item = items.instantiate(&placement.item)?;
            level
                .tile_mut(at)
                .ok_or_else(|| anyhow::anyhow!("Item at {} is off the map", at))?
                .laying_items
                .push(item);
        }

        for placement in map.enemies {
            let at = TilePosition::new(placement.at.0, placement.at.1);
            let template = ActorLoader::find(templates, &placement.template)?;
            if template.is_player() {
                anyhow::bail!("Template '{}' cannot spawn as an enemy", placement.template);
            }

            let id = ActorId(*next_id);
            *next_id += 1;
            let loot = template.roll_loot(items, rng)?;
            let enemy = template
                .instantiate(id, items, config)?
                .with_loot(loot)
                .with_position(level.tile_center(at));
            level.spawn(enemy)?;
        }

        debug!(
            actors = level.actors().len(),
            width = level.dimensions().width,
            height = level.dimensions().height,
            "level populated"
        );
        Ok(level)
    }

    /// Loads everything and assembles a new game seeded with `seed`.
    pub fn build_game(&self, seed: u64) -> LoadResult<Game> {
        let config = self.load_config()?;
        let campaign = self.load_campaign()?;
        let items = self.load_items()?;
        let templates = self.load_actors()?;

        let player_template = ActorLoader::find(&templates, &campaign.player)?;
        if !player_template.is_player() {
            anyhow::bail!("Campaign player '{}' is not a player template", campaign.player);
        }
        let player = player_template.instantiate(ActorId::PLAYER, &items, &config)?;

        let mut next_id = ActorId::PLAYER.0 + 1;
        let mut loot_rng = PcgRng::new(compute_seed(seed, Self::LOOT_STREAM));
        let levels = campaign
            .levels
            .iter()
            .map(|name| {
                self.build_level(name, &items, &templates, &config, &mut next_id, &mut loot_rng)
            })
            .collect::<LoadResult<Vec<_>>>()?;

        info!(
            levels = levels.len(),
            enemies = next_id - 1,
            items = items.len(),
            seed,
            "content loaded"
        );
        Ok(Game::new(levels, player, config, seed)?)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
