//! Map data loader.
//!
//! A map is an ASCII layout plus placement lists. The layout legend:
//!
//! ```text
//! .  floor          #  wall
//! +  closed door    /  open door
//! <  up ladder      >  down ladder
//! ```
//!
//! Short rows are padded with floor. Chests, floor items and enemy spawns are
//! placed by tile coordinates and resolved against the item catalog and actor
//! templates by [`ContentFactory`](crate::ContentFactory).

use std::path::Path;

use crawler_core::{Tile, TileGrid, TileKind, TilePosition};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// A locked chest and its contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChestPlacement {
    pub at: (u32, u32),
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub items: Vec<String>,
}

/// An item lying on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPlacement {
    pub at: (u32, u32),
    pub item: String,
}

/// An enemy spawned from a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPlacement {
    pub at: (u32, u32),
    pub template: String,
}

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    layout: Vec<String>,
    entry: (u32, u32),
    #[serde(default)]
    chests: Vec<ChestPlacement>,
    #[serde(default)]
    items: Vec<ItemPlacement>,
    #[serde(default)]
    enemies: Vec<SpawnPlacement>,
}

/// Parsed map: terrain plus unresolved placements.
#[derive(Debug, Clone, PartialEq)]
pub struct MapData {
    pub tiles: TileGrid,
    pub entry: TilePosition,
    pub chests: Vec<ChestPlacement>,
    pub items: Vec<ItemPlacement>,
    pub enemies: Vec<SpawnPlacement>,
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load map data from a RON file.
    pub fn load(path: &Path) -> LoadResult<MapData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse map data from RON text.
    ///
    /// Every placement must fall inside the layout, and the entry tile must
    /// be passable.
    pub fn parse(content: &str) -> LoadResult<MapData> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let tiles = Self::parse_layout(&data.layout)?;
        let dimensions = tiles.dimensions();

        let placements = std::iter::once(("entry", data.entry))
            .chain(data.chests.iter().map(|chest| ("chest", chest.at)))
            .chain(data.items.iter().map(|item| ("item", item.at)))
            .chain(data.enemies.iter().map(|enemy| ("enemy", enemy.at)));
        for (what, (column, row)) in placements {
            if !dimensions.contains(TilePosition::new(column, row)) {
                anyhow::bail!(
                    "Map {} at ({}, {}) is outside the {}x{} layout",
                    what,
                    column,
                    row,
                    dimensions.width,
                    dimensions.height
                );
            }
        }

        let entry = TilePosition::new(data.entry.0, data.entry.1);
        if !tiles.get(entry).is_some_and(Tile::is_passable) {
            anyhow::bail!("Map entry {} is not walkable", entry);
        }

        Ok(MapData {
            tiles,
            entry,
            chests: data.chests,
            items: data.items,
            enemies: data.enemies,
        })
    }

    /// Converts layout rows into a tile grid.
    pub fn parse_layout(rows: &[String]) -> LoadResult<TileGrid> {
        if rows.is_empty() {
            anyhow::bail!("Map layout has no rows");
        }

        let rows = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(column, symbol)| {
                        Self::tile_kind(symbol).map(Tile::new).ok_or_else(|| {
                            anyhow::anyhow!(
                                "Unknown map symbol '{}' at ({}, {})",
                                symbol,
                                column,
                                row
                            )
                        })
                    })
                    .collect::<LoadResult<Vec<Tile>>>()
            })
            .collect::<LoadResult<Vec<_>>>()?;

        Ok(TileGrid::from_rows(rows))
    }

    /// Maps a layout symbol to its tile kind.
    pub fn tile_kind(symbol: char) -> Option<TileKind> {
        match symbol {
            '.' => Some(TileKind::Floor),
            '#' => Some(TileKind::Wall),
            '+' => Some(TileKind::ClosedDoor),
            '/' => Some(TileKind::OpenDoor),
            '<' => Some(TileKind::UpLadder),
            '>' => Some(TileKind::DownLadder),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_symbols_become_tiles() {
        let map = MapLoader::parse(
            r######"(
                layout: [
                    "#####",
                    "#.+>#",
                    "#/<",
                ],
                entry: (1, 1),
                enemies: [(at: (3, 2), template: "rat")],
            )"######,
        )
        .expect("map should parse");

        let kind = |column, row| map.tiles.get(TilePosition::new(column, row)).map(|t| t.kind);
        assert_eq!(map.tiles.dimensions().width, 5);
        assert_eq!(map.tiles.dimensions().height, 3);
        assert_eq!(kind(0, 0), Some(TileKind::Wall));
        assert_eq!(kind(2, 1), Some(TileKind::ClosedDoor));
        assert_eq!(kind(3, 1), Some(TileKind::DownLadder));
        assert_eq!(kind(1, 2), Some(TileKind::OpenDoor));
        assert_eq!(kind(2, 2), Some(TileKind::UpLadder));
        // padded
        assert_eq!(kind(4, 2), Some(TileKind::Floor));
        assert_eq!(map.entry, TilePosition::new(1, 1));
        assert_eq!(map.enemies.len(), 1);
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let err = MapLoader::parse(r#"(layout: ["..x"], entry: (0, 0))"#).unwrap_err();
        assert!(err.to_string().contains("'x'"));
    }

    #[test]
    fn placements_must_be_in_bounds() {
        let err = MapLoader::parse(
            r#"(layout: ["..."], entry: (0, 0), chests: [(at: (5, 0), level: 1)])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("chest"));
    }

    #[test]
    fn entry_must_be_walkable() {
        let err = MapLoader::parse(r##"(layout: ["#.."], entry: (0, 0))"##).unwrap_err();
        assert!(err.to_string().contains("not walkable"));
    }
}
