//! Dungeon world model: tiles, buildings and levels.

mod building;
mod grid;
mod level;
mod report;
mod tile;

pub use building::{Building, Chest, Interaction, LockPickError, LockPickingResult};
pub use grid::{GridDimensions, TileGrid, TilePosition};
pub use level::{DungeonLevel, InteractionOutcome, ItemUseOutcome, LevelError};
pub use report::{Death, TickReport};
pub use tile::{Tile, TileKind};
