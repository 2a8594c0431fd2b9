//! Tiles of a dungeon level.

use crate::item::Item;

use super::building::Building;

/// Terrain class of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Floor,
    /// Solid rock; nothing walks through it.
    Wall,
    OpenDoor,
    ClosedDoor,
    UpLadder,
    DownLadder,
}

impl TileKind {
    pub fn is_passable(self) -> bool {
        !matches!(self, TileKind::Wall | TileKind::ClosedDoor)
    }

    /// The other state of a door. Non-doors have none.
    pub fn toggled(self) -> Option<Self> {
        match self {
            TileKind::OpenDoor => Some(TileKind::ClosedDoor),
            TileKind::ClosedDoor => Some(TileKind::OpenDoor),
            _ => None,
        }
    }

    /// Level index offset reached by taking this ladder.
    pub fn ladder_offset(self) -> Option<isize> {
        match self {
            TileKind::UpLadder => Some(-1),
            TileKind::DownLadder => Some(1),
            _ => None,
        }
    }
}

/// One cell of the level grid.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub kind: TileKind,
    /// Items resting on the floor, in drop order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub laying_items: Vec<Item>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub building: Option<Building>,
}

impl Tile {
    pub fn new(kind: TileKind) -> Self {
        Self {
            kind,
            laying_items: Vec::new(),
            building: None,
        }
    }

    pub fn with_building(mut self, building: impl Into<Building>) -> Self {
        self.building = Some(building.into());
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.laying_items.push(item);
        self
    }

    pub fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doors_toggle_both_ways() {
        assert_eq!(TileKind::OpenDoor.toggled(), Some(TileKind::ClosedDoor));
        assert_eq!(TileKind::ClosedDoor.toggled(), Some(TileKind::OpenDoor));
        assert_eq!(TileKind::Floor.toggled(), None);
    }

    #[test]
    fn passability() {
        assert!(Tile::default().is_passable());
        assert!(!Tile::new(TileKind::Wall).is_passable());
        assert!(!Tile::new(TileKind::ClosedDoor).is_passable());
        assert!(Tile::new(TileKind::DownLadder).is_passable());
    }
}
