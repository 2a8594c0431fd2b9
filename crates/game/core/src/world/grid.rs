//! Resizable grid of tiles.

use std::fmt;

use super::tile::Tile;

/// Integer tile coordinates. `column` grows along +x, `row` along +y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilePosition {
    pub column: u32,
    pub row: u32,
}

impl TilePosition {
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Chebyshev distance: 1 for all eight neighbours.
    pub fn chebyshev(self, other: Self) -> u32 {
        self.column
            .abs_diff(other.column)
            .max(self.row.abs_diff(other.row))
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: TilePosition) -> bool {
        position.column < self.width && position.row < self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Row-major storage of tiles.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    dimensions: GridDimensions,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Creates a grid of default floor tiles.
    pub fn new(width: u32, height: u32) -> Self {
        let dimensions = GridDimensions::new(width, height);
        Self {
            dimensions,
            tiles: vec![Tile::default(); dimensions.area()],
        }
    }

    /// Builds a grid from rows of tiles. Short rows are padded with floor.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let height = rows.len() as u32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for mut row in rows {
            row.resize_with(width as usize, Tile::default);
            tiles.extend(row);
        }
        Self {
            dimensions: GridDimensions::new(width, height),
            tiles,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn index(&self, position: TilePosition) -> Option<usize> {
        self.dimensions.contains(position).then(|| {
            position.row as usize * self.dimensions.width as usize + position.column as usize
        })
    }

    pub fn get(&self, position: TilePosition) -> Option<&Tile> {
        self.index(position).map(|index| &self.tiles[index])
    }

    pub fn get_mut(&mut self, position: TilePosition) -> Option<&mut Tile> {
        self.index(position).map(move |index| &mut self.tiles[index])
    }

    /// Changes the grid size.
    ///
    /// Tiles that stay inside the new bounds keep their contents; everything
    /// outside is dropped and newly exposed cells become default floor.
    pub fn resize(&mut self, width: u32, height: u32) {
        let old = std::mem::take(&mut self.tiles);
        let old_width = self.dimensions.width as usize;
        let old_dimensions = self.dimensions;
        let mut old: Vec<Option<Tile>> = old.into_iter().map(Some).collect();

        let dimensions = GridDimensions::new(width, height);
        let mut tiles = Vec::with_capacity(dimensions.area());
        for row in 0..height {
            for column in 0..width {
                let position = TilePosition::new(column, row);
                let kept = old_dimensions
                    .contains(position)
                    .then(|| old[row as usize * old_width + column as usize].take())
                    .flatten();
                tiles.push(kept.unwrap_or_default());
            }
        }

        self.dimensions = dimensions;
        self.tiles = tiles;
    }

    pub fn iter(&self) -> impl Iterator<Item = (TilePosition, &Tile)> {
        let width = self.dimensions.width.max(1);
        self.tiles.iter().enumerate().map(move |(index, tile)| {
            let index = index as u32;
            (TilePosition::new(index % width, index / width), tile)
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }
}
