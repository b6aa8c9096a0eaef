use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Row-major grid of tiles, `height` rows by `width` columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
    mine_count: CellCount,
}

impl Board {
    /// A board with no mines and nothing dug, used before the first click.
    pub fn blank(size: Coord2) -> Self {
        Self {
            tiles: Array2::default(size.to_nd_index()),
            mine_count: 0,
        }
    }

    /// Places a mine on each of `mine_coords` and fills in the neighbor counts.
    ///
    /// Duplicate coordinates are counted once.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::blank(size);

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            if !board[coords].is_mine {
                board.place_mine(coords);
            }
        }

        Ok(board)
    }

    /// Turns `coords` into a mine and bumps the count of every safe neighbor.
    fn place_mine(&mut self, coords: Coord2) {
        self.set(coords, Tile::mine());
        self.mine_count += 1;

        for pos in self.iter_neighbors(coords) {
            let tile = self[pos];
            if !tile.is_mine {
                self.set(
                    pos,
                    Tile {
                        nearby_mines: tile.nearby_mines + 1,
                        ..tile
                    },
                );
            }
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (width, height) = self.size();
        if coords.0 < width && coords.1 < height {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Board size as `(width, height)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.tiles.dim();
        (cols as Coord, rows as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.tiles.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn get(&self, coords: Coord2) -> Option<Tile> {
        self.tiles.get(coords.to_nd_index()).copied()
    }

    pub fn dug_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.is_dug).count() as CellCount
    }

    pub fn flag_count(&self) -> CellCount {
        self.tiles.iter().filter(|tile| tile.is_flagged).count() as CellCount
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.tiles.iter_neighbors(coords)
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Rows of tiles, top to bottom, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, Tile>> {
        self.tiles.rows().into_iter()
    }

    /// Marks every mine as dug, leaving all other tiles untouched. Returns how many were newly dug.
    pub fn dig_all_mines(&mut self) -> CellCount {
        let mut count = 0;
        for tile in self.tiles.iter_mut().filter(|tile| tile.is_mine && !tile.is_dug) {
            *tile = tile.dug();
            count += 1;
        }
        count
    }

    pub(crate) fn set(&mut self, coords: Coord2, tile: Tile) {
        self.tiles[coords.to_nd_index()] = tile;
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}
