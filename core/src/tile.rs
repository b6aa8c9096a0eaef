use serde::{Deserialize, Serialize};

/// One cell of the board. Tiles are plain values: changing one means storing a new tile in its place.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub is_dug: bool,
    pub is_flagged: bool,
    pub is_mine: bool,
    /// Mines in the 8-neighborhood, always 0 on mine tiles.
    pub nearby_mines: u8,
}

impl Tile {
    pub const fn mine() -> Self {
        Self {
            is_dug: false,
            is_flagged: false,
            is_mine: true,
            nearby_mines: 0,
        }
    }

    pub const fn dug(self) -> Self {
        Self {
            is_dug: true,
            ..self
        }
    }

    pub const fn with_flag_toggled(self) -> Self {
        Self {
            is_flagged: !self.is_flagged,
            ..self
        }
    }

    /// Whether flood fill may open this tile.
    pub const fn is_openable(self) -> bool {
        !self.is_dug && !self.is_flagged
    }

    /// A dug safe tile with no adjacent mines, the only kind flood fill spreads from.
    pub const fn is_open_zero(self) -> bool {
        self.is_dug && !self.is_mine && self.nearby_mines == 0
    }
}
