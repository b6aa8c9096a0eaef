#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use clock::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use preset::*;
pub use reveal::*;
pub use rules::*;
pub use tile::*;
pub use types::*;

mod board;
mod clock;
mod engine;
mod error;
mod generator;
mod preset;
mod reveal;
mod rules;
mod tile;
mod types;

/// Board dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// `(width, height)`
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked((9, 9), 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked((16, 16), 40);
    pub const EXPERT: Self = Self::new_unchecked((30, 16), 99);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Both dimensions must be positive and at least one cell must stay free of mines.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::InvalidConfiguration("board dimensions must be positive"));
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration("too many mines for the board"));
        }
        Ok(())
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::BEGINNER
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DigOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl DigOutcome {
    pub const fn has_update(self) -> bool {
        use DigOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
