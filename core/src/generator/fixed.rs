use super::*;

/// Hands out a predetermined layout, for replays and scripted games.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(&mut self, config: GameConfig, safe_center: Option<Coord2>) -> Result<Board> {
        if let Some(center) = safe_center {
            if self.mines.iter().any(|&mine| is_within_one(mine, center)) {
                return Err(GameError::InvalidConfiguration("fixed layout has a mine in the safe zone"));
            }
        }

        let board = Board::from_mine_coords(config.size, &self.mines)?;
        if board.mine_count() != config.mines {
            return Err(GameError::InvalidConfiguration(
                "fixed layout does not match the configured mine count",
            ));
        }
        Ok(board)
    }
}
