use rand::prelude::*;

use super::*;

/// Uniformly random placement: the candidate cells are shuffled and the first `mines` of them get a mine.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator {
    rng: SmallRng,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(&mut self, config: GameConfig, safe_center: Option<Coord2>) -> Result<Board> {
        let mut candidates = mine_candidates(config, safe_center);
        let mines = usize::from(config.mines);

        if mines > candidates.len() {
            log::warn!(
                "Cannot place {} mines, only {} cells available outside the safe zone",
                mines,
                candidates.len()
            );
            return Err(GameError::InvalidConfiguration(
                "more mines than cells outside the safe zone",
            ));
        }

        candidates.shuffle(&mut self.rng);
        let board = Board::from_mine_coords(config.size, &candidates[..mines])?;
        log::debug!(
            "Generated {}x{} minefield with {} mines, safe center: {:?}",
            config.size.0,
            config.size.1,
            board.mine_count(),
            safe_center
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_counts_are_exact(board: &Board) {
        for coords in board.iter_coords() {
            if !board[coords].is_mine {
                assert_eq!(board[coords].nearby_mines, board.adjacent_mine_count(coords));
            }
        }
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        let mut generator = RandomMinefieldGenerator::new(7);
        for seed_round in 0..20 {
            let board = generator.generate(GameConfig::EXPERT, None).unwrap();
            let placed = board.iter_coords().filter(|&c| board[c].is_mine).count();

            assert_eq!(placed, 99, "round {seed_round}");
            assert_eq!(board.mine_count(), 99);
            assert_counts_are_exact(&board);
        }
    }

    #[test]
    fn safe_zone_never_holds_a_mine() {
        let config = GameConfig::new((9, 9), 72).unwrap();
        let mut generator = RandomMinefieldGenerator::new(42);

        for center in [(0, 0), (4, 4), (8, 0), (8, 8), (3, 8)] {
            let board = generator.generate(config, Some(center)).unwrap();
            for coords in board.iter_coords().filter(|&c| is_within_one(c, center)) {
                assert!(!board[coords].is_mine, "mine at {coords:?} near {center:?}");
            }
            assert_eq!(board.mine_count(), 72);
            assert_counts_are_exact(&board);
        }
    }

    #[test]
    fn corner_click_leaves_more_room_than_center_click() {
        let config = GameConfig::new((3, 3), 5).unwrap();
        let mut generator = RandomMinefieldGenerator::new(1);

        assert!(generator.generate(config, Some((0, 0))).is_ok());
        assert_eq!(
            generator.generate(config, Some((1, 1))),
            Err(GameError::InvalidConfiguration(
                "more mines than cells outside the safe zone"
            ))
        );
    }

    #[test]
    fn same_seed_same_board() {
        let a = RandomMinefieldGenerator::new(99).generate(GameConfig::INTERMEDIATE, Some((3, 3)));
        let b = RandomMinefieldGenerator::new(99).generate(GameConfig::INTERMEDIATE, Some((3, 3)));

        assert_eq!(a, b);
    }
}
