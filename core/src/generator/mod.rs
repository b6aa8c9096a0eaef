use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait MinefieldGenerator {
    /// Builds a board for `config`. When `safe_center` is given, no mine is placed in the 3×3 block around it.
    fn generate(&mut self, config: GameConfig, safe_center: Option<Coord2>) -> Result<Board>;
}

/// Every cell of a `config`-sized board outside the safe zone, in row-major order.
pub fn mine_candidates(config: GameConfig, safe_center: Option<Coord2>) -> Vec<Coord2> {
    let (width, height) = config.size;
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .filter(|&coords| safe_center.is_none_or(|center| !is_within_one(coords, center)))
        .collect()
}
