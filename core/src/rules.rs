use crate::*;

/// A board is won once every safe tile has been dug. Flags play no part.
pub fn check_win(board: &Board) -> bool {
    board
        .iter_coords()
        .map(|coords| board[coords])
        .all(|tile| tile.is_mine || tile.is_dug)
}

/// A board is lost once any mine has been dug.
pub fn check_loss(board: &Board) -> bool {
    board
        .iter_coords()
        .map(|coords| board[coords])
        .any(|tile| tile.is_mine && tile.is_dug)
}
