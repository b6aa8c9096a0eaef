use alloc::collections::VecDeque;
use hashbrown::HashSet;

use crate::*;

/// Digs `coords` and flood-fills outwards through tiles with no adjacent mines.
///
/// Already dug targets are left alone. Flagged tiles are never opened by the fill, they act as a barrier even when
/// they border an empty region. Returns how many tiles were newly dug.
pub fn reveal(board: &mut Board, coords: Coord2) -> Result<CellCount> {
    let coords = board.validate_coords(coords)?;

    let tile = board[coords];
    if tile.is_dug {
        return Ok(0);
    }

    board.set(coords, tile.dug());
    let mut dug_count: CellCount = 1;
    log::debug!("Dug tile at {:?}, nearby mines: {}", coords, tile.nearby_mines);

    if !board[coords].is_open_zero() {
        return Ok(dug_count);
    }

    let mut visited: HashSet<Coord2> = HashSet::from_iter([coords]);
    let mut to_visit: VecDeque<_> = openable_neighbors(board, coords).collect();
    log::trace!("Starting flood-fill from {:?}, initial neighbors: {:?}", coords, to_visit);

    while let Some(visit_coords) = to_visit.pop_front() {
        if !visited.insert(visit_coords) {
            continue;
        }

        let visit_tile = board[visit_coords];
        if !visit_tile.is_openable() {
            continue;
        }

        board.set(visit_coords, visit_tile.dug());
        dug_count += 1;
        log::trace!(
            "Flood dug tile at {:?}, nearby mines: {}",
            visit_coords,
            visit_tile.nearby_mines
        );

        if board[visit_coords].is_open_zero() {
            to_visit.extend(
                openable_neighbors(board, visit_coords).filter(|pos| !visited.contains(pos)),
            );
        }
    }

    Ok(dug_count)
}

fn openable_neighbors(board: &Board, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
    board
        .iter_neighbors(coords)
        .filter(|&pos| board[pos].is_openable())
}
