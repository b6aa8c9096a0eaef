use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`, that is `(column, row)`.
pub type Coord2 = (Coord, Coord);

/// Maps `(x, y)` coordinates onto the row-major `[row, column]` index of the backing array.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // dimensions are built from `Coord` values, so they always fit
        let size = (cols as Coord, rows as Coord);
        NeighborIter::new(index, size)
    }
}

/// Walks the 3×3 window around `center` row by row, clipped to the board and skipping the center itself.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    min_x: Coord,
    max: Coord2,
    cursor: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        let (x, y) = center;
        let (width, height) = bounds;
        let min = (x.saturating_sub(1), y.saturating_sub(1));
        let max = (
            x.saturating_add(1).min(width.saturating_sub(1)),
            y.saturating_add(1).min(height.saturating_sub(1)),
        );

        let empty = width == 0 || height == 0 || min.0 > max.0 || min.1 > max.1;
        Self {
            center,
            min_x: min.0,
            max,
            cursor: (!empty).then_some(min),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let pos @ (x, y) = self.cursor?;
            self.cursor = if x < self.max.0 {
                Some((x + 1, y))
            } else if y < self.max.1 {
                Some((self.min_x, y + 1))
            } else {
                None
            };

            if pos != self.center {
                return Some(pos);
            }
        }
    }
}

/// Whether `a` lies within the 3×3 block centered on `b`.
pub const fn is_within_one(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn neighbors_are_clipped_at_corners() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();

        assert_eq!(neighbors, [(1, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn far_corner_of_largest_board_is_clipped() {
        let neighbors: Vec<_> = NeighborIter::new((254, 254), (255, 255)).collect();

        assert_eq!(neighbors, [(253, 253), (254, 253), (253, 254)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn nd_index_is_row_major() {
        let arr: Array2<u8> = Array2::zeros((2, 5));

        assert_eq!((4, 1).to_nd_index(), [1, 4]);
        assert_eq!(arr.iter_neighbors((4, 1)).count(), 3);
    }
}
