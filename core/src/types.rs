/// Single coordinate axis, used for the board side length and for positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Board position as `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Number of cells on a square board with the given side.
pub const fn square(size: Coord) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

/// Moore neighbourhood offsets, in row-major order.
const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterates the up-to-8 in-bounds neighbours of a cell on a square board.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    size: Coord,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, size: Coord) -> Self {
        Self {
            center,
            size,
            next: 0,
        }
    }

    fn shift(&self, (dr, dc): (i8, i8)) -> Option<Coord2> {
        let row = self.center.0.checked_add_signed(dr)?;
        let col = self.center.1.checked_add_signed(dc)?;
        (row < self.size && col < self.size).then_some((row, col))
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&offset) = OFFSETS.get(self.next) {
            self.next += 1;
            if let Some(pos) = self.shift(offset) {
                return Some(pos);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(OFFSETS.len() - self.next))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn corner_has_three_neighbors() {
        let found: Vec<_> = Neighbors::new((0, 0), 3).collect();
        assert_eq!(found, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_has_five_neighbors() {
        assert_eq!(Neighbors::new((0, 1), 3).count(), 5);
        assert_eq!(Neighbors::new((2, 1), 3).count(), 5);
    }

    #[test]
    fn interior_has_eight_neighbors() {
        let found: Vec<_> = Neighbors::new((1, 1), 3).collect();
        assert_eq!(found.len(), 8);
        assert!(!found.contains(&(1, 1)));
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(Neighbors::new((0, 0), 1).next(), None);
    }

    #[test]
    fn square_fits_largest_board() {
        assert_eq!(square(10), 100);
        assert_eq!(square(Coord::MAX), 65025);
    }
}
