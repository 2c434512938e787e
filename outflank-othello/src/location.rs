//! Code for working with [`Location`]s on the Othello board.

use std::fmt::{self, Display, Formatter};

/// A zero-based (row, column) coordinate on the board.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Location {
    pub row: usize,
    pub col: usize,
}

/// One of the 8 compass directions a run of tokens can extend in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Every direction, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The (row, column) delta of a single step.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Location {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns whether this location lies on a board with `size` rows and columns.
    #[inline]
    pub fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// The neighbouring location one step in `direction`, or None if it falls off the board.
    #[inline]
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let next = Self { row, col };
        next.is_within(size).then_some(next)
    }

    /// Walk outward from (but not including) this location in `direction`.
    pub fn ray(self, direction: Direction, size: usize) -> Ray {
        Ray {
            current: self,
            direction,
            size,
        }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Convert from a row-major square index.
    #[inline]
    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: index / size,
            col: index % size,
        }
    }
}

/// Zero-based coordinates, as used in logs and errors ("(2, 3)").
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Iterator over the on-board locations along one direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    current: Location,
    direction: Direction,
    size: usize,
}

impl Iterator for Ray {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        let next = self.current.step(self.direction, self.size)?;
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_index_roundtrip() {
        assert_eq!(Location::new(0, 0).to_index(8), 0);
        assert_eq!(Location::new(7, 7).to_index(8), 63);
        assert_eq!(Location::from_index(13, 6), Location::new(2, 1));
    }

    #[test]
    fn step_stays_on_board() {
        let corner = Location::new(0, 0);
        assert_eq!(corner.step(Direction::North, 6), None);
        assert_eq!(corner.step(Direction::West, 6), None);
        assert_eq!(corner.step(Direction::NorthEast, 6), None);
        assert_eq!(
            corner.step(Direction::SouthEast, 6),
            Some(Location::new(1, 1))
        );

        let far = Location::new(5, 5);
        assert_eq!(far.step(Direction::South, 6), None);
        assert_eq!(far.step(Direction::East, 6), None);
        assert_eq!(far.step(Direction::NorthWest, 6), Some(Location::new(4, 4)));
    }

    #[test]
    fn ray_excludes_origin() {
        let ray: Vec<Location> = Location::new(2, 1).ray(Direction::West, 4).collect();
        assert_eq!(ray, vec![Location::new(2, 0)]);

        let ray: Vec<Location> = Location::new(0, 0).ray(Direction::SouthEast, 4).collect();
        assert_eq!(
            ray,
            vec![Location::new(1, 1), Location::new(2, 2), Location::new(3, 3)]
        );

        assert_eq!(Location::new(0, 3).ray(Direction::NorthEast, 4).count(), 0);
    }

    #[test]
    fn opposite_deltas_cancel() {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            let opposite = Direction::ALL[(i + 4) % 8];
            let (ar, ac) = direction.delta();
            let (br, bc) = opposite.delta();
            assert_eq!((ar + br, ac + bc), (0, 0));
        }
    }

    #[test]
    fn location_to_str() {
        assert_eq!(Location::new(2, 3).to_string(), "(2, 3)");
    }
}
