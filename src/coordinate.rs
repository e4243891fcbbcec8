//! Grid positions.

use core::fmt;

/// Offsets of a cell and its eight surrounding cells.
const NEIGHBOURHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-based `(row, col)` position. May lie outside any particular grid;
/// bounds are checked by the grid that receives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Shift by `(d_row, d_col)`.
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// This coordinate together with its 8-neighbourhood, unfiltered.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOURHOOD
            .into_iter()
            .map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// `true` if the two positions touch, including diagonally, or coincide.
    pub fn touches(self, other: Coordinate) -> bool {
        (self.row - other.row).abs() <= 1 && (self.col - other.col).abs() <= 1
    }
}

impl fmt::Display for Coordinate {
    /// One-based `row col`, the form players type.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}
