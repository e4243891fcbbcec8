//! Vessel definitions and their derived footprint.

use core::fmt;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::coordinate::Coordinate;

/// Direction a vessel extends in from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    East,
    South,
    West,
    North,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::East, Heading::South, Heading::West, Heading::North];

    /// Unit step `(d_row, d_col)` along this heading.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
            Heading::North => (-1, 0),
        }
    }
}

impl Distribution<Heading> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Heading {
        Heading::ALL[rng.random_range(0..Heading::ALL.len())]
    }
}

/// A vessel: a straight run of `length` cells starting at `origin`.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    origin: Coordinate,
    length: usize,
    heading: Heading,
    health: usize,
}

impl Vessel {
    /// Create an undamaged vessel. `length` must be at least 1.
    pub fn new(origin: Coordinate, length: usize, heading: Heading) -> Self {
        debug_assert!(length >= 1, "vessel length must be positive");
        Self {
            origin,
            length,
            heading,
            health: length,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Cells not yet hit.
    pub fn health(&self) -> usize {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Occupied cells, origin first, walking along the heading.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.heading.step();
        let origin = self.origin;
        (0..self.length as i32).map(move |i| origin.offset(dr * i, dc * i))
    }

    /// `true` if `coord` is one of this vessel's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.coordinates().any(|c| c == coord)
    }

    /// The vessel's cells and every cell touching them.
    pub fn buffer(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.coordinates().flat_map(Coordinate::neighbourhood)
    }

    /// Take one point of damage. Returns `true` when this sinks the vessel.
    pub(crate) fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ origin: ({}, {}), length: {}, heading: {:?}, health: {} }}",
            self.origin.row, self.origin.col, self.length, self.heading, self.health,
        )
    }
}
