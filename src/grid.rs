//! Grid state: vessel placements, shots, and what each cell shows.

use core::fmt;
use std::collections::HashSet;

use crate::common::{CellState, PlacementError, ShotError, ShotOutcome};
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

/// One side's square board.
///
/// Two coordinate sets are kept apart: `reserved` holds every vessel cell and
/// its surrounding buffer and decides placement legality, `blocked` holds every
/// cell that may no longer be targeted (shots plus water around sunk vessels).
/// What a cell looks like is tracked separately in `cells`.
#[derive(Clone)]
pub struct Grid {
    size: usize,
    fleet_hidden: bool,
    destroyed: usize,
    cells: Vec<CellState>,
    reserved: HashSet<Coordinate>,
    blocked: HashSet<Coordinate>,
    vessels: Vec<Vessel>,
}

impl Grid {
    /// Create an empty `size`×`size` grid with a visible fleet.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            fleet_hidden: false,
            destroyed: 0,
            cells: vec![CellState::Empty; size * size],
            reserved: HashSet::new(),
            blocked: HashSet::new(),
            vessels: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether renderers must hide intact vessel cells.
    pub fn is_fleet_hidden(&self) -> bool {
        self.fleet_hidden
    }

    pub fn set_fleet_hidden(&mut self, hidden: bool) {
        self.fleet_hidden = hidden;
    }

    /// Number of vessels with no health left.
    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// `true` if `coord` lies inside `[0, size)²`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.index(coord).is_some()
    }

    /// State of the cell at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Cell states row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// `true` if `coord` is a vessel cell or touches one.
    pub fn is_reserved(&self, coord: Coordinate) -> bool {
        self.reserved.contains(&coord)
    }

    /// `true` if shooting at `coord` would be rejected as already targeted.
    pub fn is_blocked(&self, coord: Coordinate) -> bool {
        self.blocked.contains(&coord)
    }

    /// Place `vessel`, reserving its cells and the water around them.
    pub fn place(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        if vessel.coordinates().any(|c| !self.contains(c)) {
            return Err(PlacementError::OutOfBounds);
        }
        if vessel.coordinates().any(|c| self.reserved.contains(&c)) {
            return Err(PlacementError::Conflict);
        }
        for coord in vessel.coordinates() {
            self.set_cell(coord, CellState::Occupied);
        }
        let buffer: Vec<Coordinate> = vessel.buffer().filter(|&c| self.contains(c)).collect();
        self.reserved.extend(buffer);
        self.vessels.push(vessel);
        Ok(())
    }

    /// Fire at `coord`.
    ///
    /// A coordinate can be targeted once. Sinking a vessel also blocks and
    /// marks every untargeted cell around it.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.contains(coord) {
            return Err(ShotError::OutOfBounds);
        }
        if !self.blocked.insert(coord) {
            return Err(ShotError::AlreadyTargeted);
        }

        let Some(idx) = self.vessels.iter().position(|v| v.occupies(coord)) else {
            self.set_cell(coord, CellState::Miss);
            log::trace!("shot at ({}, {}) missed", coord.row, coord.col);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(coord, CellState::Hit);
        if !self.vessels[idx].take_hit() {
            log::trace!("shot at ({}, {}) hit", coord.row, coord.col);
            return Ok(ShotOutcome::Hit);
        }

        self.destroyed += 1;
        let surrounding: Vec<Coordinate> = self.vessels[idx]
            .buffer()
            .filter(|&c| self.contains(c))
            .collect();
        for c in surrounding {
            if self.blocked.insert(c) {
                self.set_cell(c, CellState::SunkMarker);
            }
        }
        log::trace!(
            "shot at ({}, {}) sank a vessel, {} destroyed",
            coord.row,
            coord.col,
            self.destroyed
        );
        Ok(ShotOutcome::Sunk)
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        let size = self.size as i32;
        if (0..size).contains(&coord.row) && (0..size).contains(&coord.col) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    fn set_cell(&mut self, coord: Coordinate, state: CellState) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = state;
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  size: {},\n  hidden: {},\n  destroyed: {},\n  blocked: {},\n  vessels: {:?}\n}}",
            self.size,
            self.fleet_hidden,
            self.destroyed,
            self.blocked.len(),
            self.vessels
        )
    }
}
