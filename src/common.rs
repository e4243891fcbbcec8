//! Common types for the grid: cell states, shot outcomes and errors.

/// What a single cell of a grid currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Open water, never targeted.
    Empty,
    /// Part of a vessel, not yet hit.
    Occupied,
    /// Part of a vessel that has been hit.
    Hit,
    /// Targeted open water.
    Miss,
    /// Water next to a sunk vessel, known to be empty.
    SunkMarker,
}

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotOutcome {
    /// Shot missed all vessels.
    Miss,
    /// Shot damaged a vessel that is still afloat.
    Hit,
    /// Shot destroyed the last intact cell of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn.
    pub fn grants_repeat(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by `Grid::place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A vessel cell lies outside the grid.
    OutOfBounds,
    /// A vessel cell overlaps or touches an already placed vessel.
    Conflict,
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Vessel placement is out of bounds"),
            PlacementError::Conflict => write!(f, "Vessel placement touches another vessel"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors returned by `Grid::shoot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already shot at or is known empty.
    AlreadyTargeted,
}

impl core::fmt::Display for ShotError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "Target is outside the board"),
            ShotError::AlreadyTargeted => write!(f, "Target was already shot at"),
        }
    }
}

impl std::error::Error for ShotError {}

/// Errors returned by fleet placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// The shared attempt budget ran out before every vessel was placed.
    PlacementBudgetExceeded { attempts: usize },
}

impl core::fmt::Display for FleetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FleetError::PlacementBudgetExceeded { attempts } => {
                write!(f, "Fleet placement gave up after {} attempts", attempts)
            }
        }
    }
}

impl std::error::Error for FleetError {}
