/// Side length of the default square grid.
pub const GRID_SIZE: usize = 6;
pub const FLEET_SIZE: usize = 7;
/// Vessel lengths of the standard fleet, placed in this order.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];
/// Placement attempts allowed per try, shared by the whole fleet.
pub const PLACEMENT_ATTEMPT_BUDGET: usize = 3000;

/// Parameters fixed for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Side length of both grids.
    pub size: usize,
}

impl MatchConfig {
    /// Destroyed vessels needed to win.
    pub const fn fleet_size(&self) -> usize {
        FLEET_SIZE
    }

    pub const fn fleet(&self) -> &'static [usize] {
        &FLEET
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { size: GRID_SIZE }
    }
}
