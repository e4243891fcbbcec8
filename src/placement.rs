//! Randomised fleet placement.

use rand::Rng;

use crate::common::FleetError;
use crate::config::PLACEMENT_ATTEMPT_BUDGET;
use crate::coordinate::Coordinate;
use crate::grid::Grid;
use crate::vessel::{Heading, Vessel};

/// Try once to place vessels of the given `lengths`, in order, on a fresh
/// `size`×`size` grid.
///
/// Origins are drawn from `[0, size]` on both axes, so some draws land off the
/// grid and are simply retried. All vessels share one attempt budget; running
/// out abandons the whole grid.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    lengths: &[usize],
) -> Result<Grid, FleetError> {
    place_fleet_with_budget(rng, size, lengths, PLACEMENT_ATTEMPT_BUDGET)
}

/// [`place_fleet`] with an explicit attempt budget.
pub fn place_fleet_with_budget<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    lengths: &[usize],
    budget: usize,
) -> Result<Grid, FleetError> {
    let max = size as i32;
    place_fleet_with(size, lengths, budget, || {
        let origin = Coordinate::new(rng.random_range(0..=max), rng.random_range(0..=max));
        (origin, rng.random())
    })
}

/// Place vessels of `lengths` in order, taking each candidate origin and
/// heading from `draw`. Every call to `draw` counts against `budget`,
/// whichever vessel it was for.
pub fn place_fleet_with<F>(
    size: usize,
    lengths: &[usize],
    budget: usize,
    mut draw: F,
) -> Result<Grid, FleetError>
where
    F: FnMut() -> (Coordinate, Heading),
{
    let mut grid = Grid::new(size);
    let mut attempts = 0usize;
    for &length in lengths {
        loop {
            attempts += 1;
            if attempts > budget {
                return Err(FleetError::PlacementBudgetExceeded { attempts: budget });
            }
            let (origin, heading) = draw();
            if grid.place(Vessel::new(origin, length, heading)).is_ok() {
                break;
            }
        }
    }
    log::debug!(
        "placed {} vessels on a {}x{} grid in {} attempts",
        lengths.len(),
        size,
        size,
        attempts
    );
    Ok(grid)
}

/// Place the fleet, starting over on a fresh grid whenever a try runs out of
/// budget. Never gives up.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R, size: usize, lengths: &[usize]) -> Grid {
    retry_placement(|| place_fleet(rng, size, lengths))
}

/// Call `try_place` until it yields a grid.
pub fn retry_placement<F>(mut try_place: F) -> Grid
where
    F: FnMut() -> Result<Grid, FleetError>,
{
    let mut restarts = 0usize;
    loop {
        match try_place() {
            Ok(grid) => return grid,
            Err(e) => {
                restarts += 1;
                log::debug!("{}; restarting placement (restart {})", e, restarts);
            }
        }
    }
}
