use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use seabattle::{
    random_grid, CellState, Coordinate, Grid, ShotError, ShotOutcome, FLEET, FLEET_SIZE, GRID_SIZE,
};

fn fleet_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_grid(&mut rng, GRID_SIZE, &FLEET)
}

fn snapshot(grid: &Grid) -> (Vec<CellState>, usize, Vec<usize>) {
    (
        grid.rows().flatten().copied().collect(),
        grid.destroyed_count(),
        grid.vessels().iter().map(|v| v.health()).collect(),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vessels_are_straight_and_in_bounds(seed in any::<u64>()) {
        let grid = fleet_grid(seed);
        for vessel in grid.vessels() {
            let cells: Vec<Coordinate> = vessel.coordinates().collect();
            prop_assert_eq!(cells.len(), vessel.length());
            let (dr, dc) = vessel.heading().step();
            for (i, cell) in cells.iter().enumerate() {
                prop_assert_eq!(*cell, vessel.origin().offset(dr * i as i32, dc * i as i32));
                prop_assert!(grid.contains(*cell));
                prop_assert_eq!(grid.cell(*cell), Some(CellState::Occupied));
                prop_assert!(grid.is_reserved(*cell));
            }
        }
    }

    #[test]
    fn vessels_never_touch(seed in any::<u64>()) {
        let grid = fleet_grid(seed);
        let vessels = grid.vessels();
        for (i, a) in vessels.iter().enumerate() {
            for b in &vessels[i + 1..] {
                for ca in a.coordinates() {
                    for cb in b.coordinates() {
                        prop_assert!(!ca.touches(cb), "{:?} touches {:?}", a, b);
                    }
                }
            }
        }
    }

    #[test]
    fn second_shot_changes_nothing(seed in any::<u64>(), row in 0..GRID_SIZE as i32, col in 0..GRID_SIZE as i32) {
        let mut grid = fleet_grid(seed);
        let target = Coordinate::new(row, col);
        let before = snapshot(&grid);
        grid.shoot(target).unwrap();
        let after = snapshot(&grid);
        prop_assert_ne!(&before, &after);
        prop_assert_eq!(grid.shoot(target).unwrap_err(), ShotError::AlreadyTargeted);
        prop_assert_eq!(snapshot(&grid), after);
    }

    #[test]
    fn shooting_every_vessel_cell_sinks_the_fleet(seed in any::<u64>()) {
        let mut grid = fleet_grid(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut targets: Vec<Coordinate> = grid
            .vessels()
            .iter()
            .flat_map(|v| v.coordinates().collect::<Vec<_>>())
            .collect();
        targets.shuffle(&mut rng);

        for target in targets {
            let destroyed = grid.destroyed_count();
            let outcome = grid.shoot(target).unwrap();
            prop_assert!(outcome != ShotOutcome::Miss);
            let sunk_now = grid
                .vessels()
                .iter()
                .filter(|v| v.occupies(target))
                .all(|v| v.is_sunk());
            if outcome == ShotOutcome::Sunk {
                prop_assert!(sunk_now);
                prop_assert_eq!(grid.destroyed_count(), destroyed + 1);
            } else {
                prop_assert!(!sunk_now);
                prop_assert_eq!(grid.destroyed_count(), destroyed);
            }
        }
        prop_assert_eq!(grid.destroyed_count(), FLEET_SIZE);
        prop_assert!(grid.vessels().iter().all(|v| v.is_sunk()));
    }

    #[test]
    fn health_tracks_cells_shot(seed in any::<u64>(), shots in 0usize..36) {
        let mut grid = fleet_grid(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..shots {
            let target = Coordinate::new(
                rng.random_range(0..GRID_SIZE as i32),
                rng.random_range(0..GRID_SIZE as i32),
            );
            let _ = grid.shoot(target);
        }
        let mut sunk = 0;
        for vessel in grid.vessels() {
            let hit = vessel
                .coordinates()
                .filter(|&c| grid.cell(c) == Some(CellState::Hit))
                .count();
            prop_assert_eq!(vessel.health(), vessel.length() - hit);
            if vessel.is_sunk() {
                sunk += 1;
            }
        }
        prop_assert_eq!(grid.destroyed_count(), sunk);
    }
}
