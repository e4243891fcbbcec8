//! Agents: the two ways of choosing where to shoot.

use std::io::BufRead;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::coordinate::Coordinate;
use crate::events::{Event, EventSink, Side};
use crate::grid::Grid;

/// A participant that picks targets on the opponent's grid.
pub trait Agent {
    /// Propose the next target on `opponent`.
    fn ask(
        &mut self,
        side: Side,
        opponent: &Grid,
        events: &mut dyn EventSink,
    ) -> anyhow::Result<Coordinate>;

    /// Shoot at `opponent` until a shot is accepted. Returns `true` if the
    /// shot hit or sank a vessel, meaning `side` moves again.
    fn make_move(
        &mut self,
        side: Side,
        opponent: &mut Grid,
        events: &mut dyn EventSink,
    ) -> anyhow::Result<bool> {
        loop {
            let target = self.ask(side, opponent, events)?;
            match opponent.shoot(target) {
                Ok(outcome) => {
                    events.emit(Event::ShotResolved {
                        side,
                        target,
                        outcome,
                    });
                    return Ok(outcome.grants_repeat());
                }
                Err(error) => {
                    log::debug!("{:?} target ({}) rejected: {}", side, target, error);
                    events.emit(Event::ShotRejected {
                        side,
                        target,
                        error,
                    });
                }
            }
        }
    }
}

/// Computer opponent that fires at uniformly random cells. It keeps no
/// history; repeats are refused by the grid and simply re-drawn.
pub struct AutomatedAgent {
    rng: SmallRng,
}

impl AutomatedAgent {
    pub fn new(rng: SmallRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl Agent for AutomatedAgent {
    fn ask(
        &mut self,
        side: Side,
        opponent: &Grid,
        events: &mut dyn EventSink,
    ) -> anyhow::Result<Coordinate> {
        let size = opponent.size() as i32;
        let target = Coordinate::new(
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
        );
        events.emit(Event::TargetChosen { side, target });
        Ok(target)
    }
}

/// Human player typing `row col` (1-based) on a line-oriented input.
/// Only end of input is fatal; any other bad line is reported and re-read.
pub struct InteractiveAgent<R> {
    input: R,
}

impl<R: BufRead> InteractiveAgent<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Agent for InteractiveAgent<R> {
    fn ask(
        &mut self,
        side: Side,
        _opponent: &Grid,
        events: &mut dyn EventSink,
    ) -> anyhow::Result<Coordinate> {
        let mut buf = Vec::new();
        loop {
            events.emit(Event::AwaitingInput { side });
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                anyhow::bail!("input closed while waiting for a target");
            }
            // Undecodable bytes become U+FFFD and fail to parse like any other typo.
            let line = String::from_utf8_lossy(&buf);
            match parse_target(&line) {
                Some(target) => return Ok(target),
                None => events.emit(Event::MalformedInput {
                    side,
                    input: line.trim().to_string(),
                }),
            }
        }
    }
}

/// Parse exactly two whitespace-separated 1-based integers into a
/// zero-based coordinate. Bounds are not checked here.
pub fn parse_target(input: &str) -> Option<Coordinate> {
    let mut parts = input.split_whitespace();
    let row: i32 = parts.next()?.parse().ok()?;
    let col: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coordinate::new(row.checked_sub(1)?, col.checked_sub(1)?))
}
