use core::fmt;

use rand::Rng;
use serde::Serialize;

use crate::{
    agent::Agent,
    config::MatchConfig,
    events::{Event, EventSink, Side},
    grid::Grid,
    placement::random_grid,
};

/// Where a match is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Grids not yet populated.
    Setup,
    Playing,
    /// Terminal; no more moves are accepted.
    Finished { winner: Side },
}

/// Errors from driving a match in the wrong state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// `step` was called before the grids were set up.
    NotStarted,
    /// `step` was called after a winner was decided.
    Finished,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::NotStarted => write!(f, "Match has not been set up"),
            MatchError::Finished => write!(f, "Match is already finished"),
        }
    }
}

impl std::error::Error for MatchError {}

/// Per-side statistics for a [`MatchSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SideSummary {
    pub moves: usize,
    pub vessels_lost: usize,
}

/// Serializable outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub winner: Option<Side>,
    pub turns: usize,
    pub human: SideSummary,
    pub computer: SideSummary,
}

struct Seat {
    grid: Grid,
    agent: Box<dyn Agent>,
    moves: usize,
}

/// Runs the alternating-turn loop between a human seat and a computer seat.
/// The human seat moves first; a hit or sink lets the same side go again.
pub struct Match {
    config: MatchConfig,
    state: MatchState,
    turn: usize,
    human: Seat,
    computer: Seat,
}

impl Match {
    /// Create a match in [`MatchState::Setup`] with empty grids.
    pub fn new(config: MatchConfig, human: Box<dyn Agent>, computer: Box<dyn Agent>) -> Self {
        let seat = |agent: Box<dyn Agent>| Seat {
            grid: Grid::new(config.size),
            agent,
            moves: 0,
        };
        let human = seat(human);
        let computer = seat(computer);
        Self {
            config,
            state: MatchState::Setup,
            turn: 0,
            human,
            computer,
        }
    }

    /// Populate both grids with a random fleet and start play. The
    /// computer's fleet is hidden.
    pub fn setup<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let human = random_grid(rng, self.config.size, self.config.fleet());
        let mut computer = random_grid(rng, self.config.size, self.config.fleet());
        computer.set_fleet_hidden(true);
        self.start_with(human, computer);
    }

    /// Start play on grids prepared by the caller.
    pub fn start_with(&mut self, human: Grid, computer: Grid) {
        self.human.grid = human;
        self.computer.grid = computer;
        self.human.moves = 0;
        self.computer.moves = 0;
        self.turn = 0;
        self.state = MatchState::Playing;
        log::info!(
            "match started on a {}x{} grid",
            self.config.size,
            self.config.size
        );
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The side whose move is next.
    pub fn active_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::Human
        } else {
            Side::Computer
        }
    }

    /// Grid defended by `side`.
    pub fn grid(&self, side: Side) -> &Grid {
        &self.seat(side).grid
    }

    /// Play a single move for the active side and report the resulting state.
    pub fn step(&mut self, events: &mut dyn EventSink) -> anyhow::Result<MatchState> {
        match self.state {
            MatchState::Setup => return Err(MatchError::NotStarted.into()),
            MatchState::Finished { .. } => return Err(MatchError::Finished.into()),
            MatchState::Playing => {}
        }

        let side = self.active_side();
        events.emit(Event::TurnStarted {
            side,
            turn: self.moves(),
        });
        let (active, passive) = match side {
            Side::Human => (&mut self.human, &mut self.computer),
            Side::Computer => (&mut self.computer, &mut self.human),
        };
        let repeat = active.agent.make_move(side, &mut passive.grid, events)?;
        active.moves += 1;
        if !repeat {
            self.turn += 1;
        }

        let fleet = self.config.fleet_size();
        let winner = if self.computer.grid.destroyed_count() == fleet {
            Some(Side::Human)
        } else if self.human.grid.destroyed_count() == fleet {
            Some(Side::Computer)
        } else {
            None
        };
        if let Some(winner) = winner {
            log::info!("{:?} wins after {} moves", winner, self.moves());
            self.state = MatchState::Finished { winner };
            events.emit(Event::MatchWon { winner });
        }
        Ok(self.state)
    }

    /// Step until a winner is decided.
    pub fn run(&mut self, events: &mut dyn EventSink) -> anyhow::Result<Side> {
        loop {
            if let MatchState::Finished { winner } = self.step(events)? {
                return Ok(winner);
            }
        }
    }

    /// Moves played by both sides so far.
    pub fn moves(&self) -> usize {
        self.human.moves + self.computer.moves
    }

    pub fn summary(&self) -> MatchSummary {
        let side_summary = |seat: &Seat| SideSummary {
            moves: seat.moves,
            vessels_lost: seat.grid.destroyed_count(),
        };
        MatchSummary {
            winner: match self.state {
                MatchState::Finished { winner } => Some(winner),
                _ => None,
            },
            turns: self.moves(),
            human: side_summary(&self.human),
            computer: side_summary(&self.computer),
        }
    }

    fn seat(&self, side: Side) -> &Seat {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }
}
