//! Observable match events and the sink that receives them.
//!
//! The engine never formats user-facing text; it reports what happened as
//! [`Event`] values and leaves presentation to an [`EventSink`].

use serde::Serialize;

use crate::common::{ShotError, ShotOutcome};
use crate::coordinate::Coordinate;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Something a display or log may want to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `side` is about to move; `turn` is the match-wide move number.
    TurnStarted { side: Side, turn: usize },
    /// `side` is waiting for a line of input.
    AwaitingInput { side: Side },
    /// Input that is not two integers was rejected.
    MalformedInput { side: Side, input: String },
    /// `side` picked `target` on its own.
    TargetChosen { side: Side, target: Coordinate },
    /// A shot was refused; the same side picks again.
    ShotRejected {
        side: Side,
        target: Coordinate,
        error: ShotError,
    },
    /// A shot landed.
    ShotResolved {
        side: Side,
        target: Coordinate,
        outcome: ShotOutcome,
    },
    /// `winner` destroyed the whole opposing fleet.
    MatchWon { winner: Side },
}

/// Receiver of match events.
pub trait EventSink {
    fn emit(&mut self, event: Event);
}

/// Sink that keeps every event in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}
