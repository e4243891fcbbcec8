mod agent;
mod common;
mod config;
mod coordinate;
pub mod events;
mod game;
mod grid;
mod logging;
mod placement;
pub mod ui;
mod vessel;

pub use agent::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use events::{Event, EventLog, EventSink, Side};
pub use game::*;
pub use grid::*;
pub use logging::{init_logging, level_from, LOG_ENV};
pub use placement::*;
pub use vessel::*;
