//! Console presentation: board rendering and English message text.

use std::io::{self, Write};

use crate::{
    common::{CellState, ShotError, ShotOutcome},
    events::{Event, EventSink, Side},
    grid::Grid,
};

/// Glyph for a cell. Hidden fleets show intact vessel cells as open water.
pub fn glyph(state: CellState, fleet_hidden: bool) -> char {
    match state {
        CellState::Empty => '≋',
        CellState::Occupied if fleet_hidden => '≋',
        CellState::Occupied => '■',
        CellState::Hit => 'X',
        CellState::Miss | CellState::SunkMarker => '⊙',
    }
}

/// Render `grid` as a numbered table with 1-based row and column labels.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::from(" ");
    for c in 0..grid.size() {
        out.push_str(&format!(" | {}", c + 1));
    }
    out.push_str(" |");
    for (r, row) in grid.rows().enumerate() {
        out.push_str(&format!("\n{} |", r + 1));
        for &state in row {
            out.push_str(&format!(" {} |", glyph(state, grid.is_fleet_hidden())));
        }
    }
    out
}

/// Banner shown once before the first move.
pub fn greeting() -> &'static str {
    "  Welcome to the  \n      game of     \n    SEA BATTLE    "
}

/// Both boards, the human's on top.
pub fn render_boards(human: &Grid, computer: &Grid) -> String {
    let rule = "-".repeat(20);
    format!(
        "{rule}\nYour board:\n{}\n{rule}\nComputer's board:\n{}",
        render_grid(human),
        render_grid(computer),
    )
}

/// User-facing text for an event.
pub fn describe(event: &Event) -> String {
    match event {
        Event::TurnStarted { side: Side::Human, .. } => "Your move!".to_string(),
        Event::TurnStarted { side: Side::Computer, .. } => "Computer's move!".to_string(),
        Event::AwaitingInput { .. } => "Enter two numbers (e.g. 2 4): ".to_string(),
        Event::MalformedInput { .. } => "Invalid input.".to_string(),
        Event::TargetChosen { side, target } => match side {
            Side::Computer => format!("Computer fires at: {}", target),
            Side::Human => format!("You fire at: {}", target),
        },
        Event::ShotRejected { error, .. } => match error {
            ShotError::OutOfBounds => "You're trying to shoot off the board!".to_string(),
            ShotError::AlreadyTargeted => "That cell has already been shot at.".to_string(),
        },
        Event::ShotResolved { outcome, .. } => match outcome {
            ShotOutcome::Miss => "Miss!".to_string(),
            ShotOutcome::Hit => "Vessel damaged!".to_string(),
            ShotOutcome::Sunk => "Vessel destroyed!".to_string(),
        },
        Event::MatchWon { winner: Side::Human } => "You won!".to_string(),
        Event::MatchWon { winner: Side::Computer } => "The computer won!".to_string(),
    }
}

/// [`EventSink`] that prints every event to stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl EventSink for ConsoleReporter {
    fn emit(&mut self, event: Event) {
        let text = describe(&event);
        match event {
            Event::AwaitingInput { .. } => {
                print!("{}", text);
                // Prompt must be visible before blocking on stdin. A failed
                // flush only delays the prompt; reading input still works.
                if let Err(e) = io::stdout().flush() {
                    log::warn!("could not flush prompt: {}", e);
                }
            }
            Event::TurnStarted { .. } | Event::MatchWon { .. } => {
                println!("{}", "-".repeat(20));
                println!("{}", text);
            }
            _ => println!("{}", text),
        }
    }
}
