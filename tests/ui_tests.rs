use seabattle::ui::{describe, glyph, render_grid};
use seabattle::{
    CellState, Coordinate, Event, Grid, Heading, ShotError, ShotOutcome, Side, Vessel,
};

fn sample_grid() -> Grid {
    let mut grid = Grid::new(6);
    grid.place(Vessel::new(Coordinate::new(0, 0), 2, Heading::East))
        .unwrap();
    grid
}

#[test]
fn test_render_visible_fleet() {
    let rendered = render_grid(&sample_grid());
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "  | 1 | 2 | 3 | 4 | 5 | 6 |");
    assert_eq!(lines[1], "1 | ■ | ■ | ≋ | ≋ | ≋ | ≋ |");
    assert_eq!(lines[6], "6 | ≋ | ≋ | ≋ | ≋ | ≋ | ≋ |");
}

#[test]
fn test_render_hidden_fleet_shows_only_shots() {
    let mut grid = sample_grid();
    grid.set_fleet_hidden(true);
    let rendered = render_grid(&grid);
    assert_eq!(rendered.lines().nth(1), Some("1 | ≋ | ≋ | ≋ | ≋ | ≋ | ≋ |"));

    grid.shoot(Coordinate::new(0, 0)).unwrap();
    grid.shoot(Coordinate::new(3, 3)).unwrap();
    let rendered = render_grid(&grid);
    assert_eq!(rendered.lines().nth(1), Some("1 | X | ≋ | ≋ | ≋ | ≋ | ≋ |"));
    assert_eq!(rendered.lines().nth(4), Some("4 | ≋ | ≋ | ≋ | ⊙ | ≋ | ≋ |"));

    grid.shoot(Coordinate::new(0, 1)).unwrap();
    let rendered = render_grid(&grid);
    assert_eq!(rendered.lines().nth(1), Some("1 | X | X | ⊙ | ≋ | ≋ | ≋ |"));
    assert_eq!(rendered.lines().nth(2), Some("2 | ⊙ | ⊙ | ⊙ | ≋ | ≋ | ≋ |"));
}

#[test]
fn test_glyphs() {
    assert_eq!(glyph(CellState::Occupied, false), '■');
    assert_eq!(glyph(CellState::Occupied, true), '≋');
    assert_eq!(glyph(CellState::Hit, true), 'X');
    assert_eq!(glyph(CellState::Miss, true), '⊙');
    assert_eq!(glyph(CellState::SunkMarker, false), '⊙');
}

#[test]
fn test_describe_events() {
    let target = Coordinate::new(1, 3);
    assert_eq!(
        describe(&Event::TargetChosen {
            side: Side::Computer,
            target
        }),
        "Computer fires at: 2 4"
    );
    assert_eq!(
        describe(&Event::ShotRejected {
            side: Side::Human,
            target,
            error: ShotError::OutOfBounds
        }),
        "You're trying to shoot off the board!"
    );
    assert_eq!(
        describe(&Event::ShotResolved {
            side: Side::Human,
            target,
            outcome: ShotOutcome::Sunk
        }),
        "Vessel destroyed!"
    );
    assert_eq!(
        describe(&Event::MatchWon {
            winner: Side::Computer
        }),
        "The computer won!"
    );
}

#[test]
fn test_console_reporter_prints_prompt_without_failing() {
    use seabattle::ui::ConsoleReporter;
    use seabattle::EventSink;

    let mut reporter = ConsoleReporter;
    reporter.emit(Event::AwaitingInput { side: Side::Human });
    reporter.emit(Event::MatchWon { winner: Side::Human });
}
