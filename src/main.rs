use std::io;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, ui, AutomatedAgent, InteractiveAgent, Match, MatchConfig, MatchState, Side,
    GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        default_value_t = GRID_SIZE as u8,
        value_parser = clap::value_parser!(u8).range(6..=9),
        help = "Side length of both boards"
    )]
    size: u8,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let computer = AutomatedAgent::new(SmallRng::from_rng(&mut rng));
    let human = InteractiveAgent::new(io::stdin().lock());
    let config = MatchConfig {
        size: cli.size as usize,
    };
    let mut game = Match::new(config, Box::new(human), Box::new(computer));
    game.setup(&mut rng);

    println!("{}", ui::greeting());
    let mut reporter = ui::ConsoleReporter;
    loop {
        println!(
            "{}",
            ui::render_boards(game.grid(Side::Human), game.grid(Side::Computer))
        );
        if let MatchState::Finished { .. } = game.step(&mut reporter)? {
            break;
        }
    }
    Ok(())
}
