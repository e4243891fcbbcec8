use seabattle::{init_logging, AutomatedAgent, EventLog, Match, MatchConfig};
use rand::{rngs::SmallRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut placement_rng = SmallRng::seed_from_u64(seed1 ^ seed2.rotate_left(32));
    let mut game = Match::new(
        MatchConfig::default(),
        Box::new(AutomatedAgent::seeded(seed1)),
        Box::new(AutomatedAgent::seeded(seed2)),
    );
    game.setup(&mut placement_rng);

    let mut log = EventLog::new();
    game.run(&mut log)?;

    println!("{}", serde_json::to_string(&game.summary())?);
    Ok(())
}
