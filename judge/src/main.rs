use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;
use judge::{play_game, standings, MatchScore, Player, PlayerConfig, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Plays Bobail games between every pair of the given players.
#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// How many games to play per pair of players
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Games that are not decided after this many rounds count as a tie
    #[arg(short, long, default_value_t = 200)]
    max_rounds: usize,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// Default log level, "off", "error", "warn", "info", "debug" or "trace".
    /// RUST_LOG takes precedence.
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "Starting tournament");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = args
        .record_games_to_directory
        .clone()
        .map(Recorder::new)
        .transpose()?;

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<anyhow::Result<Vec<PlayerConfig>>>()?;
    let players: Vec<Player> = player_configs.iter().map(Player::from_config).collect();

    let mut results: HashMap<(usize, usize), MatchScore> = HashMap::new();
    for (i1, i2) in (0..players.len()).tuple_combinations() {
        let mut score = MatchScore::default();
        for game_idx in 0..args.num_games {
            let result = play_game(&mut rng, &players[i1], &players[i2], args.max_rounds, &mut recorder)?;
            debug!(game_idx, ?result);
            score.record(&result);
        }
        println!(
            "\n{} vs {} ({} games)\n{}",
            players[i1].name,
            players[i2].name,
            score.games(),
            score.summary([players[i1].name.as_str(), players[i2].name.as_str()])
        );
        results.insert((i1, i2), score);
    }

    if players.len() > 2 {
        let nicks: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        println!("\nStandings:");
        for (rank, standing) in standings(&nicks, &results).iter().enumerate() {
            println!(
                "{:>3}. {:<20} {:>5} wins {:>5} ties {:>5} games",
                rank + 1,
                standing.nick,
                standing.wins,
                standing.ties,
                standing.games
            );
        }
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
