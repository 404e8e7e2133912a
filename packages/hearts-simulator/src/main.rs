//! Hearts simulator CLI: plays batches of automated games in memory and
//! records per-game metrics.

mod metrics;
mod output;
mod simulator;
mod types;

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use hearts::domain::{derive_game_seed, require_seed_32, seed_from_u64};
use hearts::GameConfig;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "hearts-simulator")]
#[command(about = "Fast in-memory Hearts game simulator")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed - fills the first 8 bytes of a 32-byte seed; each game derives its own from it
    #[arg(long, conflicts_with = "seed_hex")]
    seed: Option<u64>,

    /// Full 32-byte base seed as 64 hex characters, as recorded in the metrics
    #[arg(long, value_parser = parse_seed_hex)]
    seed_hex: Option<[u8; 32]>,

    /// JSON game configuration; missing fields use the standard game
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated player names, overriding the config
    #[arg(long, value_delimiter = ',')]
    players: Option<Vec<String>>,

    /// Point threshold that ends a game, overriding the config
    #[arg(long)]
    max_points: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(&args)?;
    config.validate()?;

    if args.show_output {
        info!("Starting hearts simulator");
        info!(
            "Configuration: {} games, players={:?}, max_points={}",
            args.games, config.player_names, config.max_points
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let base_seed = args.seed_hex.or(args.seed.map(seed_from_u64));

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed: [u8; 32] = match &base_seed {
            Some(base) => derive_game_seed(base, game_num),
            None => rand::random(),
        };

        match Simulator::new(&config, game_seed, game_num).simulate_game() {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_num,
                    &game_seed,
                    args.games,
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }

                if args.verbose {
                    info!(
                        "Game {} completed: winner={}, hands={}",
                        game_num,
                        result.report.winner,
                        result.report.hands_played()
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();

    let (details_path, csv_path) = {
        let (d, c) = output_writer.output_paths();
        (d.to_path_buf(), c.to_path_buf())
    };
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", details_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&config.player_names, &results, errors, elapsed, args.games);
    }

    Ok(())
}

fn parse_seed_hex(value: &str) -> Result<[u8; 32], String> {
    let bytes = hex::decode(value.trim()).map_err(|e| format!("invalid hex seed: {e}"))?;
    require_seed_32(&bytes).map_err(|e| e.to_string())
}

/// Standard game, then the JSON file, then CLI flags.
fn load_config(args: &Args) -> Result<GameConfig, hearts::ConfigError> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::standard(),
    };
    if let Some(players) = &args.players {
        config = config.with_players(players.iter().map(|p| p.trim().to_string()));
    }
    if let Some(max_points) = args.max_points {
        config = config.with_max_points(max_points);
    }
    // Seeds are supplied per game by the run loop.
    config.seed = None;
    Ok(config)
}

#[derive(Default)]
struct PlayerStats {
    wins: u32,
    total: u64,
    min: Option<u32>,
    max: Option<u32>,
    moons: usize,
}

fn print_summary(
    players: &[String],
    results: &[GameResult],
    errors: u32,
    elapsed: std::time::Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut stats: HashMap<&str, PlayerStats> = HashMap::new();
    let mut hands = 0usize;
    for result in results {
        let report = &result.report;
        hands += report.hands_played();
        for (name, points) in result.final_totals() {
            let Some(key) = players.iter().find(|p| **p == name) else {
                continue;
            };
            let entry = stats.entry(key.as_str()).or_default();
            entry.total += u64::from(points);
            entry.min = Some(entry.min.map_or(points, |m| m.min(points)));
            entry.max = Some(entry.max.map_or(points, |m| m.max(points)));
            entry.moons += report
                .hands
                .iter()
                .filter(|h| h.shot_the_moon && h.points_for(&name) == Some(0))
                .count();
            if report.winner == name {
                entry.wins += 1;
            }
        }
    }

    println!(
        "Average hands per game: {:.1}",
        hands as f64 / results.len() as f64
    );
    println!("\n=== Results by Player ===");
    for name in players {
        let Some(s) = stats.get(name.as_str()) else {
            continue;
        };
        let avg = s.total as f64 / results.len() as f64;
        let win_rate = (s.wins as f64 / results.len() as f64) * 100.0;
        println!(
            "{}: avg={:.1}, min={}, max={}, moons={}, wins={} ({:.1}%)",
            name,
            avg,
            s.min.unwrap_or(0),
            s.max.unwrap_or(0),
            s.moons,
            s.wins,
            win_rate
        );
    }
}
