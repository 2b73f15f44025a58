//! Labyrinth Maze Generator
//!
//! Command-line front end: generates a tournament maze from a seed, prints it,
//! and optionally checks it against a published fingerprint.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use labyrinth_maze::{
    core::hash::parse_grid_hash,
    verify_maze, MazeBuilder, MazeConfig, MazeStats, Seed, VERSION,
};

/// Output format for the generated maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `#` walls and `.` passages, one row per line
    Text,
    /// JSON object with dimension, seed, hash and bit rows
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "labyrinth-maze", version, about = "Deterministic tournament maze generator")]
struct Args {
    /// Side length of the grid (odd values give a full maze)
    #[arg(short, long)]
    dimension: Option<usize>,

    /// Text seed, e.g. a tournament maze seed
    #[arg(short, long, conflicts_with = "numeric_seed")]
    seed: Option<String>,

    /// Raw numeric seed, used without hashing
    #[arg(long)]
    numeric_seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Expected hex fingerprint; exit with an error if the maze differs
    #[arg(long)]
    verify: Option<String>,

    /// Log structural statistics
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let args = Args::parse();
    let config = MazeConfig::from_env();

    info!("Labyrinth Maze v{}", VERSION);

    let dimension = args.dimension.unwrap_or(config.default_dimension);
    let seed = match (args.seed, args.numeric_seed) {
        (Some(text), _) => Seed::Text(text),
        (None, Some(value)) => Seed::Numeric(value),
        (None, None) => Seed::Clock,
    };

    if !seed.is_deterministic() {
        warn!("No seed supplied: this maze is not reproducible and unfit for tournaments");
    }
    if dimension % 2 == 0 {
        warn!("Even dimension {}: last row and column stay walled", dimension);
    }

    let builder = MazeBuilder::new(config);

    let grid = match &args.verify {
        Some(hex_hash) => {
            let expected = parse_grid_hash(hex_hash)
                .ok_or_else(|| anyhow!("--verify expects 64 hex characters"))?;
            let grid = verify_maze(&builder, dimension, &seed, &expected)
                .context("maze verification failed")?;
            info!("Maze hash verified");
            grid
        }
        None => builder
            .generate_from_seed(dimension, &seed)
            .with_context(|| format!("failed to generate maze for seed {seed}"))?,
    };

    let hash = hex::encode(grid.compute_hash());
    info!("Seed {} resolved to {}", seed, grid.seed());
    info!("Dimension: {}", grid.dimension());
    info!("Maze Hash: {}", hash);

    if args.stats {
        let stats = MazeStats::analyze(&grid);
        info!(
            "Open cells: {}, passages: {}, dead ends: {}",
            stats.open_cells, stats.passages, stats.dead_ends
        );
        if !stats.is_perfect() {
            bail!("generated maze is not perfect: {:?}", stats);
        }
    }

    match args.format {
        OutputFormat::Text => print!("{grid}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "dimension": grid.dimension(),
                "seed": grid.seed(),
                "hash": hash,
                "grid": grid.to_bit_rows(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
