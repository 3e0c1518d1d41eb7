//! starfall-core CLI
//!
//! A convenience harness for exercising `generate()` locally — not the
//! C-ABI binding layer the spec's external interface describes, which
//! remains an external collaborator and is out of scope here.

use clap::Parser;
use log::{error, info, LevelFilter};
use starfall_core::config::GenerationDefaults;
use starfall_core::{generate, GenerationParameters, Shape};

#[derive(Parser, Debug)]
#[command(name = "starfall-core")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of planets to place (5-500).
    #[arg(short = 'n', long)]
    n_planets: Option<u32>,

    /// Number of players, each receiving one home planet.
    #[arg(short = 'p', long)]
    n_players: Option<u32>,

    /// Density in (0.0, 1.0]; higher is denser.
    #[arg(short, long)]
    density: Option<f64>,

    /// Spatial layout: random, spiral, circle, ring, cluster, grid.
    #[arg(short, long)]
    shape: Option<String>,

    /// Seed driving the deterministic RNG.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Log level (error, warn, info, debug, trace).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Print raw `x y` coordinate pairs instead of JSON.
    #[arg(long)]
    plain: bool,
}

fn main() {
    let cli = Cli::parse();

    let level_filter = match cli.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", cli.log_level);
            LevelFilter::Info
        }
    };
    env_logger::Builder::new().filter_level(level_filter).init();

    let defaults = GenerationDefaults::default();

    let shape = match cli.shape {
        Some(ref s) => match s.parse::<Shape>() {
            Ok(shape) => shape,
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        None => defaults.shape,
    };

    let params = GenerationParameters {
        n_planets: cli.n_planets.unwrap_or(defaults.n_planets),
        n_players: cli.n_players.unwrap_or(defaults.n_players),
        density: cli.density.unwrap_or(defaults.density),
        shape,
        seed: cli.seed,
    };

    info!("starfall-core starting generation (shape={shape:?} seed={})", params.seed);

    match generate(&params) {
        Ok(galaxy) => {
            if cli.plain {
                for p in &galaxy.points {
                    println!("{} {}", p.x, p.y);
                }
            } else {
                match serde_json::to_string_pretty(&galaxy) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        error!("failed to serialize output: {e}");
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            error!("generation failed: {e}");
            std::process::exit(1);
        }
    }
}
