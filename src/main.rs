/*
 * Boid Flocking Simulation
 *
 * This application simulates the flocking behavior of birds (boids) based on three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * A control panel adjusts the rules live and two plots track the average
 * speed and neighbor count over the last few seconds.
 */

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use flockview::{app, SimulationConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "flockview", version, about = "Interactive boid flocking simulation")]
struct Cli {
    /// JSON file with window, tick rate, plot and spawn settings.
    #[arg(long, env = "FLOCKVIEW_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for the random number generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of boids in the first flock (1-300).
    #[arg(long)]
    boids: Option<usize>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if cli.seed.is_some() {
        config.rng_seed = cli.seed;
    }
    if cli.boids.is_some() {
        config.initial_boids = cli.boids;
    }
    config.validate().context("validating configuration")?;

    info!(?config, "starting boid simulation");
    app::run(config);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
