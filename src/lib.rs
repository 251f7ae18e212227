/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation application.
 * The simulation core (boid, flock, domain, stats, params, simulation) has no
 * window state and can be driven headless; app, ui, renderer, plot and input
 * are the nannou front end on top of it.
 */

// Re-export key components for easier access
pub use boid::{Boid, RuleWeights, SpawnSettings};
pub use config::SimulationConfig;
pub use domain::Domain;
pub use error::ConfigError;
pub use flock::Flock;
pub use params::SimulationParams;
pub use simulation::{Simulation, TickStats};
pub use stats::StatsHistory;

// Define modules
pub mod app;
pub mod boid;
pub mod clock;
pub mod config;
pub mod debug;
pub mod domain;
pub mod error;
pub mod flock;
pub mod input;
pub mod params;
pub mod plot;
pub mod renderer;
pub mod simulation;
pub mod stats;
pub mod ui;

// Constants
pub const BOID_SIZE: f32 = 8.0;
