/*
 * Simulation Module
 *
 * The frame driver. Owns the flock, the parameter surface and the two
 * statistics histories, and runs one tick at a time:
 *
 *   sample parameters -> apply_rules -> update -> aggregate stats -> append
 *
 * A tick always runs to completion; the renderer only reads state between
 * ticks. Resizing the domain, changing the agent count and resetting all
 * throw the current flock away and seed a fresh one.
 */

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::boid::SpawnSettings;
use crate::config::SimulationConfig;
use crate::domain::Domain;
use crate::error::ConfigError;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::stats::StatsHistory;

// Aggregates computed at the end of a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStats {
    pub avg_speed: f32,
    pub avg_neighbour_count: f32,
    pub max_speed: f32,
    pub max_neighbour_count: usize,
}

// Why the flock was rebuilt, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rebuild {
    Resize,
    AgentCount,
    Reset,
}

pub struct Simulation {
    flock: Flock,
    params: SimulationParams,
    spawn: SpawnSettings,
    velocity_history: StatsHistory,
    neighbour_history: StatsHistory,
    last_stats: Option<TickStats>,
    tick_count: u64,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut params = SimulationParams::default();
        if let Some(count) = config.initial_boids {
            params.set_num_boids(count);
        }

        let spawn = config.spawn_settings();
        let domain = Domain::new(config.window_width, config.window_height);
        let flock = Flock::new(params.num_boids, domain, &spawn, &mut rng);

        info!(
            boids = flock.len(),
            width = domain.width,
            height = domain.height,
            "simulation initialised"
        );

        Ok(Self {
            flock,
            params,
            spawn,
            velocity_history: StatsHistory::new(config.history_capacity, config.velocity_plot_min_y),
            neighbour_history: StatsHistory::new(config.history_capacity, config.neighbour_plot_min_y),
            last_stats: None,
            tick_count: 0,
            rng,
        })
    }

    pub fn flock(&self) -> &Flock {
        &self.flock
    }

    pub fn domain(&self) -> Domain {
        self.flock.domain()
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    // Edits made here are clamped and picked up at the start of the next tick
    pub fn params_mut(&mut self) -> &mut SimulationParams {
        &mut self.params
    }

    pub fn velocity_history(&self) -> &StatsHistory {
        &self.velocity_history
    }

    pub fn neighbour_history(&self) -> &StatsHistory {
        &self.neighbour_history
    }

    pub fn last_stats(&self) -> Option<TickStats> {
        self.last_stats
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // Run one full tick. Returns None when paused or the flock is empty.
    pub fn tick(&mut self) -> Option<TickStats> {
        self.params.sanitize();
        if self.params.num_boids != self.flock.len() {
            self.rebuild(self.flock.domain(), Rebuild::AgentCount);
        }

        if self.params.pause_simulation {
            return None;
        }

        // Parameters are sampled once and held for the whole tick
        let separation_weight = self.params.separation_weight;
        let alignment_weight = self.params.alignment_weight;
        let cohesion_weight = self.params.cohesion_weight;
        let max_speed = self.params.max_speed;
        let perception_radius = self.params.perception_radius;

        self.flock.apply_rules(
            separation_weight,
            alignment_weight,
            cohesion_weight,
            perception_radius,
            max_speed,
        );
        self.flock.update(max_speed);
        self.tick_count += 1;

        let stats = self.aggregate(perception_radius, max_speed)?;
        self.velocity_history.append(stats.avg_speed, stats.max_speed);
        self.neighbour_history
            .append(stats.avg_neighbour_count, stats.max_neighbour_count as f32);
        self.last_stats = Some(stats);

        Some(stats)
    }

    fn aggregate(&self, perception_radius: f32, max_speed: f32) -> Option<TickStats> {
        let avg_speed = self.flock.average_speed()?;
        let avg_neighbour_count = self.flock.average_neighbour_count(perception_radius)?;

        Some(TickStats {
            avg_speed,
            avg_neighbour_count,
            max_speed,
            max_neighbour_count: self.flock.max_neighbour_count(),
        })
    }

    // The window changed size: new domain, fresh flock, empty plots
    pub fn resize_domain(&mut self, width: f32, height: f32) {
        if !Domain::is_valid(width, height) {
            warn!(width, height, "ignoring resize to a degenerate domain");
            return;
        }

        self.velocity_history.clear();
        self.neighbour_history.clear();
        self.last_stats = None;
        self.rebuild(Domain::new(width, height), Rebuild::Resize);
    }

    pub fn set_agent_count(&mut self, count: usize) {
        self.params.set_num_boids(count);
        self.rebuild(self.flock.domain(), Rebuild::AgentCount);
    }

    // Back to documented defaults, including the agent count
    pub fn reset_to_defaults(&mut self) {
        self.params.reset_to_defaults();
        self.rebuild(self.flock.domain(), Rebuild::Reset);
    }

    // Swap in a freshly seeded flock; nothing from the old one survives
    fn rebuild(&mut self, domain: Domain, reason: Rebuild) {
        let previous = self.flock.len();
        self.flock = Flock::new(self.params.num_boids, domain, &self.spawn, &mut self.rng);

        info!(
            ?reason,
            previous,
            boids = self.flock.len(),
            width = domain.width,
            height = domain.height,
            "flock rebuilt"
        );
        debug!(tick = self.tick_count, "flock history discarded");
    }
}
