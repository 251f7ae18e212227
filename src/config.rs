/*
 * Configuration Module
 *
 * Static settings that are fixed for the lifetime of a run: initial window
 * size, tick rate, plot history length and floors, and how boids are
 * spawned. Live-tunable values live in SimulationParams instead.
 * Loaded from an optional JSON file; missing keys take their defaults.
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::boid::SpawnSettings;
use crate::clock::{MAX_TARGET_FPS, MIN_TARGET_FPS};
use crate::domain::Domain;
use crate::error::ConfigError;
use crate::stats::DEFAULT_HISTORY_CAPACITY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub target_fps: f32,
    // Number of points each live plot keeps
    pub history_capacity: usize,
    pub velocity_plot_min_y: f32,
    pub neighbour_plot_min_y: f32,
    pub max_force: f32,
    pub initial_speed_min: f32,
    pub initial_speed_max: f32,
    // Agent count for the first flock; reset always goes back to the default
    pub initial_boids: Option<usize>,
    // Only makes runs repeatable on one machine and build
    pub rng_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            target_fps: 60.0,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            velocity_plot_min_y: 1.0,
            neighbour_plot_min_y: 3.0,
            max_force: 0.1,
            initial_speed_min: 1.5,
            initial_speed_max: 4.0,
            initial_boids: None,
            rng_seed: None,
        }
    }
}

impl SimulationConfig {
    // Load a configuration from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Domain::is_valid(self.window_width, self.window_height) {
            return Err(ConfigError::Invalid("window dimensions must be finite and positive"));
        }
        if !(MIN_TARGET_FPS..=MAX_TARGET_FPS).contains(&self.target_fps) {
            return Err(ConfigError::Invalid("target_fps must be between 1 and 1000"));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid("history_capacity must be non-zero"));
        }
        if !(self.velocity_plot_min_y > 0.0 && self.neighbour_plot_min_y > 0.0) {
            return Err(ConfigError::Invalid("plot Y floors must be positive"));
        }
        if !(self.max_force > 0.0) {
            return Err(ConfigError::Invalid("max_force must be positive"));
        }
        if !(self.initial_speed_min >= 0.0) {
            return Err(ConfigError::Invalid("initial_speed_min must be non-negative"));
        }
        if !(self.initial_speed_max >= self.initial_speed_min) || !self.initial_speed_max.is_finite() {
            return Err(ConfigError::Invalid(
                "initial_speed_max cannot be below initial_speed_min",
            ));
        }
        Ok(())
    }

    pub fn spawn_settings(&self) -> SpawnSettings {
        SpawnSettings {
            max_force: self.max_force,
            min_speed: self.initial_speed_min,
            max_speed: self.initial_speed_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spawn_settings(), SpawnSettings::default());
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "history_capacity": 50, "rng_seed": 9 }"#).unwrap();
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.rng_seed, Some(9));
        assert_eq!(config.target_fps, 60.0);
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            SimulationConfig { history_capacity: 0, ..SimulationConfig::default() },
            SimulationConfig { target_fps: 0.0, ..SimulationConfig::default() },
            SimulationConfig { target_fps: 1e-20, ..SimulationConfig::default() },
            SimulationConfig { target_fps: 5000.0, ..SimulationConfig::default() },
            SimulationConfig { max_force: -0.1, ..SimulationConfig::default() },
            SimulationConfig { window_width: 0.0, ..SimulationConfig::default() },
            SimulationConfig { window_height: f32::INFINITY, ..SimulationConfig::default() },
            SimulationConfig { window_width: f32::NAN, ..SimulationConfig::default() },
            SimulationConfig {
                initial_speed_min: 5.0,
                initial_speed_max: 1.0,
                ..SimulationConfig::default()
            },
        ];
        for config in cases {
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))), "{config:?}");
        }
    }

    #[test]
    fn overflowing_json_window_size_is_rejected() {
        let config: SimulationConfig = serde_json::from_str(r#"{ "window_width": 1e39 }"#).unwrap();
        assert!(config.window_width.is_infinite());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SimulationConfig::load("definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
