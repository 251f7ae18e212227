/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the boid simulation. These parameters can be
 * modified through the UI. Every value has a documented range and default;
 * out-of-range edits are clamped here before the simulation reads them.
 * It also provides snapshot-based change detection for the UI.
 */

use std::ops::RangeInclusive;

// Parameters for the simulation that can be adjusted via UI
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub separation_weight: f32,
    pub alignment_weight: f32,
    pub cohesion_weight: f32,
    pub max_speed: f32,
    pub perception_radius: f32,
    pub show_perception: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Debug, Clone, PartialEq)]
struct ParamSnapshot {
    num_boids: usize,
    separation_weight: f32,
    alignment_weight: f32,
    cohesion_weight: f32,
    max_speed: f32,
    perception_radius: f32,
    show_perception: bool,
    pause_simulation: bool,
}

// What changed between the last snapshot and now
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub num_boids_changed: bool,
    pub any_changed: bool,
}

pub const DEFAULT_NUM_BOIDS: usize = 100;
pub const DEFAULT_WEIGHT: f32 = 1.0;
pub const DEFAULT_MAX_SPEED: f32 = 5.0;
pub const DEFAULT_PERCEPTION_RADIUS: f32 = 50.0;

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: DEFAULT_NUM_BOIDS,
            separation_weight: DEFAULT_WEIGHT,
            alignment_weight: DEFAULT_WEIGHT,
            cohesion_weight: DEFAULT_WEIGHT,
            max_speed: DEFAULT_MAX_SPEED,
            perception_radius: DEFAULT_PERCEPTION_RADIUS,
            show_perception: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> RangeInclusive<usize> {
        1..=300
    }

    pub fn get_weight_range() -> RangeInclusive<f32> {
        0.0..=9.99
    }

    pub fn get_max_speed_range() -> RangeInclusive<f32> {
        0.1..=99.99
    }

    pub fn get_radius_range() -> RangeInclusive<f32> {
        1.0..=99.99
    }

    pub fn set_num_boids(&mut self, value: usize) {
        self.num_boids = clamp_count(value, Self::get_num_boids_range());
    }

    pub fn set_separation_weight(&mut self, value: f32) {
        self.separation_weight = clamp_value(value, Self::get_weight_range(), DEFAULT_WEIGHT);
    }

    pub fn set_alignment_weight(&mut self, value: f32) {
        self.alignment_weight = clamp_value(value, Self::get_weight_range(), DEFAULT_WEIGHT);
    }

    pub fn set_cohesion_weight(&mut self, value: f32) {
        self.cohesion_weight = clamp_value(value, Self::get_weight_range(), DEFAULT_WEIGHT);
    }

    pub fn set_max_speed(&mut self, value: f32) {
        self.max_speed = clamp_value(value, Self::get_max_speed_range(), DEFAULT_MAX_SPEED);
    }

    pub fn set_perception_radius(&mut self, value: f32) {
        self.perception_radius = clamp_value(value, Self::get_radius_range(), DEFAULT_PERCEPTION_RADIUS);
    }

    // Pull every value back into its range; run after free-form UI edits
    pub fn sanitize(&mut self) {
        self.set_num_boids(self.num_boids);
        self.set_separation_weight(self.separation_weight);
        self.set_alignment_weight(self.alignment_weight);
        self.set_cohesion_weight(self.cohesion_weight);
        self.set_max_speed(self.max_speed);
        self.set_perception_radius(self.perception_radius);
    }

    // Restore every documented default, keeping the change-tracking snapshot
    pub fn reset_to_defaults(&mut self) {
        let previous_values = self.previous_values.take();
        *self = Self {
            previous_values,
            ..Self::default()
        };
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.snapshot());
    }

    // Compare against the last snapshot; nothing has changed without one
    pub fn detect_changes(&self) -> ParamChanges {
        let Some(prev) = &self.previous_values else {
            return ParamChanges::default();
        };

        ParamChanges {
            num_boids_changed: self.num_boids != prev.num_boids,
            any_changed: *prev != self.snapshot(),
        }
    }

    fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            num_boids: self.num_boids,
            separation_weight: self.separation_weight,
            alignment_weight: self.alignment_weight,
            cohesion_weight: self.cohesion_weight,
            max_speed: self.max_speed,
            perception_radius: self.perception_radius,
            show_perception: self.show_perception,
            pause_simulation: self.pause_simulation,
        }
    }
}

fn clamp_value(value: f32, range: RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        return fallback;
    }
    value.clamp(*range.start(), *range.end())
}

fn clamp_count(value: usize, range: RangeInclusive<usize>) -> usize {
    value.clamp(*range.start(), *range.end())
}
