/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * Each boid follows three main rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * Neighbor distance is measured in the flat plane. Two boids close to each
 * other only through the wrapped edge of the domain are not neighbors.
 */

use std::f32::consts::TAU;

use nannou::prelude::*;
use rand::Rng;

use crate::domain::Domain;

// Any non-positive max speed is replaced by this value
pub const SPEED_FLOOR: f32 = 0.1;
// Any non-positive perception radius is replaced by this value
pub const RADIUS_FLOOR: f32 = 0.1;

// How a freshly spawned boid is set up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnSettings {
    pub max_force: f32,
    pub min_speed: f32,
    pub max_speed: f32,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            max_force: 0.1,
            min_speed: 1.5,
            max_speed: 4.0,
        }
    }
}

// Weights applied to the three steering rules
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleWeights {
    pub separation: f32,
    pub alignment: f32,
    pub cohesion: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_force: f32,
}

impl Boid {
    pub fn new(position: Point2, velocity: Vec2, max_force: f32) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            max_force,
        }
    }

    // Random position in the domain, random heading at a random speed
    pub fn random<R: Rng + ?Sized>(domain: &Domain, spawn: &SpawnSettings, rng: &mut R) -> Self {
        let position = domain.random_position(rng);
        let angle = rng.gen_range(0.0..TAU);
        // Half-open range; an empty one pins the speed to the minimum
        let speed = if spawn.min_speed < spawn.max_speed {
            rng.gen_range(spawn.min_speed..spawn.max_speed)
        } else {
            spawn.min_speed
        };
        let velocity = vec2(angle.cos(), angle.sin()) * speed;

        Self::new(position, velocity, spawn.max_force)
    }

    // Angle of travel, used by the renderer to orient the sprite
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }

    // Every other boid strictly closer than `radius`.
    // `own_index` is this boid's slot in `flock`; identity is by index.
    pub fn get_neighbours<'a>(&self, own_index: usize, flock: &'a [Boid], radius: f32) -> Vec<&'a Boid> {
        let radius = floor_radius(radius);

        flock
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != own_index && self.is_within(other, radius))
            .map(|(_, other)| other)
            .collect()
    }

    // Same predicate as get_neighbours without collecting
    pub fn neighbour_count(&self, own_index: usize, flock: &[Boid], radius: f32) -> usize {
        let radius = floor_radius(radius);

        flock
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != own_index && self.is_within(other, radius))
            .count()
    }

    #[inline]
    fn is_within(&self, other: &Boid, radius: f32) -> bool {
        self.position.distance(other.position) < radius
    }

    // Reynolds steering: desired velocity minus current velocity, capped at max_force
    pub fn steer_towards(&self, target: Vec2, max_speed: f32) -> Vec2 {
        let max_speed = floor_speed(max_speed);

        let length = target.length();
        let desired = if length > 0.0 {
            target * (max_speed / length)
        } else {
            target
        };

        limit_length(desired - self.velocity, self.max_force)
    }

    // Calculate separation force (avoid crowding neighbors)
    pub fn separation(&self, neighbours: &[&Boid], max_speed: f32) -> Vec2 {
        if neighbours.is_empty() {
            return Vec2::ZERO;
        }

        self.steer_towards(self.separation_push(neighbours), max_speed)
    }

    // Average of the away-vectors, each rescaled to length 1/d so closer boids push harder
    fn separation_push(&self, neighbours: &[&Boid]) -> Vec2 {
        let mut push = Vec2::ZERO;
        for other in neighbours {
            let diff = self.position - other.position;
            let distance = diff.length();

            // Coincident boids push in no direction but still count towards the average
            if distance > 0.0 {
                push += diff / distance / distance;
            }
        }
        push / neighbours.len() as f32
    }

    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn alignment(&self, neighbours: &[&Boid], max_speed: f32) -> Vec2 {
        if neighbours.is_empty() {
            return Vec2::ZERO;
        }

        let mut steering = Vec2::ZERO;
        for other in neighbours {
            steering += other.velocity;
        }
        steering /= neighbours.len() as f32;

        self.steer_towards(steering, max_speed)
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, neighbours: &[&Boid], max_speed: f32) -> Vec2 {
        if neighbours.is_empty() {
            return Vec2::ZERO;
        }

        let mut centre = Vec2::ZERO;
        for other in neighbours {
            centre += other.position;
        }
        centre /= neighbours.len() as f32;

        self.steer_towards(centre - self.position, max_speed)
    }

    // Combined steering for one tick. Neighbors are gathered once and shared by all three rules.
    // Reads only the frozen state in `flock`; the caller stores the result.
    pub fn behaviour(
        &self,
        own_index: usize,
        flock: &[Boid],
        weights: RuleWeights,
        radius: f32,
        max_speed: f32,
    ) -> Vec2 {
        let neighbours = self.get_neighbours(own_index, flock, radius);

        let mut acceleration = Vec2::ZERO;
        acceleration += self.separation(&neighbours, max_speed) * weights.separation;
        acceleration += self.alignment(&neighbours, max_speed) * weights.alignment;
        acceleration += self.cohesion(&neighbours, max_speed) * weights.cohesion;
        acceleration
    }

    // Integrate one step and wrap around the domain edges
    pub fn update(&mut self, max_speed: f32, domain: &Domain) {
        let max_speed = floor_speed(max_speed);

        self.velocity += self.acceleration;
        self.velocity = limit_length(self.velocity, max_speed);

        self.position += self.velocity;
        self.position = domain.wrap(self.position);
    }
}

pub fn floor_speed(max_speed: f32) -> f32 {
    if max_speed > 0.0 {
        max_speed
    } else {
        SPEED_FLOOR
    }
}

pub fn floor_radius(radius: f32) -> f32 {
    if radius > 0.0 {
        radius
    } else {
        RADIUS_FLOOR
    }
}

// Rescale `v` to `max` when it is longer, otherwise leave it alone
fn limit_length(v: Vec2, max: f32) -> Vec2 {
    let length = v.length();
    if length > max {
        v * (max / length)
    } else {
        v
    }
}
