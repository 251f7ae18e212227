/*
 * Domain Module
 *
 * The simulation space is a torus: positions live in [0, width) x [0, height)
 * and anything leaving one edge re-enters from the opposite one.
 * Coordinates follow screen convention (origin top-left, y grows downwards);
 * the renderer maps them into nannou's centred coordinate system.
 */

use nannou::prelude::*;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub width: f32,
    pub height: f32,
}

impl Domain {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // A usable domain needs a finite, strictly positive extent on both axes
    pub fn is_valid(width: f32, height: f32) -> bool {
        width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
    }

    // Wrap a position back into the domain on both axes
    pub fn wrap(&self, position: Point2) -> Point2 {
        pt2(wrap_axis(position.x, self.width), wrap_axis(position.y, self.height))
    }

    pub fn contains(&self, position: Point2) -> bool {
        position.x >= 0.0 && position.x < self.width && position.y >= 0.0 && position.y < self.height
    }

    // Uniformly sample a point inside the domain
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Point2 {
        pt2(rng.gen_range(0.0..self.width), rng.gen_range(0.0..self.height))
    }
}

// Euclidean modulo so negative coordinates land in [0, dim).
// rem_euclid can round a tiny negative value up to exactly `dim`.
fn wrap_axis(value: f32, dim: f32) -> f32 {
    let wrapped = value.rem_euclid(dim);
    if wrapped >= dim {
        0.0
    } else {
        wrapped
    }
}
