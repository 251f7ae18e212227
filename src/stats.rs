/*
 * Statistics History Module
 *
 * A fixed-capacity rolling buffer behind each live plot. Every tick appends
 * one (current, reference) pair; once full, the oldest pair is evicted.
 * The velocity plot stores (average speed, max speed) and the neighbor plot
 * stores (average neighbors, max possible neighbors).
 */

use std::collections::VecDeque;

pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

// Headroom above the largest sample when scaling the Y axis
const Y_HEADROOM: f32 = 1.1;

#[derive(Debug, Clone)]
pub struct StatsHistory {
    current: VecDeque<f32>,
    reference: VecDeque<f32>,
    capacity: usize,
    min_y_scale: f32,
}

impl StatsHistory {
    // A zero capacity is bumped to one so append always keeps the latest pair
    pub fn new(capacity: usize, min_y_scale: f32) -> Self {
        let capacity = capacity.max(1);
        Self {
            current: VecDeque::with_capacity(capacity),
            reference: VecDeque::with_capacity(capacity),
            capacity,
            min_y_scale,
        }
    }

    pub fn append(&mut self, current: f32, reference: f32) {
        if self.current.len() >= self.capacity {
            self.current.pop_front();
            self.reference.pop_front();
        }
        self.current.push_back(current);
        self.reference.push_back(reference);
    }

    // Upper bound of the Y axis: 10% above the largest value in either
    // series, never below the configured floor
    pub fn series_bounds(&self) -> f32 {
        let peak = self
            .current
            .iter()
            .chain(self.reference.iter())
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);

        if peak.is_finite() {
            self.min_y_scale.max(peak * Y_HEADROOM)
        } else {
            self.min_y_scale
        }
    }

    pub fn current(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.current.iter().copied()
    }

    pub fn reference(&self) -> impl ExactSizeIterator<Item = f32> + '_ {
        self.reference.iter().copied()
    }

    // Most recent (current, reference) pair
    pub fn latest(&self) -> Option<(f32, f32)> {
        Some((*self.current.back()?, *self.reference.back()?))
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.current.clear();
        self.reference.clear();
    }
}
