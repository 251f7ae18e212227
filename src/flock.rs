/*
 * Flock Module
 *
 * An ordered arena of boids. Each tick runs in two separate passes:
 * 1. apply_rules: every acceleration is computed from the unmodified
 *    previous-tick state and only then stored
 * 2. update: every boid integrates its stored acceleration
 *
 * Fusing the passes per boid would let later boids see earlier boids'
 * new positions, making the dynamics depend on arena order.
 *
 * Summation follows arena order, so results are not bit-for-bit identical
 * across different orderings of the same boids.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::boid::{Boid, RuleWeights, SpawnSettings};
use crate::domain::Domain;

#[derive(Debug, Clone)]
pub struct Flock {
    boids: Vec<Boid>,
    domain: Domain,
}

impl Flock {
    // Seed `count` boids at random inside the domain
    pub fn new<R: Rng + ?Sized>(count: usize, domain: Domain, spawn: &SpawnSettings, rng: &mut R) -> Self {
        let boids = (0..count).map(|_| Boid::random(&domain, spawn, rng)).collect();
        Self { boids, domain }
    }

    pub fn from_boids(boids: Vec<Boid>, domain: Domain) -> Self {
        Self { boids, domain }
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    // First pass: compute all accelerations against the frozen state
    pub fn apply_rules(
        &mut self,
        separation_weight: f32,
        alignment_weight: f32,
        cohesion_weight: f32,
        perception_radius: f32,
        max_speed: f32,
    ) {
        let weights = RuleWeights {
            separation: separation_weight,
            alignment: alignment_weight,
            cohesion: cohesion_weight,
        };

        let accelerations: Vec<Vec2> = self
            .boids
            .iter()
            .enumerate()
            .map(|(i, boid)| boid.behaviour(i, &self.boids, weights, perception_radius, max_speed))
            .collect();

        for (boid, acceleration) in self.boids.iter_mut().zip(accelerations) {
            boid.acceleration = acceleration;
        }
    }

    // Second pass: integrate every boid
    pub fn update(&mut self, max_speed: f32) {
        let domain = self.domain;
        for boid in &mut self.boids {
            boid.update(max_speed, &domain);
        }
    }

    // Mean speed over the flock, None when there are no boids
    pub fn average_speed(&self) -> Option<f32> {
        if self.boids.is_empty() {
            return None;
        }

        let total: f32 = self.boids.iter().map(|boid| boid.velocity.length()).sum();
        Some(total / self.boids.len() as f32)
    }

    // Mean neighbor count at `radius`, None when there are no boids
    pub fn average_neighbour_count(&self, radius: f32) -> Option<f32> {
        if self.boids.is_empty() {
            return None;
        }

        let total: usize = self
            .boids
            .iter()
            .enumerate()
            .map(|(i, boid)| boid.neighbour_count(i, &self.boids, radius))
            .sum();
        Some(total as f32 / self.boids.len() as f32)
    }

    // Most neighbors any single boid can have
    pub fn max_neighbour_count(&self) -> usize {
        self.boids.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn domain() -> Domain {
        Domain::new(100.0, 100.0)
    }

    #[test]
    fn seeds_requested_number_of_boids_inside_domain() {
        let mut rng = StdRng::seed_from_u64(7);
        let spawn = SpawnSettings::default();
        let flock = Flock::new(40, domain(), &spawn, &mut rng);

        assert_eq!(flock.len(), 40);
        for boid in flock.boids() {
            assert!(domain().contains(boid.position));
            let speed = boid.velocity.length();
            assert!(speed >= spawn.min_speed - 1e-4 && speed <= spawn.max_speed + 1e-4);
            assert_eq!(boid.acceleration, Vec2::ZERO);
        }
    }

    #[test]
    fn two_close_boids_see_each_other() {
        let boids = vec![
            Boid::new(pt2(0.0, 0.0), vec2(1.0, 0.0), 0.1),
            Boid::new(pt2(1.0, 0.0), vec2(1.0, 0.0), 0.1),
        ];
        let flock = Flock::from_boids(boids, domain());

        assert_eq!(flock.boids()[0].neighbour_count(0, flock.boids(), 50.0), 1);
        assert_eq!(flock.boids()[1].neighbour_count(1, flock.boids(), 50.0), 1);
        assert_eq!(flock.average_neighbour_count(50.0), Some(1.0));
    }

    #[test]
    fn apply_rules_leaves_positions_untouched() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut flock = Flock::new(25, domain(), &SpawnSettings::default(), &mut rng);
        let before: Vec<_> = flock.boids().iter().map(|b| (b.position, b.velocity)).collect();

        flock.apply_rules(1.0, 1.0, 1.0, 50.0, 5.0);

        let after: Vec<_> = flock.boids().iter().map(|b| (b.position, b.velocity)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn accelerations_do_not_depend_on_arena_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let forward = Flock::new(30, domain(), &SpawnSettings::default(), &mut rng);
        let mut reversed_boids = forward.boids().to_vec();
        reversed_boids.reverse();

        let mut forward = forward;
        let mut reversed = Flock::from_boids(reversed_boids, domain());
        forward.apply_rules(1.5, 1.0, 1.0, 40.0, 5.0);
        reversed.apply_rules(1.5, 1.0, 1.0, 40.0, 5.0);

        for (a, b) in forward.boids().iter().zip(reversed.boids().iter().rev()) {
            assert!((a.acceleration - b.acceleration).length() < 1e-4);
        }
    }

    #[test]
    fn update_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut flock = Flock::new(60, domain(), &SpawnSettings::default(), &mut rng);

        for _ in 0..50 {
            flock.apply_rules(2.0, 1.0, 1.0, 30.0, 3.0);
            flock.update(3.0);
            for boid in flock.boids() {
                assert!(boid.velocity.length() <= 3.0 + 1e-4);
                assert!(domain().contains(boid.position));
            }
        }
    }

    #[test]
    fn empty_flock_has_no_statistics() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut flock = Flock::new(0, domain(), &SpawnSettings::default(), &mut rng);

        flock.apply_rules(1.0, 1.0, 1.0, 50.0, 5.0);
        flock.update(5.0);
        assert!(flock.is_empty());
        assert_eq!(flock.average_speed(), None);
        assert_eq!(flock.average_neighbour_count(50.0), None);
        assert_eq!(flock.max_neighbour_count(), 0);
    }

    #[test]
    fn single_boid_has_zero_neighbours() {
        let flock = Flock::from_boids(vec![Boid::new(pt2(5.0, 5.0), vec2(2.0, 0.0), 0.1)], domain());
        assert_eq!(flock.average_neighbour_count(50.0), Some(0.0));
        assert_eq!(flock.max_neighbour_count(), 0);
        assert_eq!(flock.average_speed(), Some(2.0));
    }
}
