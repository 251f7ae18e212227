use flockview::{Boid, Domain, Flock, Simulation, SimulationConfig, SpawnSettings, StatsHistory};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const TOLERANCE: f32 = 1e-4;

fn config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        window_width: 320.0,
        window_height: 240.0,
        rng_seed: Some(seed),
        ..SimulationConfig::default()
    }
}

#[test]
fn speed_and_position_invariants_hold_every_tick() {
    let mut sim = Simulation::new(&config(21)).unwrap();
    sim.params_mut().set_max_speed(6.0);
    sim.params_mut().set_separation_weight(2.5);

    for _ in 0..200 {
        sim.tick();
        let domain = sim.domain();
        for boid in sim.flock().boids() {
            assert!(boid.velocity.length() <= 6.0 + TOLERANCE);
            assert!(boid.position.x >= 0.0 && boid.position.x < domain.width);
            assert!(boid.position.y >= 0.0 && boid.position.y < domain.height);
        }
    }
}

#[test]
fn lowering_max_speed_mid_run_is_respected_next_tick() {
    let mut sim = Simulation::new(&config(22)).unwrap();
    for _ in 0..20 {
        sim.tick();
    }

    sim.params_mut().set_max_speed(0.5);
    let stats = sim.tick().unwrap();
    assert!(stats.avg_speed <= 0.5 + TOLERANCE);
    assert_eq!(stats.max_speed, 0.5);
    for boid in sim.flock().boids() {
        assert!(boid.velocity.length() <= 0.5 + TOLERANCE);
    }
}

#[test]
fn two_boids_one_apart_are_neighbours() {
    let domain = Domain::new(100.0, 100.0);
    let flock = Flock::from_boids(
        vec![
            Boid::new(pt2(0.0, 0.0), vec2(1.0, 0.0), 0.1),
            Boid::new(pt2(1.0, 0.0), vec2(0.0, 1.0), 0.1),
        ],
        domain,
    );

    let boids = flock.boids();
    let first = boids[0].get_neighbours(0, boids, 50.0);
    let second = boids[1].get_neighbours(1, boids, 50.0);
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].position, pt2(1.0, 0.0));
    assert_eq!(second[0].position, pt2(0.0, 0.0));
}

#[test]
fn integration_wraps_across_the_right_edge() {
    let domain = Domain::new(100.0, 100.0);
    let mut flock = Flock::from_boids(vec![Boid::new(pt2(99.5, 50.0), vec2(2.0, 0.0), 0.1)], domain);

    // A lone boid has no neighbours, so apply_rules leaves acceleration at zero
    flock.apply_rules(1.0, 1.0, 1.0, 50.0, 5.0);
    flock.update(5.0);

    let boid = &flock.boids()[0];
    assert!((boid.position.x - 1.5).abs() < TOLERANCE);
    assert!((boid.position.y - 50.0).abs() < TOLERANCE);
}

#[test]
fn steering_is_capped_for_huge_targets() {
    let boid = Boid::new(pt2(10.0, 10.0), vec2(0.0, -4.0), 0.1);
    let steering = boid.steer_towards(vec2(1000.0, 0.0), 4.0);
    assert!(steering.length() <= 0.1 + TOLERANCE);
}

#[test]
fn history_keeps_the_newest_hundred_points() {
    let mut history = StatsHistory::new(100, 1.0);
    for i in 0..150 {
        history.append(i as f32, 0.0);
    }
    let kept: Vec<f32> = history.current().collect();
    assert_eq!(kept.len(), 100);
    assert_eq!(kept.first(), Some(&50.0));
    assert_eq!(kept.last(), Some(&149.0));
}

#[test]
fn single_boid_simulation_has_no_possible_neighbours() {
    let config = SimulationConfig {
        initial_boids: Some(1),
        ..config(23)
    };
    let mut sim = Simulation::new(&config).unwrap();
    let stats = sim.tick().unwrap();
    assert_eq!(stats.max_neighbour_count, 0);
    assert_eq!(stats.avg_neighbour_count, 0.0);
}

#[test]
fn empty_flock_skips_statistics() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut flock = Flock::new(0, Domain::new(50.0, 50.0), &SpawnSettings::default(), &mut rng);
    flock.apply_rules(1.0, 1.0, 1.0, 10.0, 2.0);
    flock.update(2.0);
    assert_eq!(flock.average_speed(), None);
    assert_eq!(flock.average_neighbour_count(10.0), None);
}

#[test]
fn cohesion_only_pulls_a_pair_together() {
    let domain = Domain::new(500.0, 500.0);
    let mut flock = Flock::from_boids(
        vec![
            Boid::new(pt2(200.0, 250.0), Vec2::ZERO, 0.1),
            Boid::new(pt2(300.0, 250.0), Vec2::ZERO, 0.1),
        ],
        domain,
    );
    let start = flock.boids()[0].position.distance(flock.boids()[1].position);

    for _ in 0..30 {
        flock.apply_rules(0.0, 0.0, 1.0, 150.0, 2.0);
        flock.update(2.0);
    }

    let end = flock.boids()[0].position.distance(flock.boids()[1].position);
    assert!(end < start);
}

#[test]
fn reseeding_with_the_same_seed_repeats_the_run() {
    let mut a = Simulation::new(&config(99)).unwrap();
    let mut b = Simulation::new(&config(99)).unwrap();
    for _ in 0..10 {
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.flock().boids(), b.flock().boids());
}
