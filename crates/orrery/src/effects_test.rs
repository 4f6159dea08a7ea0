use nalgebra::{Point2, Vector2};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::effects::{CollisionEffect, MAX_PARTICLES, MIN_PARTICLES};

fn rng() -> ChaChaRng {
    ChaChaRng::seed_from_u64(99)
}

#[test]
fn test_particle_count_scales_with_mass() {
    let small = CollisionEffect::spawn(Point2::origin(), Vector2::zeros(), 1.0, &mut rng());
    let medium = CollisionEffect::spawn(Point2::origin(), Vector2::zeros(), 200.0, &mut rng());
    let huge = CollisionEffect::spawn(Point2::origin(), Vector2::zeros(), 1.0e6, &mut rng());

    assert_eq!(small.particles().len(), MIN_PARTICLES);
    assert_eq!(medium.particles().len(), 50);
    assert_eq!(huge.particles().len(), MAX_PARTICLES);
}

#[test]
fn test_particles_start_at_collision_point() {
    let point = Point2::new(3.0, -7.0);
    let effect = CollisionEffect::spawn(point, Vector2::zeros(), 100.0, &mut rng());

    assert_eq!(effect.position, point);
    for p in effect.particles() {
        assert_eq!(p.position, point);
        assert_eq!(p.age, 0.0);
        assert!(p.velocity.magnitude() > 0.0);
        assert!(p.size > 0.0 && p.lifetime > 0.0);
    }
}

#[test]
fn test_velocity_bias_follows_combined_velocity() {
    // A strong combined velocity shifts the mean particle velocity.
    let bias = Vector2::new(1000.0, 0.0);
    let effect = CollisionEffect::spawn(Point2::origin(), bias, 400.0, &mut rng());

    let mean_x: f64 = effect.particles().iter().map(|p| p.velocity.x).sum::<f64>()
        / effect.particles().len() as f64;
    assert!(mean_x > 100.0);
}

#[test]
fn test_aging_moves_and_fades_particles() {
    let mut effect = CollisionEffect::spawn(Point2::origin(), Vector2::zeros(), 100.0, &mut rng());
    effect.age(0.25);

    for p in effect.particles() {
        assert_eq!(p.age, 0.25);
        assert!((p.position - Point2::origin()).magnitude() > 0.0);
        assert!(p.fade() < 1.0 && p.fade() > 0.0);
    }
    assert!(!effect.finished());
}

#[test]
fn test_finished_after_longest_lifetime() {
    let mut effect = CollisionEffect::spawn(Point2::origin(), Vector2::zeros(), 100.0, &mut rng());
    // Lifetimes are below 1.5; two big ticks outlive every particle.
    effect.age(1.0);
    effect.age(1.0);

    assert!(effect.finished());
    for p in effect.particles() {
        assert_eq!(p.fade(), 0.0);
    }
}
