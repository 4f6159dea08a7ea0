use nalgebra::{Point2, Vector2};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::forces::DirectGravity;
use crate::integrator::{Integrator, SymplecticEuler};
use crate::shadow::{chaos_level, ShadowSystem, PERTURBATION_SPAN};
use crate::state::SystemState;

fn rng() -> ChaChaRng {
    ChaChaRng::seed_from_u64(7)
}

fn three_body_system() -> SystemState {
    let mut system = SystemState::new(1.0);
    system.add_body("a", 500.0, Point2::new(-100.0, 0.0), Vector2::new(0.0, -1.0), None);
    system.add_body("b", 500.0, Point2::new(100.0, 0.0), Vector2::new(0.0, 1.0), None);
    system.add_body("c", 10.0, Point2::new(0.0, 300.0), Vector2::new(0.5, 0.0), None);
    system
}

#[test]
fn test_creation_perturbs_within_bounds() {
    let system = three_body_system();
    let shadow = ShadowSystem::new(&system, &mut rng());

    assert_eq!(shadow.len(), system.body_count());
    for (main, copy) in system.bodies.iter().zip(shadow.bodies().iter()) {
        assert_eq!(main.id, copy.id);
        assert_eq!(main.mass, copy.mass);
        assert_eq!(main.velocity, copy.velocity);

        let offset = main.position - copy.position;
        assert!(offset.x.abs() <= PERTURBATION_SPAN / 2.0);
        assert!(offset.y.abs() <= PERTURBATION_SPAN / 2.0);
    }
}

#[test]
fn test_same_seed_same_perturbation() {
    let system = three_body_system();
    let first = ShadowSystem::new(&system, &mut rng());
    let second = ShadowSystem::new(&system, &mut rng());

    for (a, b) in first.bodies().iter().zip(second.bodies().iter()) {
        assert_eq!(a.position, b.position);
    }
}

#[test]
fn test_divergence_bounded_at_creation() {
    let system = three_body_system();
    let mut rng = rng();
    let shadow = ShadowSystem::new(&system, &mut rng);

    let initial = shadow.divergence(&system);
    assert!(initial > 0.0);
    // Per-body offset is at most √(0.005² + 0.005²).
    assert!(initial <= 3.0 * (2.0_f64).sqrt() * 0.005);
}

#[test]
fn test_divergence_grows_under_radial_infall() {
    // Two bodies falling straight at each other: a radial offset is
    // tidally amplified, so the trajectories separate decisively.
    let mut system = SystemState::new(1.0);
    system.add_body("a", 100.0, Point2::new(-5.0, 0.0), Vector2::zeros(), None);
    system.add_body("b", 100.0, Point2::new(5.0, 0.0), Vector2::zeros(), None);

    let mut rng = rng();
    let mut shadow = ShadowSystem::new(&system, &mut rng);
    let initial = shadow.divergence(&system);

    for _ in 0..60 {
        SymplecticEuler.step(&mut system, 0.05, &DirectGravity);
        shadow.advance(0.05, &SymplecticEuler, &DirectGravity);
    }

    assert_eq!(shadow.len(), system.body_count());
    assert!(shadow.divergence(&system) > initial);
}

#[test]
fn test_chaos_level_squashing() {
    assert_eq!(chaos_level(0.0), 0.0);
    assert!(chaos_level(1.0) > 0.0 && chaos_level(1.0) < 1.0);
    assert!(chaos_level(10.0) > chaos_level(1.0));
    assert_eq!(chaos_level(1.0e12), 1.0);
}

#[test]
fn test_mirror_insert_keeps_lists_parallel() {
    let mut system = three_body_system();
    let mut rng = rng();
    let mut shadow = ShadowSystem::new(&system, &mut rng);

    let id = system.add_body("new", 10.0, Point2::new(50.0, 50.0), Vector2::zeros(), None);
    let body = system.get_body(id).unwrap().clone();
    shadow.mirror_insert(&body, &mut rng);

    assert_eq!(shadow.len(), system.body_count());
    assert_eq!(shadow.bodies().last().unwrap().id, id);
}

#[test]
fn test_set_g_follows_main_system() {
    let system = three_body_system();
    let mut rng = rng();
    let mut shadow = ShadowSystem::new(&system, &mut rng);
    shadow.set_g(2.5);

    // Advance still works under the retuned constant; structural checks
    // are what matter here.
    shadow.advance(0.01, &SymplecticEuler, &DirectGravity);
    assert_eq!(shadow.len(), 3);
}
