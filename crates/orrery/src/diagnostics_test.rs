use approx::assert_relative_eq;
use nalgebra::{Point2, Vector2};

use crate::diagnostics::{
    angular_momentum, angular_momentum_drift, center_of_mass, com_drift, energy_drift,
    kinetic_energy, total_energy, Baseline,
};
use crate::forces::DirectGravity;
use crate::state::SystemState;

#[test]
fn test_center_of_mass_weighted() {
    let mut system = SystemState::new(1.0);
    system.add_body("light", 100.0, Point2::new(0.0, 0.0), Vector2::zeros(), None);
    system.add_body("heavy", 300.0, Point2::new(10.0, 0.0), Vector2::zeros(), None);

    assert_eq!(center_of_mass(&system), Point2::new(7.5, 0.0));
}

#[test]
fn test_center_of_mass_empty_is_origin() {
    let system = SystemState::new(1.0);
    assert_eq!(center_of_mass(&system), Point2::origin());
}

#[test]
fn test_kinetic_energy_sum() {
    let mut system = SystemState::new(1.0);
    system.add_body("a", 4.0, Point2::origin(), Vector2::new(3.0, 4.0), None);
    system.add_body("b", 2.0, Point2::origin(), Vector2::new(1.0, 0.0), None);

    // ½·4·25 + ½·2·1 = 51.
    assert_eq!(kinetic_energy(&system), 51.0);
}

#[test]
fn test_angular_momentum_about_com() {
    let mut system = SystemState::new(1.0);
    system.add_body("a", 500.0, Point2::new(-100.0, 0.0), Vector2::new(0.0, -1.0), None);
    system.add_body("b", 500.0, Point2::new(100.0, 0.0), Vector2::new(0.0, 1.0), None);

    // COM at origin; each body contributes m (x vy - y vx) = 500·100.
    assert_relative_eq!(angular_momentum(&system), 100_000.0, epsilon = 1e-9);
}

#[test]
fn test_angular_momentum_independent_of_com_offset() {
    // Same binary, translated and given a uniform drift velocity: the
    // about-COM angular momentum must not change.
    let mut system = SystemState::new(1.0);
    system.add_body("a", 500.0, Point2::new(-60.0, 40.0), Vector2::new(2.0, -1.0 + 3.0), None);
    system.add_body("b", 500.0, Point2::new(140.0, 40.0), Vector2::new(2.0, 1.0 + 3.0), None);

    assert_relative_eq!(angular_momentum(&system), 100_000.0, epsilon = 1e-9);
}

#[test]
fn test_baseline_identity() {
    let mut system = SystemState::new(1.0);
    system.add_body("a", 100.0, Point2::new(0.0, 0.0), Vector2::new(0.0, 1.0), None);
    system.add_body("b", 100.0, Point2::new(50.0, 0.0), Vector2::new(0.0, -1.0), None);

    let baseline = Baseline::capture(&system, &DirectGravity);
    let energy = total_energy(&system, &DirectGravity);

    assert_eq!(energy_drift(energy, &baseline), 0.0);
    assert_eq!(angular_momentum_drift(angular_momentum(&system), &baseline), 0.0);
    assert_eq!(com_drift(center_of_mass(&system), &baseline), 0.0);
}

#[test]
fn test_energy_drift_percentage() {
    let baseline = Baseline {
        energy: -200.0,
        angular_momentum: 0.0,
        com: Point2::origin(),
    };
    // (-150 - -200) / 200 · 100 = +25%.
    assert_relative_eq!(energy_drift(-150.0, &baseline), 25.0, epsilon = 1e-12);
}

#[test]
fn test_energy_drift_unguarded_at_zero_baseline() {
    // Zero baseline energy leaves the drift undefined on purpose.
    let baseline = Baseline {
        energy: 0.0,
        angular_momentum: 0.0,
        com: Point2::origin(),
    };
    assert!(energy_drift(5.0, &baseline).is_infinite());
    assert!(energy_drift(0.0, &baseline).is_nan());
}

#[test]
fn test_angular_momentum_drift_guarded_at_zero_baseline() {
    // Distinct policy from energy: a zero baseline reports exactly 0.
    let baseline = Baseline {
        energy: -1.0,
        angular_momentum: 0.0,
        com: Point2::origin(),
    };
    assert_eq!(angular_momentum_drift(42.0, &baseline), 0.0);
}

#[test]
fn test_com_drift_is_absolute_distance() {
    let baseline = Baseline {
        energy: -1.0,
        angular_momentum: 0.0,
        com: Point2::new(1.0, 1.0),
    };
    assert_relative_eq!(
        com_drift(Point2::new(4.0, 5.0), &baseline),
        5.0,
        epsilon = 1e-12
    );
}
