use crate::presets::{binary_pair, builtin, collision_course, inner_system};

#[test]
fn test_builtin_set() {
    let presets = builtin();
    assert_eq!(presets.len(), 3);
    for preset in &presets {
        assert!(!preset.bodies.is_empty());
        assert!(preset.g > 0.0);
        for body in &preset.bodies {
            assert!(body.mass > 0.0);
        }
    }
}

#[test]
fn test_binary_pair_is_balanced() {
    let preset = binary_pair();
    assert_eq!(preset.bodies.len(), 2);

    // Equal masses, mirrored positions and velocities: zero net momentum.
    let px: f64 = preset
        .bodies
        .iter()
        .map(|b| b.mass * b.velocity[0])
        .sum();
    let py: f64 = preset
        .bodies
        .iter()
        .map(|b| b.mass * b.velocity[1])
        .sum();
    assert_eq!(px, 0.0);
    assert_eq!(py, 0.0);
}

#[test]
fn test_inner_system_orbits_central_body() {
    let preset = inner_system();
    let central = &preset.bodies[0];

    for orbiter in &preset.bodies[1..] {
        assert!(orbiter.mass < central.mass);
        // Roughly circular: v² ≈ G M / r for each orbiter.
        let r = (orbiter.position[0].powi(2) + orbiter.position[1].powi(2)).sqrt();
        let v2 = orbiter.velocity[0].powi(2) + orbiter.velocity[1].powi(2);
        let expected = preset.g * central.mass / r;
        assert!((v2 - expected).abs() / expected < 1e-9);
    }
}

#[test]
fn test_collision_course_is_closing() {
    let preset = collision_course();
    let [a, b] = &preset.bodies[..] else {
        panic!("expected two bodies");
    };

    // Relative velocity points from a toward b.
    let dx = b.position[0] - a.position[0];
    let dv = a.velocity[0] - b.velocity[0];
    assert!(dx * dv > 0.0);
}
