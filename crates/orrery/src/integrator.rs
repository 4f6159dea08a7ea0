//! Time integration for the N-body system.
//!
//! The engine uses semi-implicit (symplectic) Euler: velocities are kicked
//! with the freshly evaluated accelerations, then positions drift with the
//! updated velocities. First order, but it bounds energy error over long
//! runs in a way explicit Euler does not.

use nalgebra::Vector2;

use crate::forces::ForceModel;
use crate::state::SystemState;

/// A time integrator advancing a system by one step.
pub trait Integrator: Send + Sync {
    /// Advance `state` by one step of effective size `dt_eff`.
    ///
    /// `dt_eff` already carries the time-scale: it may be negative (time
    /// reversal) or zero. A zero step must perform no state mutation at
    /// all, so a paused simulation stays bit-identical.
    fn step(&self, state: &mut SystemState, dt_eff: f64, force: &dyn ForceModel);
}

/// Semi-implicit Euler: `v += a * dt; p += v * dt`.
///
/// Each step zeroes and rewrites every body's scratch `acceleration`
/// before the kick, so stale values never leak across steps.
///
/// # Examples
///
/// ```
/// use orrery::integrator::{Integrator, SymplecticEuler};
/// use orrery::forces::DirectGravity;
/// use orrery::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body("a", 100.0, Point2::new(-5.0, 0.0), Vector2::zeros(), None);
/// system.add_body("b", 100.0, Point2::new(5.0, 0.0), Vector2::zeros(), None);
///
/// SymplecticEuler.step(&mut system, 0.01, &DirectGravity);
/// assert_eq!(system.steps, 1);
///
/// // The pair falls toward each other.
/// assert!(system.bodies[0].velocity.x > 0.0);
/// assert!(system.bodies[1].velocity.x < 0.0);
/// ```
pub struct SymplecticEuler;

impl Integrator for SymplecticEuler {
    fn step(&self, state: &mut SystemState, dt_eff: f64, force: &dyn ForceModel) {
        if dt_eff == 0.0 {
            return;
        }

        // Zero the scratch acceleration fields before evaluation.
        for body in state.bodies.iter_mut() {
            body.acceleration = Vector2::zeros();
        }

        let accelerations: Vec<Vector2<f64>> = (0..state.bodies.len())
            .map(|i| force.acceleration(i, state))
            .collect();

        // Kick with fresh accelerations, then drift with updated velocities.
        state
            .bodies
            .iter_mut()
            .zip(accelerations.iter())
            .for_each(|(body, accel)| {
                body.acceleration = *accel;
                body.velocity += accel * dt_eff;
            });

        state.bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt_eff;
        });

        state.time += dt_eff;
        state.steps += 1;
    }
}
