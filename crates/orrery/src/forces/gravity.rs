//! Direct N-body gravity (O(N²) implementation).

use nalgebra::Vector2;

use crate::forces::ForceModel;
use crate::state::SystemState;

/// Direct O(N²) gravitational acceleration.
///
/// Sums `G * m_j * (p_j - p_i) / |p_j - p_i|^3` over all other bodies.
/// There is deliberately no softening: two bodies at exactly the same
/// position divide by zero and propagate non-finite values. The collision
/// resolver is expected to merge bodies before they reach zero separation;
/// near-simultaneous multi-body collisions in a single step are only
/// partially covered (one merge per step), which is a known open issue.
///
/// # Examples
///
/// ```
/// use orrery::forces::{DirectGravity, ForceModel};
/// use orrery::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body("a", 1.0, Point2::new(0.0, 0.0), Vector2::zeros(), None);
/// system.add_body("b", 100.0, Point2::new(10.0, 0.0), Vector2::zeros(), None);
///
/// let gravity = DirectGravity;
/// let accel = gravity.acceleration(0, &system);
///
/// // Pull toward the massive neighbour (positive x).
/// assert!(accel.x > 0.0);
/// assert!(accel.y.abs() < 1e-12);
/// ```
pub struct DirectGravity;

impl ForceModel for DirectGravity {
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64> {
        let body = &state.bodies[idx];
        let g = state.g;

        state
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| {
                let dr = other.position - body.position;
                let r2 = dr.magnitude_squared();
                let r = r2.sqrt();
                dr * (g * other.mass / (r2 * r))
            })
            .fold(Vector2::zeros(), |acc, a| acc + a)
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        let g = state.g;

        // Each unordered pair counted once.
        state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                state.bodies[i + 1..].iter().map(move |b| {
                    let r = (a.position - b.position).magnitude();
                    -g * a.mass * b.mass / r
                })
            })
            .sum()
    }
}
