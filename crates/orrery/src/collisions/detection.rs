//! Overlap detection over all body pairs.

use crate::state::SystemState;

/// Find the first overlapping pair in the current body order, scanning
/// unordered pairs from the end of the list backward.
///
/// Returns indices `(i, j)` with `i > j` for the first pair whose center
/// distance is less than the sum of their radii, or `None`. The scan
/// order is part of the contract: with several simultaneous overlaps it
/// fixes which pair merges this step, and the body-list order (not
/// physically meaningful) is the tie-break.
///
/// # Examples
///
/// ```
/// use orrery::collisions::find_overlap;
/// use orrery::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body("a", 100.0, Point2::new(0.0, 0.0), Vector2::zeros(), None);
/// system.add_body("b", 100.0, Point2::new(1000.0, 0.0), Vector2::zeros(), None);
/// assert!(find_overlap(&system).is_none());
///
/// // Move them within their summed radii.
/// system.bodies[1].position = Point2::new(10.0, 0.0);
/// assert_eq!(find_overlap(&system), Some((1, 0)));
/// ```
pub fn find_overlap(state: &SystemState) -> Option<(usize, usize)> {
    let n = state.bodies.len();
    for i in (1..n).rev() {
        for j in (0..i).rev() {
            let a = &state.bodies[i];
            let b = &state.bodies[j];
            if a.distance_to(b) < a.radius + b.radius {
                return Some((i, j));
            }
        }
    }
    None
}
