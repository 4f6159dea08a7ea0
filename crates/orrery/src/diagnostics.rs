//! Conserved-quantity diagnostics.
//!
//! Tracks total energy, angular momentum about the center of mass, and
//! the center of mass itself, all relative to a baseline captured at the
//! last topological event (preset load, insertion, merge). Drift is always
//! measured against that baseline, never against the previous step, so
//! slow accumulation is visible. Retuning G after capture is allowed and
//! shows up as energy drift by design.

use nalgebra::Point2;
use serde::Serialize;

use crate::forces::ForceModel;
use crate::state::SystemState;

/// Total kinetic energy, `Σ ½ m v²`.
pub fn kinetic_energy(state: &SystemState) -> f64 {
    state.bodies.iter().map(|b| b.kinetic_energy()).sum()
}

/// Total energy: kinetic plus gravitational potential.
///
/// # Examples
///
/// ```
/// use orrery::diagnostics::total_energy;
/// use orrery::forces::DirectGravity;
/// use orrery::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body("a", 10.0, Point2::new(0.0, 0.0), Vector2::zeros(), None);
/// system.add_body("b", 10.0, Point2::new(10.0, 0.0), Vector2::zeros(), None);
///
/// // At rest, total energy is pure (negative) potential: -G m1 m2 / r.
/// assert!((total_energy(&system, &DirectGravity) + 10.0).abs() < 1e-12);
/// ```
pub fn total_energy(state: &SystemState, force: &dyn ForceModel) -> f64 {
    kinetic_energy(state) + force.potential_energy(state)
}

/// Mass-weighted centroid; `(0, 0)` by convention when there is no mass.
pub fn center_of_mass(state: &SystemState) -> Point2<f64> {
    let total = state.total_mass();
    if total == 0.0 {
        return Point2::origin();
    }
    let weighted = state
        .bodies
        .iter()
        .map(|b| b.position.coords * b.mass)
        .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p);
    Point2::from(weighted / total)
}

/// Total angular momentum about the center of mass (scalar 2D cross).
pub fn angular_momentum(state: &SystemState) -> f64 {
    let com = center_of_mass(state);
    state
        .bodies
        .iter()
        .map(|b| b.angular_momentum_about(com))
        .sum()
}

/// Reference values captured at the last topological event.
#[derive(Debug, Clone, Copy)]
pub struct Baseline {
    pub energy: f64,
    pub angular_momentum: f64,
    pub com: Point2<f64>,
}

impl Baseline {
    pub fn capture(state: &SystemState, force: &dyn ForceModel) -> Self {
        Self {
            energy: total_energy(state, force),
            angular_momentum: angular_momentum(state),
            com: center_of_mass(state),
        }
    }
}

/// Energy drift in percent relative to the baseline.
///
/// Deliberately unguarded: a zero baseline divides by zero and yields a
/// non-finite percentage. Single-body or precisely balanced systems can
/// legitimately have zero baseline energy; the drift is then undefined
/// rather than silently zero.
pub fn energy_drift(energy: f64, baseline: &Baseline) -> f64 {
    (energy - baseline.energy) / baseline.energy.abs() * 100.0
}

/// Angular-momentum drift in percent relative to the baseline.
///
/// Unlike [`energy_drift`], a zero baseline reports exactly 0: angular
/// momentum is legitimately zero for symmetric configurations and should
/// not be flagged as undefined. This asymmetry is intentional.
pub fn angular_momentum_drift(angular_momentum: f64, baseline: &Baseline) -> f64 {
    if baseline.angular_momentum == 0.0 {
        return 0.0;
    }
    (angular_momentum - baseline.angular_momentum) / baseline.angular_momentum.abs() * 100.0
}

/// Center-of-mass drift as an absolute Euclidean distance.
pub fn com_drift(com: Point2<f64>, baseline: &Baseline) -> f64 {
    (com - baseline.com).magnitude()
}

/// Read-only health snapshot handed to the host every frame.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiagnosticsSnapshot {
    pub energy: f64,
    /// Percent; non-finite when the baseline energy was exactly zero.
    pub energy_drift: f64,
    pub angular_momentum: f64,
    /// Percent; defined as 0 when the baseline was exactly zero.
    pub angular_momentum_drift: f64,
    /// Absolute distance between current and baseline center of mass.
    pub com_drift: f64,
    /// Normalized shadow divergence in [0, 1].
    pub chaos_level: f64,
    /// Composite health score in [0, 1].
    pub stability: f64,
    /// True while the periodicity display timer is running.
    pub periodic: bool,
}

impl DiagnosticsSnapshot {
    /// Snapshot of an empty, just-constructed engine.
    pub fn empty() -> Self {
        Self {
            energy: 0.0,
            energy_drift: 0.0,
            angular_momentum: 0.0,
            angular_momentum_drift: 0.0,
            com_drift: 0.0,
            chaos_level: 0.0,
            stability: 1.0,
            periodic: false,
        }
    }
}
