//! Shadow system for chaos estimation.
//!
//! A shadow system is a structurally parallel copy of the main body set
//! with a small random perturbation applied to every position component.
//! It evolves under the identical force law and time steps, interacting
//! only with itself, and is never reported as "the" system: only its
//! divergence from the main trajectory is observable. A divergence that
//! grows quickly signals sensitivity to initial conditions.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::body::{Body, BodyId};
use crate::forces::ForceModel;
use crate::integrator::Integrator;
use crate::state::SystemState;

/// Full span of the uniform position perturbation; each component is
/// offset by `(u - 0.5) * PERTURBATION_SPAN`, at most 0.005 in magnitude.
pub const PERTURBATION_SPAN: f64 = 0.01;

/// Tuned sensitivity divisor for squashing raw divergence into [0, 1].
pub const CHAOS_SENSITIVITY: f64 = 5.0;

/// Squash a raw divergence into a display-friendly chaos level in [0, 1].
///
/// # Examples
///
/// ```
/// use orrery::shadow::chaos_level;
///
/// assert_eq!(chaos_level(0.0), 0.0);
/// assert!(chaos_level(1.0) > 0.0);
/// assert_eq!(chaos_level(1e12), 1.0);
/// ```
pub fn chaos_level(divergence: f64) -> f64 {
    ((1.0 + divergence).ln() / CHAOS_SENSITIVITY).min(1.0)
}

fn perturbation(rng: &mut ChaChaRng) -> f64 {
    (rng.random::<f64>() - 0.5) * PERTURBATION_SPAN
}

/// A perturbed clone of the main system, advanced in lock-step.
///
/// The correspondence with the main body list is positional: the resolver
/// mirrors every merge and insertion so the two lists stay index-parallel.
#[derive(Debug, Clone)]
pub struct ShadowSystem {
    state: SystemState,
}

impl ShadowSystem {
    /// Deep-copies the main system and perturbs every body's position.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::shadow::ShadowSystem;
    /// use orrery::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaChaRng;
    ///
    /// let mut system = SystemState::new(1.0);
    /// system.add_body("a", 10.0, Point2::new(1.0, 2.0), Vector2::zeros(), None);
    ///
    /// let mut rng = ChaChaRng::seed_from_u64(7);
    /// let shadow = ShadowSystem::new(&system, &mut rng);
    ///
    /// assert_eq!(shadow.len(), 1);
    /// let offset = (shadow.bodies()[0].position - system.bodies[0].position).abs();
    /// assert!(offset.x <= 0.005 && offset.y <= 0.005);
    /// ```
    pub fn new(main: &SystemState, rng: &mut ChaChaRng) -> Self {
        let mut state = main.clone();
        for body in state.bodies.iter_mut() {
            body.position.x += perturbation(rng);
            body.position.y += perturbation(rng);
        }
        Self { state }
    }

    /// Advance the shadow set by the same effective step as the main
    /// system. Shadow bodies interact only with each other.
    pub fn advance(&mut self, dt_eff: f64, integrator: &dyn Integrator, force: &dyn ForceModel) {
        integrator.step(&mut self.state, dt_eff, force);
    }

    /// Keep the shadow's gravitational constant in sync with the main
    /// system when the host retunes it.
    pub fn set_g(&mut self, g: f64) {
        self.state.g = g;
    }

    /// Sum of Euclidean distances between corresponding bodies, paired by
    /// index position. The resolver keeps the lists structurally parallel;
    /// pairing is undefined if they ever desync.
    pub fn divergence(&self, main: &SystemState) -> f64 {
        main.bodies
            .iter()
            .zip(self.state.bodies.iter())
            .map(|(a, b)| (a.position - b.position).magnitude())
            .sum()
    }

    /// Mirror a merge of the bodies at indices `i` and `j` (with `i > j`),
    /// re-perturbing the merged body so the shadow stays an independently
    /// offset trajectory.
    pub fn mirror_merge(&mut self, i: usize, j: usize, merged_id: BodyId, rng: &mut ChaChaRng) {
        debug_assert!(i > j);
        let a = self.state.bodies[i].clone();
        let b = self.state.bodies[j].clone();
        let mut merged = crate::collisions::resolution::merge_bodies(&a, &b, merged_id);
        merged.position.x += perturbation(rng);
        merged.position.y += perturbation(rng);
        self.state.bodies.remove(i);
        self.state.bodies.remove(j);
        self.state.bodies.push(merged);
    }

    /// Mirror an insertion into the main system with a perturbed clone.
    pub fn mirror_insert(&mut self, body: &Body, rng: &mut ChaChaRng) {
        let mut clone = body.clone();
        clone.position.x += perturbation(rng);
        clone.position.y += perturbation(rng);
        self.state.bodies.push(clone);
    }

    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    pub fn len(&self) -> usize {
        self.state.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.bodies.is_empty()
    }
}
