//! Force models for the N-body engine.
//!
//! Provides the `ForceModel` trait and the direct pairwise gravity
//! implementation. The gravitational constant lives on
//! [`SystemState`](crate::state::SystemState) because it is externally
//! tunable while the simulation runs.

use nalgebra::Vector2;

use crate::state::SystemState;

pub mod gravity;


pub use gravity::DirectGravity;

/// A source of acceleration on bodies in the system.
pub trait ForceModel: Send + Sync {
    /// Compute the acceleration on the body at index `idx` given the full
    /// system state.
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64>;

    /// Potential energy contribution of this force over the whole system.
    ///
    /// Default implementation returns 0.0; override for force models that
    /// store potential energy (gravity does).
    fn potential_energy(&self, _state: &SystemState) -> f64 {
        0.0
    }
}
