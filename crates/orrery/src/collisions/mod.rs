//! Collision detection and resolution.
//!
//! Overlapping bodies merge inelastically, conserving mass and momentum.
//! A merge also releases a kinetic-energy-derived impulse (the "supernova
//! effect") that disturbs the surviving bodies, and spawns an ephemeral
//! particle effect whose rendering is a host concern. At most one
//! collision is resolved per step; further overlaps are naturally
//! deferred because positions keep evolving.

pub mod detection;
pub mod resolution;


pub use detection::find_overlap;
pub use resolution::{explosion_energy, merge_bodies, resolve_first_collision, CollisionOutcome};
