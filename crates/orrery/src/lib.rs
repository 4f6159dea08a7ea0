//! A small N-body gravity engine with stability diagnostics.
//!
//! The engine simulates point masses under mutual Newtonian gravity and
//! reports on the numerical and physical health of the run: conserved
//! quantity drift, chaotic sensitivity via a perturbed shadow system,
//! periodic-orbit detection over a bounded history, and a composite
//! stability index. Overlapping bodies merge inelastically, disturbing
//! the survivors with a secondary impulse.
//!
//! Rendering and input are host concerns. The host drives
//! [`engine::Engine::update`] once per frame and reads back bodies,
//! diagnostics, and collision effects through the query API.

pub mod body;
pub mod collisions;
pub mod diagnostics;
pub mod effects;
pub mod engine;
pub mod forces;
pub mod history;
pub mod integrator;
pub mod presets;
pub mod shadow;
pub mod stability;
pub mod state;

#[cfg(test)]
mod diagnostics_test;
#[cfg(test)]
mod effects_test;
#[cfg(test)]
mod presets_test;
#[cfg(test)]
mod shadow_test;
#[cfg(test)]
mod state_test;
