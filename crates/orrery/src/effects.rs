//! Ephemeral collision effects.
//!
//! The engine owns only the spawning parameters and aging of these
//! effects; drawing them is the rendering collaborator's job. Each
//! resolved collision produces one effect: a burst of particles thrown
//! radially outward from the collision point, biased by the merged pair's
//! combined velocity.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};
use rand::Rng;
use rand_chacha::ChaChaRng;

/// Particles spawned per unit of merged mass.
pub const PARTICLES_PER_MASS: f64 = 0.25;

/// Hard cap on particles per effect.
pub const MAX_PARTICLES: usize = 100;

/// Floor so even tiny merges are visible.
pub const MIN_PARTICLES: usize = 8;

/// A single effect particle.
#[derive(Debug, Clone, Copy)]
pub struct EffectParticle {
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub size: f64,
    pub lifetime: f64,
    pub age: f64,
}

impl EffectParticle {
    /// Remaining opacity in [0, 1], linear over the lifetime.
    pub fn fade(&self) -> f64 {
        (1.0 - self.age / self.lifetime).max(0.0)
    }

    pub fn expired(&self) -> bool {
        self.age >= self.lifetime
    }
}

/// One collision's worth of particles, aged out independently.
#[derive(Debug, Clone)]
pub struct CollisionEffect {
    /// Collision point the burst originated from.
    pub position: Point2<f64>,
    particles: Vec<EffectParticle>,
}

impl CollisionEffect {
    /// Spawn a burst at `point`. Particle count scales with the merged
    /// mass, clamped to `[MIN_PARTICLES, MAX_PARTICLES]`; each particle
    /// gets a random radial velocity biased by the pair's combined
    /// velocity.
    pub fn spawn(
        point: Point2<f64>,
        combined_velocity: Vector2<f64>,
        total_mass: f64,
        rng: &mut ChaChaRng,
    ) -> Self {
        let count = ((total_mass * PARTICLES_PER_MASS) as usize).clamp(MIN_PARTICLES, MAX_PARTICLES);

        let particles = (0..count)
            .map(|_| {
                let angle = rng.random::<f64>() * TAU;
                let speed = 10.0 + rng.random::<f64>() * 40.0;
                let radial = Vector2::new(angle.cos(), angle.sin()) * speed;
                EffectParticle {
                    position: point,
                    velocity: radial + combined_velocity * 0.5,
                    size: 1.0 + rng.random::<f64>() * 3.0,
                    lifetime: 0.5 + rng.random::<f64>(),
                    age: 0.0,
                }
            })
            .collect();

        Self {
            position: point,
            particles,
        }
    }

    /// Advance every particle by one real frame.
    pub fn age(&mut self, frame_dt: f64) {
        for p in self.particles.iter_mut() {
            p.position += p.velocity * frame_dt;
            p.age += frame_dt;
        }
    }

    /// True once every particle has expired; the engine then prunes the
    /// effect.
    pub fn finished(&self) -> bool {
        self.particles.iter().all(|p| p.expired())
    }

    pub fn particles(&self) -> &[EffectParticle] {
        &self.particles
    }
}
