//! Collision resolution through momentum-conserving mergers.

use nalgebra::{Point2, Vector2};
use rand_chacha::ChaChaRng;

use crate::body::{compute_radius, Body, BodyId};
use crate::collisions::detection::find_overlap;
use crate::effects::CollisionEffect;
use crate::shadow::ShadowSystem;
use crate::state::SystemState;

/// Disturbance radius per unit of explosion energy.
pub const DISTURBANCE_RADIUS_PER_ENERGY: f64 = 0.05;

/// Impulse magnitude per unit of explosion energy, before the distance
/// and mass falloff.
pub const IMPULSE_SCALE: f64 = 0.01;

/// Merge two bodies, conserving mass and momentum exactly.
///
/// The merged body takes:
/// - mass `m1 + m2`,
/// - mass-weighted position and velocity,
/// - a radius rederived from the combined mass,
/// - name and asset handle from the more massive operand; an exact mass
///   tie favors the first operand.
///
/// # Examples
///
/// ```
/// use orrery::body::{Body, BodyId};
/// use orrery::collisions::merge_bodies;
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::new(BodyId(0), "light", 100.0, Point2::new(0.0, 0.0), Vector2::zeros(), None);
/// let b = Body::new(BodyId(1), "heavy", 300.0, Point2::new(10.0, 0.0), Vector2::zeros(), None);
///
/// let merged = merge_bodies(&a, &b, BodyId(2));
/// assert_eq!(merged.mass, 400.0);
/// assert_eq!(merged.position.x, 7.5); // weighted toward the heavier body
/// assert_eq!(merged.name, "heavy");
/// assert!(merged.radius > a.radius && merged.radius > b.radius);
/// ```
pub fn merge_bodies(a: &Body, b: &Body, new_id: BodyId) -> Body {
    let total_mass = a.mass + b.mass;
    let position =
        Point2::from((a.position.coords * a.mass + b.position.coords * b.mass) / total_mass);
    let velocity = (a.momentum() + b.momentum()) / total_mass;

    let survivor = if b.mass > a.mass { b } else { a };

    Body {
        id: new_id,
        name: survivor.name.clone(),
        mass: total_mass,
        radius: compute_radius(total_mass),
        position,
        velocity,
        acceleration: Vector2::zeros(),
        asset: survivor.asset,
    }
}

/// Kinetic energy released by an inelastic merge:
/// `½ m1 m2 v_rel² / (m1 + m2)`, the kinetic energy of the relative
/// motion that the merge destroys.
pub fn explosion_energy(a: &Body, b: &Body) -> f64 {
    let v_rel = (a.velocity - b.velocity).magnitude_squared();
    0.5 * a.mass * b.mass * v_rel / (a.mass + b.mass)
}

/// Apply the supernova impulse to every body except the merging pair.
///
/// Bodies within `energy * DISTURBANCE_RADIUS_PER_ENERGY` of the
/// collision point are pushed radially outward, with strength falling off
/// with distance and divided by the disturbed body's own mass. A body
/// exactly at the collision point has no defined outward direction and is
/// left alone.
fn apply_disturbance(state: &mut SystemState, point: Point2<f64>, energy: f64, skip: (usize, usize)) {
    let radius = energy * DISTURBANCE_RADIUS_PER_ENERGY;
    for (idx, body) in state.bodies.iter_mut().enumerate() {
        if idx == skip.0 || idx == skip.1 {
            continue;
        }
        let dr = body.position - point;
        let dist = dr.magnitude();
        if dist == 0.0 || dist >= radius {
            continue;
        }
        let impulse = energy * IMPULSE_SCALE / (dist * body.mass);
        body.velocity += dr / dist * impulse;
    }
}

/// Result of one resolved collision, handed back to the engine.
pub struct CollisionOutcome {
    /// Id of the merged body appended to the list.
    pub merged: BodyId,
    /// Visual effect to hand to the rendering collaborator.
    pub effect: CollisionEffect,
}

/// Detect and resolve at most one collision in the current state.
///
/// On the first overlapping pair (backward scan, see
/// [`find_overlap`](crate::collisions::find_overlap)):
/// 1. spawn the particle effect at the mass-weighted collision point,
/// 2. disturb all other bodies with the supernova impulse,
/// 3. replace the pair with a merged body appended to the list,
/// 4. mirror the merge on the shadow set, re-perturbed, so the lists stay
///    index-parallel.
///
/// The merged velocity is the mass-weighted average of the pre-collision
/// velocities; the disturbance never touches the merging pair. Baseline
/// re-capture and history clearing are the engine's responsibility, since
/// a merge is a topological event.
pub fn resolve_first_collision(
    state: &mut SystemState,
    shadow: Option<&mut ShadowSystem>,
    rng: &mut ChaChaRng,
) -> Option<CollisionOutcome> {
    let (i, j) = find_overlap(state)?;
    let a = state.bodies[i].clone();
    let b = state.bodies[j].clone();

    let total_mass = a.mass + b.mass;
    let point =
        Point2::from((a.position.coords * a.mass + b.position.coords * b.mass) / total_mass);
    let combined_velocity = (a.momentum() + b.momentum()) / total_mass;

    let effect = CollisionEffect::spawn(point, combined_velocity, total_mass, rng);

    apply_disturbance(state, point, explosion_energy(&a, &b), (i, j));

    let new_id = state.alloc_id();
    let merged = merge_bodies(&a, &b, new_id);
    // i > j, so removing i first keeps j valid.
    state.bodies.remove(i);
    state.bodies.remove(j);
    state.bodies.push(merged);

    if let Some(shadow) = shadow {
        shadow.mirror_merge(i, j, new_id, rng);
    }

    Some(CollisionOutcome {
        merged: new_id,
        effect,
    })
}
