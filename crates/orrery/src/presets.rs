//! Named initial configurations.
//!
//! A preset is a plain in-memory description of a starting system,
//! supplied by the host or taken from the built-in set. Loading one is a
//! topological event: the engine rebuilds the body list (deriving radii
//! from mass), recreates the shadow system, recaptures the diagnostics
//! baseline, and clears the history ring.
//!
//! Descriptor types use plain arrays and derive serde so hosts can ship
//! configurations from any source; no file format is imposed here.

use serde::{Deserialize, Serialize};

/// Initial description of a single body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    pub mass: f64,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    /// Opaque host-side visual asset handle.
    pub asset: Option<u32>,
}

/// A named starting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    /// Gravitational constant the system was tuned for.
    pub g: f64,
    /// View scale hint for the host; the engine carries it opaquely.
    pub scale: f64,
    pub bodies: Vec<BodyDescriptor>,
}

fn body(name: &str, mass: f64, position: [f64; 2], velocity: [f64; 2]) -> BodyDescriptor {
    BodyDescriptor {
        name: name.to_string(),
        mass,
        position,
        velocity,
        asset: None,
    }
}

/// Two equal masses on a mutual orbit.
pub fn binary_pair() -> Preset {
    let g: f64 = 1.0;
    let mass = 500.0;
    let separation = 200.0;
    // Circular mutual orbit: each body orbits the barycenter at r = d/2
    // with v² = G m_other r / d² = G m / (2 d).
    let v = (g * mass / (2.0 * separation)).sqrt();
    Preset {
        name: "binary pair".to_string(),
        g,
        scale: 1.0,
        bodies: vec![
            body("alpha", mass, [-separation / 2.0, 0.0], [0.0, -v]),
            body("beta", mass, [separation / 2.0, 0.0], [0.0, v]),
        ],
    }
}

/// A heavy central body with three light circular orbiters.
pub fn inner_system() -> Preset {
    let g = 1.0;
    let central = 5000.0;
    let circular = |r: f64| (g * central / r).sqrt();
    Preset {
        name: "inner system".to_string(),
        g,
        scale: 1.0,
        bodies: vec![
            body("sol", central, [0.0, 0.0], [0.0, 0.0]),
            body("ash", 5.0, [120.0, 0.0], [0.0, circular(120.0)]),
            body("ember", 8.0, [220.0, 0.0], [0.0, -circular(220.0)]),
            body("cinder", 12.0, [340.0, 0.0], [0.0, circular(340.0)]),
        ],
    }
}

/// Two bodies on a head-on course, for exercising the merge path.
pub fn collision_course() -> Preset {
    Preset {
        name: "collision course".to_string(),
        g: 1.0,
        scale: 1.0,
        bodies: vec![
            body("hammer", 300.0, [-150.0, 0.0], [20.0, 0.0]),
            body("anvil", 100.0, [150.0, 0.0], [-20.0, 0.0]),
        ],
    }
}

/// All built-in presets, in display order.
pub fn builtin() -> Vec<Preset> {
    vec![binary_pair(), inner_system(), collision_course()]
}
