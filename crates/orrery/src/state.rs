use nalgebra::{Point2, Vector2};

use crate::body::{AssetId, Body, BodyId};

/// Complete state of the simulated system at a given time.
///
/// The body list is ordered; the order has no physical meaning but fixes
/// the tie-break order of the collision scan. After any merge or insertion
/// the list is rebuilt contiguously.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Current simulation time (signed; time reversal runs it backward).
    pub time: f64,
    /// Gravitational constant. Externally tunable at any moment; the force
    /// law reads it on every evaluation.
    pub g: f64,
    /// Time-scale and direction control: zero pauses, negative reverses.
    pub time_scale: f64,
    /// Number of completed integration steps. Drives history sampling,
    /// so pausing does not advance the sampling clock.
    pub steps: u64,
    /// Collection of bodies.
    pub bodies: Vec<Body>,
    next_id: u32,
}

impl SystemState {
    /// Creates an empty system with the given gravitational constant.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::state::SystemState;
    ///
    /// let system = SystemState::new(1.0);
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// assert_eq!(system.time_scale, 1.0);
    /// ```
    pub fn new(g: f64) -> Self {
        Self {
            time: 0.0,
            g,
            time_scale: 1.0,
            steps: 0,
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a new body and returns its id. Radius is derived from mass.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut system = SystemState::new(1.0);
    /// let id = system.add_body("planet", 10.0, Point2::new(1.0, 0.0), Vector2::zeros(), None);
    /// assert_eq!(system.body_count(), 1);
    /// assert_eq!(system.get_body(id).unwrap().mass, 10.0);
    /// ```
    pub fn add_body(
        &mut self,
        name: impl Into<String>,
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        asset: Option<AssetId>,
    ) -> BodyId {
        let id = self.alloc_id();
        self.bodies
            .push(Body::new(id, name, mass, position, velocity, asset));
        id
    }

    /// Reserves a fresh id without inserting a body. Used by the collision
    /// resolver for merged bodies.
    pub fn alloc_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Removes a body, returning it if present.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.index_of(id).map(|idx| self.bodies.remove(idx))
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Positional index of a body in the current list order.
    pub fn index_of(&self, id: BodyId) -> Option<usize> {
        self.bodies.iter().position(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Total linear momentum of all bodies.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }
}
