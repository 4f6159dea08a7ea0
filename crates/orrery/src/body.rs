use nalgebra::{Point2, Vector2};

/// Scale factor relating mass to radius: `radius = RADIUS_SCALE * mass^(1/3)`.
pub const RADIUS_SCALE: f64 = 5.0;

/// Derive a body's radius from its mass.
///
/// Radius is a pure function of mass and is never stored independently:
/// every constructor and merge recomputes it through this function, so it
/// is strictly increasing in mass.
///
/// # Examples
///
/// ```
/// use orrery::body::compute_radius;
///
/// assert_eq!(compute_radius(1.0), 5.0);
/// assert!(compute_radius(8.0) > compute_radius(1.0));
/// ```
pub fn compute_radius(mass: f64) -> f64 {
    RADIUS_SCALE * mass.cbrt()
}

/// Stable identifier for a body, valid across merges and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// Opaque handle to a host-side visual asset.
///
/// The engine never interprets this; it only carries it through merges
/// (the more massive parent's handle survives).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub u32);

/// A simulated point mass.
///
/// `acceleration` is scratch space: it is zeroed and rewritten by every
/// force evaluation and carries no meaning between steps.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    /// Display label; not required to be unique.
    pub name: String,
    /// Mass, always positive.
    pub mass: f64,
    /// Radius derived from mass via [`compute_radius`].
    pub radius: f64,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    /// Most recent evaluated acceleration (scratch, recomputed every step).
    pub acceleration: Vector2<f64>,
    /// Optional host-side visual asset.
    pub asset: Option<AssetId>,
}

impl Body {
    /// Creates a body, deriving its radius from `mass`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::body::{Body, BodyId};
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let body = Body::new(
    ///     BodyId(0),
    ///     "sun",
    ///     1000.0,
    ///     Point2::new(0.0, 0.0),
    ///     Vector2::zeros(),
    ///     None,
    /// );
    /// assert_eq!(body.radius, 5.0 * 1000.0_f64.cbrt());
    /// ```
    pub fn new(
        id: BodyId,
        name: impl Into<String>,
        mass: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
        asset: Option<AssetId>,
    ) -> Self {
        Body {
            id,
            name: name.into(),
            mass,
            radius: compute_radius(mass),
            position,
            velocity,
            acceleration: Vector2::zeros(),
            asset,
        }
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Angular momentum about `origin` (2D cross product, scalar z-component),
    /// including the mass factor.
    pub fn angular_momentum_about(&self, origin: Point2<f64>) -> f64 {
        let r = self.position - origin;
        self.mass * (r.x * self.velocity.y - r.y * self.velocity.x)
    }
}
