//! Composite stability index.
//!
//! A single heuristic health score combining the drift and chaos
//! diagnostics. The weights are tuned for display, not derived from any
//! physical argument.

/// Weight on |energy drift| in percent.
pub const ENERGY_DRIFT_WEIGHT: f64 = 0.01;

/// Weight on |angular-momentum drift| in percent.
pub const ANGULAR_MOMENTUM_DRIFT_WEIGHT: f64 = 0.01;

/// Weight on absolute center-of-mass drift.
pub const COM_DRIFT_WEIGHT: f64 = 0.1;

/// Weight on the normalized chaos level.
pub const CHAOS_WEIGHT: f64 = 0.5;

/// Combine the diagnostics into a score in [0, 1].
///
/// `1` is a perfectly healthy run; each term subtracts from it and the
/// result clamps at zero. No upper clamp is needed since every term is
/// non-negative. An undefined (non-finite) energy drift poisons the sum
/// and the clamp reports 0.
///
/// # Examples
///
/// ```
/// use orrery::stability::stability_index;
///
/// assert_eq!(stability_index(0.0, 0.0, 0.0, 0.0), 1.0);
/// assert!(stability_index(50.0, 0.0, 0.0, 0.0) < 1.0);
/// assert_eq!(stability_index(1e6, 1e6, 1e6, 1.0), 0.0);
/// ```
pub fn stability_index(
    energy_drift: f64,
    angular_momentum_drift: f64,
    com_drift: f64,
    chaos_level: f64,
) -> f64 {
    let penalty = energy_drift.abs() * ENERGY_DRIFT_WEIGHT
        + angular_momentum_drift.abs() * ANGULAR_MOMENTUM_DRIFT_WEIGHT
        + com_drift * COM_DRIFT_WEIGHT
        + chaos_level * CHAOS_WEIGHT;
    (1.0 - penalty).max(0.0)
}
