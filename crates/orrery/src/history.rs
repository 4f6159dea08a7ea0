//! Bounded state history and periodic-orbit detection.
//!
//! Every [`SAMPLE_INTERVAL`] integration steps the engine appends a
//! kinematic snapshot of all bodies to a bounded ring. Once enough history
//! exists, each sufficiently old snapshot is compared against the current
//! configuration; a near-return in position space raises a "periodic
//! orbit" flag with a fixed display timer. The ring is cleared on every
//! topological event, since a merge or insertion invalidates comparisons.

use std::collections::VecDeque;

use crate::state::SystemState;

/// Integration steps between snapshots.
pub const SAMPLE_INTERVAL: u64 = 10;

/// Maximum retained snapshots; the oldest is evicted first.
pub const CAPACITY: usize = 1000;

/// Detection is attempted only once more than this many snapshots exist.
pub const MIN_SNAPSHOTS: usize = 50;

/// A snapshot must be at least this many samples in the past to count.
pub const MIN_SAMPLE_GAP: usize = 100;

/// Total positional displacement below which a near-return is flagged.
pub const DISPLACEMENT_THRESHOLD: f64 = 10.0;

/// Seconds the periodicity flag stays raised once detected.
pub const DISPLAY_DURATION: f64 = 3.0;

/// Per-body kinematic sample.
#[derive(Debug, Clone, Copy)]
pub struct BodySample {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// One sampled state of the whole system, by positional body index.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub samples: Vec<BodySample>,
}

impl Snapshot {
    pub fn capture(state: &SystemState) -> Self {
        Self {
            samples: state
                .bodies
                .iter()
                .map(|b| BodySample {
                    x: b.position.x,
                    y: b.position.y,
                    vx: b.velocity.x,
                    vy: b.velocity.y,
                })
                .collect(),
        }
    }

    /// Sum of per-body positional distances to the current state, or
    /// `None` when the body counts differ (a merge happened since this
    /// snapshot was taken; comparison is silently skipped).
    ///
    /// Velocity is deliberately ignored: a near-return in position space
    /// is enough to flag the orbit for display purposes.
    pub fn displacement_from(&self, state: &SystemState) -> Option<f64> {
        if self.samples.len() != state.bodies.len() {
            return None;
        }
        Some(
            self.samples
                .iter()
                .zip(state.bodies.iter())
                .map(|(s, b)| {
                    let dx = b.position.x - s.x;
                    let dy = b.position.y - s.y;
                    (dx * dx + dy * dy).sqrt()
                })
                .sum(),
        )
    }
}

/// Bounded ring of sampled snapshots, oldest first.
#[derive(Debug, Default)]
pub struct HistoryRing {
    snapshots: VecDeque<Snapshot>,
}

impl HistoryRing {
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::new(),
        }
    }

    /// Append a snapshot of the current state, evicting the oldest entry
    /// beyond [`CAPACITY`].
    pub fn record(&mut self, state: &SystemState) {
        if self.snapshots.len() == CAPACITY {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(Snapshot::capture(state));
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Scan sufficiently old snapshots for a near-return of the current
    /// configuration. Snapshots with mismatched body counts are skipped.
    pub fn detect_return(&self, state: &SystemState) -> bool {
        if self.snapshots.len() <= MIN_SNAPSHOTS {
            return false;
        }
        // Only snapshots at least MIN_SAMPLE_GAP samples in the past.
        let eligible = self.snapshots.len().saturating_sub(MIN_SAMPLE_GAP);
        self.snapshots
            .iter()
            .take(eligible)
            .filter_map(|s| s.displacement_from(state))
            .any(|d| d < DISPLACEMENT_THRESHOLD)
    }
}

/// Latched periodicity flag with a real-time display countdown.
///
/// Once raised, the flag is independent of further detection: the timer
/// counts down each real frame and clears the flag at zero regardless of
/// subsequent matches.
#[derive(Debug, Default)]
pub struct PeriodicityMonitor {
    active: bool,
    timer: f64,
}

impl PeriodicityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Raise the flag and start the display countdown. No-op while the
    /// flag is already raised.
    pub fn flag(&mut self) {
        if !self.active {
            self.active = true;
            self.timer = DISPLAY_DURATION;
        }
    }

    /// Advance the countdown by one real frame.
    pub fn tick(&mut self, frame_dt: f64) {
        if self.active {
            self.timer -= frame_dt;
            if self.timer <= 0.0 {
                self.active = false;
                self.timer = 0.0;
            }
        }
    }

    /// Immediate reset, used on topological events.
    pub fn clear(&mut self) {
        self.active = false;
        self.timer = 0.0;
    }
}
