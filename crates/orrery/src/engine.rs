//! The simulation engine and its host boundary.
//!
//! [`Engine`] exclusively owns the body store, shadow system, history
//! ring, and diagnostics baseline; hosts mutate them only through the
//! command methods here and read them back through the query methods.
//! One call to [`Engine::update`] per frame drives a fixed stage order:
//! integrate, advance the shadow, sample history and check periodicity,
//! resolve at most one collision, refresh diagnostics. Everything is
//! single-threaded and the update is safe to re-enter synchronously from
//! event handling (e.g. a single-step key while paused).

use nalgebra::{Point2, Vector2};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::{AssetId, Body, BodyId};
use crate::collisions::resolution::resolve_first_collision;
use crate::diagnostics::{self, Baseline, DiagnosticsSnapshot};
use crate::effects::CollisionEffect;
use crate::forces::DirectGravity;
use crate::history::{HistoryRing, PeriodicityMonitor, SAMPLE_INTERVAL};
use crate::integrator::{Integrator, SymplecticEuler};
use crate::presets::Preset;
use crate::shadow::{chaos_level, ShadowSystem};
use crate::stability::stability_index;
use crate::state::SystemState;

/// Mass given to bodies inserted by the host (e.g. on click).
pub const INSERT_MASS: f64 = 10.0;

/// Assumed interval for deriving a velocity from a drag displacement.
pub const DRAG_RELEASE_INTERVAL: f64 = 0.2;

/// The simulation context.
pub struct Engine {
    state: SystemState,
    shadow: Option<ShadowSystem>,
    baseline: Baseline,
    history: HistoryRing,
    periodicity: PeriodicityMonitor,
    effects: Vec<CollisionEffect>,
    snapshot: DiagnosticsSnapshot,
    integrator: SymplecticEuler,
    force: DirectGravity,
    view_scale: f64,
    rng: ChaChaRng,
}

impl Engine {
    /// Creates an empty engine. Runs are reproducible for a given seed:
    /// all randomness (shadow perturbations, effect particles) flows
    /// through one seeded generator.
    pub fn new(seed: u64) -> Self {
        let state = SystemState::new(1.0);
        let force = DirectGravity;
        let baseline = Baseline::capture(&state, &force);
        Self {
            state,
            shadow: None,
            baseline,
            history: HistoryRing::new(),
            periodicity: PeriodicityMonitor::new(),
            effects: Vec::new(),
            snapshot: DiagnosticsSnapshot::empty(),
            integrator: SymplecticEuler,
            force,
            view_scale: 1.0,
            rng: ChaChaRng::seed_from_u64(seed),
        }
    }

    /// Creates an engine and immediately loads `preset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use orrery::engine::Engine;
    /// use orrery::presets;
    ///
    /// let engine = Engine::from_preset(&presets::binary_pair(), 42);
    /// assert_eq!(engine.bodies().len(), 2);
    ///
    /// // Baseline identity: no drift right after a load.
    /// let diag = engine.diagnostics();
    /// assert_eq!(diag.energy_drift, 0.0);
    /// assert_eq!(diag.angular_momentum_drift, 0.0);
    /// assert_eq!(diag.com_drift, 0.0);
    /// ```
    pub fn from_preset(preset: &Preset, seed: u64) -> Self {
        let mut engine = Self::new(seed);
        engine.load_preset(preset);
        engine
    }

    /// Replace the current system with `preset`.
    ///
    /// This is a topological event: bodies are rebuilt with derived radii,
    /// the shadow system is recreated with fresh perturbations, the
    /// diagnostics baseline is recaptured, and history, periodicity, and
    /// effects are cleared.
    pub fn load_preset(&mut self, preset: &Preset) {
        let mut state = SystemState::new(preset.g);
        for d in &preset.bodies {
            state.add_body(
                d.name.clone(),
                d.mass,
                Point2::new(d.position[0], d.position[1]),
                Vector2::new(d.velocity[0], d.velocity[1]),
                d.asset.map(AssetId),
            );
        }
        self.state = state;
        self.view_scale = preset.scale;
        self.shadow = Some(ShadowSystem::new(&self.state, &mut self.rng));
        self.effects.clear();
        self.reset_baseline();
        log::info!(
            "loaded preset \"{}\" with {} bodies",
            preset.name,
            self.state.body_count()
        );
    }

    /// Advance by one frame of real time `frame_dt`.
    ///
    /// The effective integration step is `frame_dt * time_scale`; a zero
    /// time-scale makes the integrator a no-op while frame-driven
    /// bookkeeping (periodicity countdown, effect aging) still runs.
    pub fn update(&mut self, frame_dt: f64) {
        self.run_cycle(frame_dt * self.state.time_scale, frame_dt);
    }

    /// Perform exactly one discrete advance of size `dt`, ignoring the
    /// time-scale's zero gate. Intended for single-stepping while paused;
    /// safe to call synchronously from event handling.
    pub fn single_step(&mut self, dt: f64) {
        self.run_cycle(dt, 0.0);
    }

    fn run_cycle(&mut self, dt_eff: f64, frame_dt: f64) {
        let stepped = dt_eff != 0.0 && !self.state.bodies.is_empty();

        self.integrator.step(&mut self.state, dt_eff, &self.force);
        if let Some(shadow) = self.shadow.as_mut() {
            shadow.advance(dt_eff, &self.integrator, &self.force);
        }

        // Frame-driven bookkeeping runs even when paused.
        self.periodicity.tick(frame_dt);
        for effect in self.effects.iter_mut() {
            effect.age(frame_dt);
        }
        self.effects.retain(|e| !e.finished());

        if stepped {
            if self.state.steps % SAMPLE_INTERVAL == 0 {
                self.history.record(&self.state);
            }
            if !self.periodicity.is_active() && self.history.detect_return(&self.state) {
                self.periodicity.flag();
                log::debug!("near-return detected, flagging periodic orbit");
            }
        }

        // Collisions are gated behind movement like the integrator: a
        // paused tick must not resolve an overlap created by dragging.
        if stepped {
            if let Some(outcome) =
                resolve_first_collision(&mut self.state, self.shadow.as_mut(), &mut self.rng)
            {
                self.effects.push(outcome.effect);
                self.reset_baseline();
                log::debug!(
                    "collision resolved, merged body {:?}, {} bodies remain",
                    outcome.merged,
                    self.state.body_count()
                );
            }
        }

        self.refresh_snapshot();
    }

    /// Recapture the baseline and clear accumulated history. Called on
    /// every topological event, never on pause or G changes.
    fn reset_baseline(&mut self) {
        self.baseline = Baseline::capture(&self.state, &self.force);
        self.history.clear();
        self.periodicity.clear();
        self.refresh_snapshot();
    }

    fn refresh_snapshot(&mut self) {
        if self.state.bodies.is_empty() {
            self.snapshot = DiagnosticsSnapshot::empty();
            return;
        }
        let energy = diagnostics::total_energy(&self.state, &self.force);
        let angular_momentum = diagnostics::angular_momentum(&self.state);
        let com = diagnostics::center_of_mass(&self.state);
        let energy_drift = diagnostics::energy_drift(energy, &self.baseline);
        let angular_momentum_drift =
            diagnostics::angular_momentum_drift(angular_momentum, &self.baseline);
        let com_drift = diagnostics::com_drift(com, &self.baseline);
        let chaos = self
            .shadow
            .as_ref()
            .map(|s| chaos_level(s.divergence(&self.state)))
            .unwrap_or(0.0);
        self.snapshot = DiagnosticsSnapshot {
            energy,
            energy_drift,
            angular_momentum,
            angular_momentum_drift,
            com_drift,
            chaos_level: chaos,
            stability: stability_index(energy_drift, angular_momentum_drift, com_drift, chaos),
            periodic: self.periodicity.is_active(),
        };
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Retune the gravitational constant. Not a topological event: the
    /// baseline is kept, so the change itself shows up as energy drift.
    /// Zero or negative values disable or invert attraction; that is an
    /// accepted edge case, not an error.
    pub fn set_g(&mut self, g: f64) {
        self.state.g = g;
        if let Some(shadow) = self.shadow.as_mut() {
            shadow.set_g(g);
        }
    }

    /// Set time-scale magnitude and direction: zero pauses, negative
    /// reverses time.
    pub fn set_time_scale(&mut self, time_scale: f64) {
        self.state.time_scale = time_scale;
    }

    /// Insert a new body at `position` with the fixed default mass and
    /// zero velocity. A topological event, re-baselined like a merge.
    pub fn insert_body(&mut self, position: Point2<f64>) -> BodyId {
        let name = format!("body-{}", self.state.body_count() + 1);
        let id = self
            .state
            .add_body(name, INSERT_MASS, position, Vector2::zeros(), None);
        match self.shadow.as_mut() {
            Some(shadow) => {
                // get_body on a just-inserted id cannot miss.
                if let Some(body) = self.state.get_body(id) {
                    shadow.mirror_insert(body, &mut self.rng);
                }
            }
            None => self.shadow = Some(ShadowSystem::new(&self.state, &mut self.rng)),
        }
        self.reset_baseline();
        log::debug!("inserted body {:?} at {:?}", id, position);
        id
    }

    /// Directly set a body's position (drag interaction). Deliberately
    /// not a topological event: no re-baseline happens, so dragging shows
    /// up as drift. Returns false if the id is unknown.
    pub fn set_body_position(&mut self, id: BodyId, position: Point2<f64>) -> bool {
        match self.state.get_body_mut(id) {
            Some(body) => {
                body.position = position;
                true
            }
            None => false,
        }
    }

    /// Finish a drag: derive a velocity from the released displacement
    /// over the assumed fixed interval, rather than a measured one.
    pub fn release_body(&mut self, id: BodyId, displacement: Vector2<f64>) -> bool {
        match self.state.get_body_mut(id) {
            Some(body) => {
                body.velocity = displacement / DRAG_RELEASE_INTERVAL;
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Queries (read-only)
    // ------------------------------------------------------------------

    /// Current bodies, for rendering and hit-testing.
    pub fn bodies(&self) -> &[Body] {
        &self.state.bodies
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.state.get_body(id)
    }

    /// Shadow bodies for optional overlay rendering; `None` before the
    /// first load.
    pub fn shadow_bodies(&self) -> Option<&[Body]> {
        self.shadow.as_ref().map(|s| s.bodies())
    }

    /// Latest diagnostics, refreshed at the end of every update.
    pub fn diagnostics(&self) -> DiagnosticsSnapshot {
        self.snapshot
    }

    /// Live collision effects for rendering.
    pub fn effects(&self) -> &[CollisionEffect] {
        &self.effects
    }

    pub fn g(&self) -> f64 {
        self.state.g
    }

    pub fn time_scale(&self) -> f64 {
        self.state.time_scale
    }

    pub fn time(&self) -> f64 {
        self.state.time
    }

    pub fn steps(&self) -> u64 {
        self.state.steps
    }

    /// View scale hint from the loaded preset.
    pub fn view_scale(&self) -> f64 {
        self.view_scale
    }

    /// Number of retained history snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
