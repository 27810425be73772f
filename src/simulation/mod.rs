//! Engine - steps a set of rigid bodies inside a rectangular world
//!
//! The engine only orchestrates; the pieces live elsewhere:
//! - body data and integration in `rigid_body`
//! - storage, narrow phase and boundary forces in `rigid_body_system`
//! - the broad phase in `spatial::quadtree`
//!
//! Bodies are created into the engine's arena and take part in `step` only
//! once registered with `add_body`.

use crate::core::error::PhysicsError;
use crate::domain::settings::{RestitutionRule, WorldSettings};
use crate::rigid_body::{Body, Point, Shape, ShapeKind, Vec2};
use crate::rigid_body_system::{BodyArena, BodyHandle};
use crate::spatial::quadtree::QuadTree;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step_collisions.rs"]
mod step_collisions;
#[path = "step/step_bodies.rs"]
mod step_bodies;
#[path = "step/step.rs"]
mod step;
#[path = "step/fixed_step.rs"]
mod fixed_step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use fixed_step::{FixedStep, MAX_CATCH_UP_STEPS};
pub use perf_stats::PerfStats;
pub use step::StepReport;

use perf_timer::PerfTimer;

/// The simulation world
pub struct Engine {
    // === World rectangle ===
    bottom_left: Point,
    top_right: Point,

    // === Constants ===
    gravity: Vec2,
    air_drag: f32,
    ground_friction: f32,
    default_bounce: f32,
    restitution: RestitutionRule,

    // === Bodies ===
    arena: BodyArena,
    /// Registered bodies, in registration order
    bodies: Vec<BodyHandle>,

    // === Broad phase (rebuilt every step, kept for its allocations) ===
    tree: QuadTree<BodyHandle>,
    candidates: Vec<BodyHandle>,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Engine {
    /// Engine over the default 2048x2048 world
    pub fn new() -> Self {
        init::create_engine(WorldSettings::default())
    }

    pub fn with_settings(settings: WorldSettings) -> Result<Self, PhysicsError> {
        settings.validate()?;
        Ok(init::create_engine(settings))
    }

    // === Body lifecycle ===

    /// Create a body with a default-sized shape of `kind`.
    ///
    /// Returns `BodyHandle::INVALID` when the body can't be created; use
    /// [`Engine::try_create_body`] to learn why.
    pub fn create_body(&mut self, kind: ShapeKind, position: Point, velocity: Vec2, mass: f32) -> BodyHandle {
        commands::create_body(self, Shape::from(kind), position, velocity, mass)
    }

    pub fn try_create_body(
        &mut self,
        kind: ShapeKind,
        position: Point,
        velocity: Vec2,
        mass: f32,
    ) -> Result<BodyHandle, PhysicsError> {
        commands::try_create_body(self, Shape::from(kind), position, velocity, mass)
    }

    pub fn create_body_with_shape(&mut self, shape: Shape, position: Point, velocity: Vec2, mass: f32) -> BodyHandle {
        commands::create_body(self, shape, position, velocity, mass)
    }

    /// Unregister and drop a body. Its handle stays dead forever.
    pub fn destroy_body(&mut self, handle: BodyHandle) -> Result<Body, PhysicsError> {
        commands::destroy_body(self, handle)
    }

    /// Register a created body for simulation.
    /// False for dead handles and for bodies already registered.
    pub fn add_body(&mut self, handle: BodyHandle) -> bool {
        commands::add_body(self, handle)
    }

    /// Unregister every occurrence of `handle`; the body itself stays alive.
    /// Returns how many entries were removed.
    pub fn remove_body(&mut self, handle: BodyHandle) -> usize {
        commands::remove_body(self, handle)
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.arena.get(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.arena.get_mut(handle)
    }

    /// Registered bodies, in registration order
    pub fn body_handles(&self) -> &[BodyHandle] {
        &self.bodies
    }

    /// Number of registered bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // === World settings ===

    pub fn set_world_margins(&mut self, bottom_left: Point, top_right: Point) -> Result<(), PhysicsError> {
        settings::set_world_margins(self, bottom_left, top_right)
    }

    pub fn set_world_constants(&mut self, gravity: Vec2, air_drag: f32, ground_friction: f32) -> Result<(), PhysicsError> {
        settings::set_world_constants(self, gravity, air_drag, ground_friction)
    }

    pub fn set_restitution_rule(&mut self, rule: RestitutionRule) {
        settings::set_restitution_rule(self, rule);
    }

    pub fn settings(&self) -> WorldSettings {
        settings::settings(self)
    }

    /// Replace every world constant at once. Registered bodies are kept.
    pub fn apply_settings(&mut self, settings: WorldSettings) -> Result<(), PhysicsError> {
        settings::apply_settings(self, settings)
    }

    pub fn bounds(&self) -> (Point, Point) {
        (self.bottom_left, self.top_right)
    }

    /// Number of completed steps
    pub fn frame(&self) -> u64 {
        self.frame
    }

    // === Perf ===

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::perf_stats(self)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt` must be finite and non-negative; a rejected step leaves the engine
    /// untouched. `dt == 0` still runs collision and boundary response.
    pub fn step(&mut self, dt: f32) -> Result<StepReport, PhysicsError> {
        step::step(self, dt)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
