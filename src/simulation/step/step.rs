use crate::core::error::PhysicsError;

use super::{step_bodies, step_collisions, Engine, PerfTimer};

/// What a single `step` did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Frame number after the step
    pub frame: u64,
    /// Registered bodies that were stepped
    pub bodies: usize,
    /// Overlapping pairs found by the narrow phase
    pub contacts: u32,
    /// Contacts that produced an impulse
    pub collisions_resolved: u32,
    /// Bodies that touched the world boundary
    pub boundary_hits: u32,
}

pub(super) fn step(engine: &mut Engine, dt: f32) -> Result<StepReport, PhysicsError> {
    if !dt.is_finite() || dt < 0.0 {
        log::warn!("rejected time step {}", dt);
        return Err(PhysicsError::InvalidTimeStep(dt));
    }

    let perf_on = engine.perf_enabled;
    if perf_on {
        engine.perf_stats.reset();
        engine.perf_stats.body_count = engine.bodies.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // === BROAD PHASE INDEX ===
    // Fresh tree over the current world rectangle, then clamp every body
    // inside it.
    if perf_on {
        let t0 = PerfTimer::start();
        let (indexed, outside) = step_collisions::rebuild_tree(engine);
        step_bodies::clip_bodies(engine);
        engine.perf_stats.tree_ms = t0.elapsed_ms();
        engine.perf_stats.bodies_indexed = indexed;
        engine.perf_stats.bodies_outside = outside;
        engine.perf_stats.tree_nodes = engine.tree.node_count() as u32;
        engine.perf_stats.tree_depth = engine.tree.depth();
    } else {
        step_collisions::rebuild_tree(engine);
        step_bodies::clip_bodies(engine);
    }

    // === COLLISIONS ===
    // Impulses only land in the accumulators here, so every pair sees the
    // same pre-step velocities.
    let collisions = if perf_on {
        let t0 = PerfTimer::start();
        let counts = step_collisions::resolve_collisions(engine);
        engine.perf_stats.collision_ms = t0.elapsed_ms();
        engine.perf_stats.candidate_pairs = counts.candidate_pairs;
        engine.perf_stats.contacts = counts.contacts;
        engine.perf_stats.collisions_resolved = counts.resolved;
        counts
    } else {
        step_collisions::resolve_collisions(engine)
    };

    // === BOUNDARY + FORCES + INTEGRATION ===
    // Integration can carry a body past an edge, so clamp again before the
    // step returns.
    let boundary_hits = if perf_on {
        let t0 = PerfTimer::start();
        let hits = step_bodies::apply_world_forces(engine);
        step_bodies::integrate(engine, dt);
        step_bodies::clip_bodies(engine);
        engine.perf_stats.integrate_ms = t0.elapsed_ms();
        engine.perf_stats.boundary_hits = hits;
        hits
    } else {
        let hits = step_bodies::apply_world_forces(engine);
        step_bodies::integrate(engine, dt);
        step_bodies::clip_bodies(engine);
        hits
    };

    engine.frame += 1;

    if let Some(start) = step_start {
        engine.perf_stats.step_ms = start.elapsed_ms();
    }

    Ok(StepReport {
        frame: engine.frame,
        bodies: engine.bodies.len(),
        contacts: collisions.contacts,
        collisions_resolved: collisions.resolved,
        boundary_hits,
    })
}
