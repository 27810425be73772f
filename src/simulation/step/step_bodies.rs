use crate::rigid_body::Vec2;
use crate::rigid_body_system::{
    bounce_off_edges, clip_to_world, continuous_forces, ground_friction, EdgeContact,
};

use super::Engine;

/// Clamp every registered body into the world rectangle
pub(super) fn clip_bodies(engine: &mut Engine) {
    let (bottom_left, top_right) = (engine.bottom_left, engine.top_right);
    for &handle in engine.bodies.iter() {
        if let Some(body) = engine.arena.get_mut(handle) {
            clip_to_world(body, bottom_left, top_right);
        }
    }
}

/// Wall bounce, ground friction, gravity and air drag for every registered
/// body. Returns the number of bodies touching the boundary.
pub(super) fn apply_world_forces(engine: &mut Engine) -> u32 {
    let (bottom_left, top_right) = (engine.bottom_left, engine.top_right);
    let (gravity, air_drag, friction) = (engine.gravity, engine.air_drag, engine.ground_friction);
    let mut hits = 0u32;

    for &handle in engine.bodies.iter() {
        let Some(body) = engine.arena.get_mut(handle) else {
            continue;
        };

        let contact = EdgeContact::of(body.position(), bottom_left, top_right);
        let mut force = Vec2::zero();
        if contact.any() {
            hits += 1;
            bounce_off_edges(body, contact);
            if contact.bottom {
                force += ground_friction(body, friction, gravity);
            }
        }
        // Drag sees the post-bounce velocity.
        force += continuous_forces(body, gravity, air_drag);
        body.apply_force(force);
    }

    hits
}

pub(super) fn integrate(engine: &mut Engine, dt: f32) {
    for &handle in engine.bodies.iter() {
        if let Some(body) = engine.arena.get_mut(handle) {
            body.update(dt);
        }
    }
}
