use crate::core::error::PhysicsError;
use crate::rigid_body::{Body, Point, Shape, Vec2};
use crate::rigid_body_system::BodyHandle;

use super::Engine;

pub(super) fn try_create_body(
    engine: &mut Engine,
    shape: Shape,
    position: Point,
    velocity: Vec2,
    mass: f32,
) -> Result<BodyHandle, PhysicsError> {
    let handle = engine.arena.create(shape, position, velocity, mass)?;
    if let Some(body) = engine.arena.get_mut(handle) {
        body.set_bounce_factor(engine.default_bounce);
    }
    log::debug!(
        "created {:?} {:?} at ({}, {}), mass {}",
        shape.kind(),
        handle,
        position.x,
        position.y,
        mass
    );
    Ok(handle)
}

pub(super) fn create_body(engine: &mut Engine, shape: Shape, position: Point, velocity: Vec2, mass: f32) -> BodyHandle {
    match try_create_body(engine, shape, position, velocity, mass) {
        Ok(handle) => handle,
        Err(e) => {
            log::warn!("body creation failed: {}", e);
            BodyHandle::INVALID
        }
    }
}

pub(super) fn destroy_body(engine: &mut Engine, handle: BodyHandle) -> Result<Body, PhysicsError> {
    let body = engine
        .arena
        .destroy(handle)
        .ok_or(PhysicsError::UnknownBody(handle))?;
    remove_body(engine, handle);
    log::debug!("destroyed {:?}", handle);
    Ok(body)
}

pub(super) fn add_body(engine: &mut Engine, handle: BodyHandle) -> bool {
    if !engine.arena.contains(handle) {
        log::debug!("add_body: {:?} is not a live body", handle);
        return false;
    }
    if engine.bodies.contains(&handle) {
        log::debug!("add_body: {:?} already registered", handle);
        return false;
    }
    engine.bodies.push(handle);
    true
}

pub(super) fn remove_body(engine: &mut Engine, handle: BodyHandle) -> usize {
    let before = engine.bodies.len();
    engine.bodies.retain(|&h| h != handle);
    before - engine.bodies.len()
}
