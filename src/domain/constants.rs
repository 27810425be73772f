//! World defaults used when no settings document is loaded.

use crate::rigid_body::{Point, Vec2};

/// Gravitational acceleration magnitude (m/s²)
pub const GRAVITY: f32 = 9.81;
pub const DEFAULT_BOUNCE_FACTOR: f32 = 0.75;
pub const AIR_DRAG_FACTOR: f32 = 0.0;
pub const GROUND_FRICTION: f32 = 0.0;

pub const WORLD_BOTTOM_LEFT: Point = Point::new(0.0, 0.0);
pub const WORLD_TOP_RIGHT: Point = Point::new(2048.0, 2048.0);

/// Gravity points down the y axis; y grows upwards from the ground.
pub const GRAVITY_VECTOR: Vec2 = Vec2::new(0.0, -GRAVITY);
