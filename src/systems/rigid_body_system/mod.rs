//! Body storage and the per-pair / per-body physics the engine runs each step.
//!
//! - `system`: the body arena and its stable handles
//! - `collision`: circle-circle narrow phase and impulse resolution
//! - `forces`: world boundary, ground friction, gravity and drag

mod collision;
mod forces;
mod system;

pub use collision::{check_collision, solve_collision, test_shapes, ContactTest};
pub use forces::{
    bounce_off_edges, clip_to_world, continuous_forces, ground_friction, EdgeContact,
};
pub use system::{BodyArena, BodyHandle};
