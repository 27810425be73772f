//! Error types for the physics core.

use thiserror::Error;

use crate::rigid_body_system::BodyHandle;

/// Errors surfaced by the engine API.
///
/// Degenerate geometry (zero-length normals, coincident bodies) is never an
/// error; it is recovered where it happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Numeric argument the operation can't work with (division by zero,
    /// NaN/infinite input, negative mass)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// World rectangle is empty or inverted
    #[error("invalid world bounds: bottom-left ({left}, {bottom}) must be below and left of top-right ({right}, {top})")]
    InvalidWorldBounds {
        left: f32,
        bottom: f32,
        right: f32,
        top: f32,
    },

    /// Time step is negative or not finite
    #[error("invalid time step: {0}")]
    InvalidTimeStep(f32),

    /// World constant outside its allowed range
    #[error("invalid world constant {name}: {value}")]
    InvalidConstant { name: &'static str, value: f32 },

    /// Handle does not name a live body
    #[error("unknown body handle {0:?}")]
    UnknownBody(BodyHandle),

    /// World settings document could not be parsed
    #[error("config error: {0}")]
    Config(String),
}
