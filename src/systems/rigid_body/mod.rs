//! Rigid body data model
//!
//! Bodies are point masses carrying a collision shape. Positions are
//! [`Point`]s, velocities/forces/impulses are [`Vec2`]s; the two never mix.

mod angle;
mod body;
mod mass;
mod point;
mod shape;
mod vec2;

pub use angle::Angle;
pub use body::Body;
pub use mass::Mass;
pub use point::Point;
pub use shape::{Shape, ShapeKind, DEFAULT_SHAPE_RADIUS};
pub use vec2::{angle_between, Vec2, Vec2D};
