use super::point::Point;
use super::vec2::Vec2;

/// Radius given to shapes created without an explicit size
pub const DEFAULT_SHAPE_RADIUS: f32 = 25.0;

/// Collision geometry tag.
///
/// Only circles take part in the narrow phase; rectangles and polygons can be
/// created but never report contacts yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Polygon,
}

/// Collision shape owned by exactly one body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    radius: f32,
    /// Offset of the shape's center from the body origin
    center: Point,
    /// Placeholder; contact normals come from the separation vector
    normal: Vec2,
}

impl Shape {
    pub fn new(kind: ShapeKind, radius: f32) -> Self {
        Self {
            kind,
            radius: radius.max(0.0),
            center: Point::origin(),
            normal: Vec2::new(0.0, 1.0),
        }
    }

    pub fn circle(radius: f32) -> Self {
        Self::new(ShapeKind::Circle, radius)
    }

    /// Same shape with its center moved away from the body origin
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn normal(&self) -> Vec2 {
        self.normal
    }
}

impl From<ShapeKind> for Shape {
    fn from(kind: ShapeKind) -> Self {
        Self::new(kind, DEFAULT_SHAPE_RADIUS)
    }
}
