use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::vec2::Vec2;

/// A position in world space.
///
/// Kept apart from [`Vec2`] so positions and displacements can't be mixed up:
/// `Point - Point` is a displacement, `Point ± Vec2` moves a point, and two
/// points can't be added.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Displacement from the origin to this point
    pub fn to_vector(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn distance_squared(self, other: Point) -> f32 {
        (other - self).norm_squared()
    }

    /// Clamp into the rectangle spanned by `bottom_left` and `top_right`
    pub fn clip(self, bottom_left: Point, top_right: Point) -> Self {
        Self {
            x: self.x.clamp(bottom_left.x, top_right.x),
            y: self.y.clamp(bottom_left.y, top_right.y),
        }
    }

    /// Inclusive rectangle containment
    pub fn is_in_rect(self, bottom_left: Point, top_right: Point) -> bool {
        self.x >= bottom_left.x
            && self.x <= top_right.x
            && self.y >= bottom_left.y
            && self.y <= top_right.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Point {
    type Output = Vec2;
    fn sub(self, rhs: Self) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Self;
    fn add(self, rhs: Vec2) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub<Vec2> for Point {
    type Output = Self;
    fn sub(self, rhs: Vec2) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl AddAssign<Vec2> for Point {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign<Vec2> for Point {
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
