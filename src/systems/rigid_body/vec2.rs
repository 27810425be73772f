use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::core::error::PhysicsError;

use super::angle::Angle;

/// 2D vector over a numeric component type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2D<T> {
    pub x: T,
    pub y: T,
}

/// Float vector used for velocities, forces and impulses
pub type Vec2 = Vec2D<f32>;

impl<T> Vec2D<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Add<Output = T>> Add for Vec2D<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl<T: Sub<Output = T>> Sub for Vec2D<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vec2D<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl<T: Neg<Output = T>> Neg for Vec2D<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

impl<T: AddAssign> AddAssign for Vec2D<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: SubAssign> SubAssign for Vec2D<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for Vec2D<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl std::iter::Sum for Vec2 {
    fn sum<I: Iterator<Item = Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), |acc, v| acc + v)
    }
}

impl<'a> std::iter::Sum<&'a Vec2> for Vec2 {
    fn sum<I: Iterator<Item = &'a Vec2>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), |acc, v| acc + *v)
    }
}

impl Vec2 {
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Build a vector of `length` pointing at `angle` (counter-clockwise from +x)
    pub fn from_polar(length: f32, angle: Angle) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self { x: length * cos, y: length * sin }
    }

    pub fn euclidean_norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn norm_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    ///
    /// Coincident bodies produce zero-length separations every now and then,
    /// so this never fails.
    pub fn normalize(&self) -> Self {
        let len = self.euclidean_norm();
        if len > 0.0 {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::zero()
        }
    }

    /// Scalar division. Dividing by exactly zero is rejected instead of
    /// producing infinities.
    pub fn try_div(self, divisor: f32) -> Result<Self, PhysicsError> {
        if divisor == 0.0 {
            return Err(PhysicsError::InvalidArgument(
                "vector divided by zero".to_string(),
            ));
        }
        Ok(Self { x: self.x / divisor, y: self.y / divisor })
    }

    /// Nearest integer per component (halves round away from zero)
    pub fn round(&self) -> Vec2D<i32> {
        Vec2D::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// Clamp each component into `[min, max]`
    pub fn clip(&self, min: Vec2, max: Vec2) -> Self {
        Self {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Angle between two vectors in degrees.
///
/// Returns `Angle(0)` when either vector has zero length.
pub fn angle_between(a: Vec2, b: Vec2) -> Angle {
    let denom = a.euclidean_norm() * b.euclidean_norm();
    if denom == 0.0 {
        return Angle::new(0.0);
    }
    let cos = (a.dot(b) / denom).clamp(-1.0, 1.0);
    Angle::from_radians(cos.acos())
}
