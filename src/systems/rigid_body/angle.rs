/// Angle in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f32);

impl Angle {
    pub const fn new(degrees: f32) -> Self {
        Self(degrees)
    }

    pub fn from_radians(radians: f32) -> Self {
        Self(radians.to_degrees())
    }

    pub fn degrees(&self) -> f32 {
        self.0
    }

    pub fn to_radians(&self) -> f32 {
        self.0.to_radians()
    }
}
