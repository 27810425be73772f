/// Body mass together with its cached inverse.
///
/// A zero mass has a zero inverse, which makes the body immovable: every
/// force and impulse is scaled by the inverse before touching velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mass {
    mass: f32,
    inverse_mass: f32,
}

impl Mass {
    pub fn new(mass: f32) -> Self {
        let inverse_mass = if mass != 0.0 { 1.0 / mass } else { 0.0 };
        Self { mass, inverse_mass }
    }

    /// Immovable body
    pub fn infinite() -> Self {
        Self::new(0.0)
    }

    pub fn value(&self) -> f32 {
        self.mass
    }

    pub fn inverse(&self) -> f32 {
        self.inverse_mass
    }

    pub fn is_static(&self) -> bool {
        self.inverse_mass == 0.0
    }
}

impl Default for Mass {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_is_derived_once() {
        let m = Mass::new(4.0);
        assert_eq!(m.value(), 4.0);
        assert_eq!(m.inverse(), 0.25);
        assert!(!m.is_static());
    }

    #[test]
    fn zero_mass_is_static() {
        let m = Mass::new(0.0);
        assert_eq!(m.inverse(), 0.0);
        assert!(m.is_static());
        assert_eq!(Mass::infinite(), m);
    }
}
