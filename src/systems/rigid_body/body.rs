use crate::domain::constants::DEFAULT_BOUNCE_FACTOR;

use super::mass::Mass;
use super::point::Point;
use super::shape::Shape;
use super::vec2::Vec2;

/// Rigid Body - a point mass with a collision shape
#[derive(Clone, Debug)]
pub struct Body {
    // === Physics State ===
    /// World position of the body origin
    position: Point,
    /// Velocity vector (world units per second)
    velocity: Vec2,
    mass: Mass,

    // === Material properties ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    bounce_factor: f32,

    // === Shape Definition ===
    shape: Shape,

    // === Per-step accumulators (drained by `update`) ===
    pending_forces: Vec<Vec2>,
    pending_impulses: Vec<Vec2>,
}

impl Body {
    pub fn new(shape: Shape, position: Point, velocity: Vec2, mass: f32) -> Self {
        Self {
            position,
            velocity,
            mass: Mass::new(mass),
            bounce_factor: DEFAULT_BOUNCE_FACTOR,
            shape,
            pending_forces: Vec::new(),
            pending_impulses: Vec::new(),
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn set_mass(&mut self, mass: Mass) {
        self.mass = mass;
    }

    pub fn bounce_factor(&self) -> f32 {
        self.bounce_factor
    }

    /// Set restitution (bounciness), clamped to `[0, 1]`
    pub fn set_bounce_factor(&mut self, bounce: f32) {
        self.bounce_factor = bounce.clamp(0.0, 1.0);
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// World-space center of the collision shape
    pub fn world_center(&self) -> Point {
        self.position + self.shape.center().to_vector()
    }

    /// Queue a force for the next `update`
    pub fn apply_force(&mut self, force: Vec2) {
        self.pending_forces.push(force);
    }

    /// Queue an impulse for the next `update`
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.pending_impulses.push(impulse);
    }

    /// Sum of the forces queued since the last `update`
    pub fn pending_force(&self) -> Vec2 {
        self.pending_forces.iter().sum()
    }

    /// Sum of the impulses queued since the last `update`
    pub fn pending_impulse(&self) -> Vec2 {
        self.pending_impulses.iter().sum()
    }

    /// Integrate one step of `dt` seconds and drain both accumulators.
    ///
    /// Must run exactly once per step, after every force and impulse for that
    /// step has been queued.
    pub fn update(&mut self, dt: f32) {
        let inverse_mass = self.mass.inverse();
        let acceleration = self.pending_force() * inverse_mass;
        let impulse = self.pending_impulse();

        self.position += self.velocity * dt + acceleration * (0.5 * dt * dt);
        self.velocity += acceleration * dt + impulse * inverse_mass;

        self.pending_forces.clear();
        self.pending_impulses.clear();
    }
}
