//! Per-body world interaction: boundary clipping, wall bounce, ground
//! friction and the continuous forces (gravity, air drag).

use crate::rigid_body::{Body, Point, Vec2};

/// Edges of the world rectangle a body currently touches
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeContact {
    pub left: bool,
    pub right: bool,
    pub bottom: bool,
    pub top: bool,
}

impl EdgeContact {
    pub fn of(position: Point, bottom_left: Point, top_right: Point) -> Self {
        Self {
            left: position.x <= bottom_left.x,
            right: position.x >= top_right.x,
            bottom: position.y <= bottom_left.y,
            top: position.y >= top_right.y,
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.bottom || self.top
    }
}

/// Clamp the body's position into the world rectangle.
/// Returns true if the body was outside.
pub fn clip_to_world(body: &mut Body, bottom_left: Point, top_right: Point) -> bool {
    let position = body.position();
    let clipped = position.clip(bottom_left, top_right);
    if clipped != position {
        body.set_position(clipped);
        true
    } else {
        false
    }
}

/// Reflect the velocity component pointing out of every touched edge,
/// scaled by the body's bounce factor.
///
/// Components already pointing back inside are left alone, so a body that
/// was bounced last step isn't flipped again while it is still on the edge.
pub fn bounce_off_edges(body: &mut Body, contact: EdgeContact) {
    if !contact.any() {
        return;
    }
    let bounce = body.bounce_factor();
    let mut v = body.velocity();

    if (contact.left && v.x < 0.0) || (contact.right && v.x > 0.0) {
        v.x = -v.x * bounce;
    }
    if (contact.bottom && v.y < 0.0) || (contact.top && v.y > 0.0) {
        v.y = -v.y * bounce;
    }

    body.set_velocity(v);
}

/// Kinetic friction from the ground: opposes the velocity with magnitude
/// `friction * |g| * mass`. Zero for a body at rest.
pub fn ground_friction(body: &Body, friction: f32, gravity: Vec2) -> Vec2 {
    if friction <= 0.0 {
        return Vec2::zero();
    }
    let direction = body.velocity().normalize();
    -direction * (friction * gravity.euclidean_norm() * body.mass().value())
}

/// Gravity plus linear air drag
pub fn continuous_forces(body: &Body, gravity: Vec2, air_drag: f32) -> Vec2 {
    gravity * body.mass().value() - body.velocity() * air_drag
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{Shape, ShapeKind};
    use approx::assert_relative_eq;

    const BL: Point = Point::new(0.0, 0.0);
    const TR: Point = Point::new(100.0, 100.0);

    fn body(x: f32, y: f32, v: Vec2) -> Body {
        Body::new(Shape::from(ShapeKind::Circle), Point::new(x, y), v, 2.0)
    }

    #[test]
    fn clip_pulls_body_back_inside() {
        let mut b = body(-5.0, 150.0, Vec2::zero());
        assert!(clip_to_world(&mut b, BL, TR));
        assert_eq!(b.position(), Point::new(0.0, 100.0));
        assert!(!clip_to_world(&mut b, BL, TR));
    }

    #[test]
    fn edges_are_detected_inclusively() {
        let c = EdgeContact::of(Point::new(0.0, 100.0), BL, TR);
        assert!(c.left && c.top);
        assert!(!c.right && !c.bottom);
        assert!(!EdgeContact::of(Point::new(50.0, 50.0), BL, TR).any());
    }

    #[test]
    fn bounce_reflects_outward_component_only() {
        let mut falling = body(50.0, 0.0, Vec2::new(3.0, -8.0));
        falling.set_bounce_factor(0.5);
        let contact = EdgeContact::of(falling.position(), BL, TR);
        bounce_off_edges(&mut falling, contact);
        assert_eq!(falling.velocity(), Vec2::new(3.0, 4.0));

        // Already moving back up: untouched.
        let mut rising = body(50.0, 0.0, Vec2::new(0.0, 4.0));
        let contact = EdgeContact::of(rising.position(), BL, TR);
        bounce_off_edges(&mut rising, contact);
        assert_eq!(rising.velocity(), Vec2::new(0.0, 4.0));
    }

    #[test]
    fn corner_bounces_both_axes() {
        let mut b = body(100.0, 100.0, Vec2::new(2.0, 2.0));
        b.set_bounce_factor(1.0);
        let contact = EdgeContact::of(b.position(), BL, TR);
        bounce_off_edges(&mut b, contact);
        assert_eq!(b.velocity(), Vec2::new(-2.0, -2.0));
    }

    #[test]
    fn friction_opposes_motion_and_vanishes_at_rest() {
        let gravity = Vec2::new(0.0, -10.0);
        let moving = body(10.0, 0.0, Vec2::new(5.0, 0.0));
        let f = ground_friction(&moving, 0.5, gravity);
        assert_relative_eq!(f.x, -10.0, epsilon = 1e-5);
        assert_relative_eq!(f.y, 0.0);

        let resting = body(10.0, 0.0, Vec2::zero());
        assert_eq!(ground_friction(&resting, 0.5, gravity), Vec2::zero());
        assert_eq!(ground_friction(&moving, 0.0, gravity), Vec2::zero());
    }

    #[test]
    fn gravity_scales_with_mass_and_drag_with_velocity() {
        let b = body(10.0, 10.0, Vec2::new(4.0, 0.0));
        let f = continuous_forces(&b, Vec2::new(0.0, -9.81), 0.25);
        assert_relative_eq!(f.x, -1.0);
        assert_relative_eq!(f.y, -19.62, epsilon = 1e-5);
    }
}
