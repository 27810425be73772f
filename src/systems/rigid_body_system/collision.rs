use crate::domain::settings::RestitutionRule;
use crate::rigid_body::{Body, ShapeKind, Vec2};

use super::system::{BodyArena, BodyHandle};

/// Outcome of a shape overlap test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactTest {
    Hit,
    Miss,
    /// No narrow phase exists for this shape pair yet
    Unsupported,
}

/// Overlap test between two bodies' shapes.
pub fn test_shapes(a: &Body, b: &Body) -> ContactTest {
    match (a.shape().kind(), b.shape().kind()) {
        (ShapeKind::Circle, ShapeKind::Circle) => {
            let reach = a.shape().radius() + b.shape().radius();
            if a.world_center().distance_squared(b.world_center()) <= reach * reach {
                ContactTest::Hit
            } else {
                ContactTest::Miss
            }
        }
        // TODO: rectangle and polygon pairs need a SAT narrow phase.
        (ShapeKind::Rectangle | ShapeKind::Polygon, _)
        | (_, ShapeKind::Rectangle | ShapeKind::Polygon) => ContactTest::Unsupported,
    }
}

/// True when `a` and `b` are different live bodies whose shapes overlap.
///
/// A handle never collides with itself. Unsupported shape pairs report no
/// contact.
pub fn check_collision(arena: &BodyArena, a: BodyHandle, b: BodyHandle) -> bool {
    if a == b {
        return false;
    }
    let (Some(body_a), Some(body_b)) = (arena.get(a), arena.get(b)) else {
        return false;
    };
    match test_shapes(body_a, body_b) {
        ContactTest::Hit => true,
        ContactTest::Miss => false,
        ContactTest::Unsupported => {
            log::debug!(
                "no narrow phase for {:?} vs {:?}, skipping {:?}/{:?}",
                body_a.shape().kind(),
                body_b.shape().kind(),
                a,
                b
            );
            false
        }
    }
}

/// Resolve a contact between `a` and `b` with a single impulse.
///
/// The impulse goes through each body's accumulator (`-j` to `a`, `+j` to
/// `b`), so velocities only change at the next `update`. Returns the impulse
/// applied to `b`, or `None` when nothing was done: bodies already
/// separating, both immovable, or a handle not live.
pub fn solve_collision(
    arena: &mut BodyArena,
    a: BodyHandle,
    b: BodyHandle,
    rule: RestitutionRule,
    world_bounce: f32,
) -> Option<Vec2> {
    if a == b {
        return None;
    }
    let body_a = arena.get(a)?;
    let body_b = arena.get(b)?;

    let normal = (body_b.world_center() - body_a.world_center()).normalize();
    let relative_velocity = body_b.velocity() - body_a.velocity();
    let closing_speed = relative_velocity.dot(normal);

    // Separating along the normal: nothing to resolve.
    if closing_speed > 0.0 {
        return None;
    }

    let inverse_sum = body_a.mass().inverse() + body_b.mass().inverse();
    if inverse_sum == 0.0 {
        return None;
    }

    let restitution = rule.mix(world_bounce, body_a.bounce_factor(), body_b.bounce_factor());
    let magnitude = -(1.0 + restitution) * closing_speed / inverse_sum;
    let impulse = normal * magnitude;

    arena.get_mut(a)?.apply_impulse(-impulse);
    arena.get_mut(b)?.apply_impulse(impulse);

    log::trace!(
        "resolved {:?}/{:?}: closing {:.3}, e {:.2}, impulse {:?}",
        a,
        b,
        closing_speed,
        restitution,
        impulse
    );
    Some(impulse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{Point, Shape};
    use approx::assert_relative_eq;

    fn spawn(arena: &mut BodyArena, kind: ShapeKind, x: f32, vx: f32, mass: f32) -> BodyHandle {
        arena
            .create(Shape::new(kind, 10.0), Point::new(x, 50.0), Vec2::new(vx, 0.0), mass)
            .unwrap()
    }

    #[test]
    fn a_body_never_collides_with_itself() {
        let mut arena = BodyArena::new();
        let a = spawn(&mut arena, ShapeKind::Circle, 10.0, 0.0, 1.0);
        assert!(!check_collision(&arena, a, a));
        assert!(solve_collision(&mut arena, a, a, RestitutionRule::Average, 0.75).is_none());
    }

    #[test]
    fn circles_collide_when_touching() {
        let mut arena = BodyArena::new();
        let a = spawn(&mut arena, ShapeKind::Circle, 0.0, 0.0, 1.0);
        let touching = spawn(&mut arena, ShapeKind::Circle, 20.0, 0.0, 1.0);
        let apart = spawn(&mut arena, ShapeKind::Circle, 20.5, 0.0, 1.0);
        assert!(check_collision(&arena, a, touching));
        assert!(check_collision(&arena, touching, a));
        assert!(!check_collision(&arena, a, apart));
    }

    #[test]
    fn non_circle_pairs_are_unsupported() {
        let mut arena = BodyArena::new();
        let a = spawn(&mut arena, ShapeKind::Rectangle, 0.0, 0.0, 1.0);
        let b = spawn(&mut arena, ShapeKind::Circle, 1.0, 0.0, 1.0);
        assert_eq!(
            test_shapes(arena.get(a).unwrap(), arena.get(b).unwrap()),
            ContactTest::Unsupported
        );
        assert!(!check_collision(&arena, a, b));
    }

    #[test]
    fn separating_bodies_are_left_alone() {
        let mut arena = BodyArena::new();
        let a = spawn(&mut arena, ShapeKind::Circle, 0.0, -1.0, 1.0);
        let b = spawn(&mut arena, ShapeKind::Circle, 15.0, 1.0, 1.0);
        assert!(solve_collision(&mut arena, a, b, RestitutionRule::Average, 0.75).is_none());
        assert_eq!(arena.get(a).unwrap().pending_impulse(), Vec2::zero());
    }

    #[test]
    fn restitution_law_and_momentum() {
        let mut arena = BodyArena::new();
        let (m1, m2) = (2.0, 3.0);
        let a = spawn(&mut arena, ShapeKind::Circle, 0.0, 4.0, m1);
        let b = spawn(&mut arena, ShapeKind::Circle, 15.0, -1.0, m2);
        let e = 0.6;
        for h in [a, b] {
            arena.get_mut(h).unwrap().set_bounce_factor(e);
        }

        let normal = Vec2::new(1.0, 0.0);
        let u = (Vec2::new(-1.0, 0.0) - Vec2::new(4.0, 0.0)).dot(normal);
        let momentum_before = Vec2::new(4.0, 0.0) * m1 + Vec2::new(-1.0, 0.0) * m2;

        assert!(solve_collision(&mut arena, a, b, RestitutionRule::Average, 0.75).is_some());
        for h in [a, b] {
            arena.get_mut(h).unwrap().update(0.0);
        }

        let va = arena.get(a).unwrap().velocity();
        let vb = arena.get(b).unwrap().velocity();
        assert_relative_eq!((vb - va).dot(normal), -e * u, epsilon = 1e-5);

        let momentum_after = va * m1 + vb * m2;
        assert_relative_eq!(momentum_after.x, momentum_before.x, epsilon = 1e-5);
        assert_relative_eq!(momentum_after.y, momentum_before.y, epsilon = 1e-5);
    }

    #[test]
    fn static_body_absorbs_nothing() {
        let mut arena = BodyArena::new();
        let wall = spawn(&mut arena, ShapeKind::Circle, 15.0, 0.0, 0.0);
        let ball = spawn(&mut arena, ShapeKind::Circle, 0.0, 5.0, 1.0);
        arena.get_mut(ball).unwrap().set_bounce_factor(1.0);
        arena.get_mut(wall).unwrap().set_bounce_factor(1.0);

        solve_collision(&mut arena, ball, wall, RestitutionRule::Average, 0.75).unwrap();
        for h in [ball, wall] {
            arena.get_mut(h).unwrap().update(0.0);
        }

        assert_relative_eq!(arena.get(ball).unwrap().velocity().x, -5.0, epsilon = 1e-5);
        assert_eq!(arena.get(wall).unwrap().velocity(), Vec2::zero());
    }

    #[test]
    fn two_static_bodies_are_skipped() {
        let mut arena = BodyArena::new();
        let a = spawn(&mut arena, ShapeKind::Circle, 0.0, 1.0, 0.0);
        let b = spawn(&mut arena, ShapeKind::Circle, 5.0, -1.0, 0.0);
        assert!(solve_collision(&mut arena, a, b, RestitutionRule::World, 0.75).is_none());
    }

    #[test]
    fn coincident_bodies_do_not_produce_nan() {
        let mut arena = BodyArena::new();
        let a = spawn(&mut arena, ShapeKind::Circle, 5.0, 1.0, 1.0);
        let b = spawn(&mut arena, ShapeKind::Circle, 5.0, -1.0, 1.0);
        assert!(check_collision(&arena, a, b));
        // Zero normal: zero closing speed, zero impulse.
        let impulse = solve_collision(&mut arena, a, b, RestitutionRule::Average, 0.75).unwrap();
        assert_eq!(impulse, Vec2::zero());
    }
}
