use std::collections::HashSet;

use crate::rigid_body::{Body, Vec2};
use crate::rigid_body_system::{check_collision, solve_collision, BodyHandle};
use crate::spatial::quadtree::QuadTree;

use super::Engine;

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct CollisionCounts {
    pub(super) candidate_pairs: u32,
    pub(super) contacts: u32,
    pub(super) resolved: u32,
}

/// Refill the quadtree from the registered bodies.
/// Returns `(indexed, outside)`; bodies outside the world aren't indexed.
pub(super) fn rebuild_tree(engine: &mut Engine) -> (u32, u32) {
    if engine.tree.bounds() == (engine.bottom_left, engine.top_right) {
        engine.tree.clear();
    } else {
        engine.tree = QuadTree::new(engine.bottom_left, engine.top_right);
    }

    let mut indexed = 0u32;
    let mut outside = 0u32;
    for &handle in engine.bodies.iter() {
        let Some(body) = engine.arena.get(handle) else {
            continue;
        };
        if engine.tree.insert(handle, body.position()) {
            indexed += 1;
        } else {
            outside += 1;
        }
    }
    (indexed, outside)
}

/// Distance from a body's indexed position to the far edge of its shape
fn reach(body: &Body) -> f32 {
    body.shape().radius() + body.shape().center().to_vector().euclidean_norm()
}

/// Broad phase through the tree, narrow phase on each new pair.
///
/// Each body queries the box around its position padded by its own reach
/// plus the largest reach of any registered body, which covers every
/// partner it can touch wherever the tree stored it.
///
/// An unordered pair is tested at most once per step. Pairs are visited in
/// registration order of the querying body, then tree order.
pub(super) fn resolve_collisions(engine: &mut Engine) -> CollisionCounts {
    let mut counts = CollisionCounts::default();
    let mut seen: HashSet<(BodyHandle, BodyHandle)> = HashSet::new();
    let rule = engine.restitution;
    let world_bounce = engine.default_bounce;

    let max_reach = engine
        .bodies
        .iter()
        .filter_map(|&h| engine.arena.get(h))
        .map(reach)
        .fold(0.0f32, f32::max);

    for &a in engine.bodies.iter() {
        let Some((position, own_reach)) = engine.arena.get(a).map(|b| (b.position(), reach(b))) else {
            continue;
        };
        let pad = Vec2::new(own_reach + max_reach, own_reach + max_reach);
        let (bottom_left, top_right) = (position - pad, position + pad);
        engine.candidates.clear();
        engine.tree.locate_in(bottom_left, top_right, &mut engine.candidates);

        for &b in engine.candidates.iter() {
            if a == b {
                continue;
            }
            let key = if a < b { (a, b) } else { (b, a) };
            if !seen.insert(key) {
                continue;
            }
            counts.candidate_pairs += 1;

            if !check_collision(&engine.arena, a, b) {
                continue;
            }
            counts.contacts += 1;
            if solve_collision(&mut engine.arena, a, b, rule, world_bounce).is_some() {
                counts.resolved += 1;
            }
        }
    }

    counts
}
