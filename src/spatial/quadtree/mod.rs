//! QuadTree - broad-phase spatial index
//!
//! Rebuilt from scratch every step; never kept across steps.
//!
//! Layout:
//! - Nodes live in one arena (`Vec<Node>`), children are referenced by index.
//! - Each node keeps up to `MAX_OBJECTS` entries before it splits into four
//!   equal quadrants. Entries already stored in a node stay there.
//! - Containment is inclusive on every edge. Children are tested in the order
//!   SW, NW, SE, NE and the first match wins, so a point on a split line goes
//!   to the lower/left quadrant.
//! - `locate` walks a single root-to-leaf path. `locate_in` walks every node
//!   meeting a box and is what the engine uses, since a circle can overlap
//!   bodies stored in a neighbouring quadrant.

mod insert;
mod query;

use crate::rigid_body::Point;

/// Entries a node holds before splitting
pub const MAX_OBJECTS: usize = 8;

/// Nodes at this depth never split; overflow is stored in place
pub const MAX_DEPTH: u32 = 16;

const ROOT: usize = 0;

#[derive(Clone, Debug)]
struct Node<T> {
    bottom_left: Point,
    top_right: Point,
    depth: u32,
    entries: Vec<(T, Point)>,
    /// Indices of the SW, NW, SE, NE children once split
    children: Option<[usize; 4]>,
}

impl<T> Node<T> {
    fn new(bottom_left: Point, top_right: Point, depth: u32) -> Self {
        Self {
            bottom_left,
            top_right,
            depth,
            entries: Vec::new(),
            children: None,
        }
    }

    #[inline]
    fn contains(&self, p: Point) -> bool {
        p.is_in_rect(self.bottom_left, self.top_right)
    }

    /// Inclusive rectangle intersection
    #[inline]
    fn overlaps(&self, bottom_left: Point, top_right: Point) -> bool {
        bottom_left.x <= self.top_right.x
            && top_right.x >= self.bottom_left.x
            && bottom_left.y <= self.top_right.y
            && top_right.y >= self.bottom_left.y
    }
}

/// Point quadtree over copyable handles
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    nodes: Vec<Node<T>>,
    len: usize,
}

impl<T: Copy + PartialEq> QuadTree<T> {
    pub fn new(bottom_left: Point, top_right: Point) -> Self {
        Self {
            nodes: vec![Node::new(bottom_left, top_right, 0)],
            len: 0,
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes (root included)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Deepest node level (root is 0)
    pub fn depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    pub fn bounds(&self) -> (Point, Point) {
        let root = &self.nodes[ROOT];
        (root.bottom_left, root.top_right)
    }

    /// Drop every entry and every child node; the root rectangle is kept.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        let root = &mut self.nodes[ROOT];
        root.entries.clear();
        root.children = None;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests;
