use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quadrant {
    SouthWest,
    NorthWest,
    SouthEast,
    NorthEast,
}

const ORDER: [Quadrant; 4] = [
    Quadrant::SouthWest,
    Quadrant::NorthWest,
    Quadrant::SouthEast,
    Quadrant::NorthEast,
];

impl<T: Copy + PartialEq> QuadTree<T> {
    /// Root quadrant `at` would descend into
    fn root_quadrant(&self, at: Point) -> Option<Quadrant> {
        let children = self.nodes[ROOT].children?;
        children
            .iter()
            .zip(ORDER)
            .find(|(child, _)| self.nodes[**child].contains(at))
            .map(|(_, q)| q)
    }

    /// Root quadrant an item was stored under; `None` when it sits in the
    /// root itself or is absent
    fn stored_quadrant(&self, item: T) -> Option<Quadrant> {
        let children = self.nodes[ROOT].children?;
        children
            .iter()
            .zip(ORDER)
            .find(|(child, _)| self.subtree_contains(**child, item))
            .map(|(_, q)| q)
    }

    fn subtree_contains(&self, idx: usize, item: T) -> bool {
        let mut stack = vec![idx];
        while let Some(i) = stack.pop() {
            let node = &self.nodes[i];
            if node.entries.iter().any(|(e, _)| *e == item) {
                return true;
            }
            if let Some(children) = node.children {
                stack.extend_from_slice(&children);
            }
        }
        false
    }
}

fn world() -> QuadTree<u32> {
    QuadTree::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0))
}

#[test]
fn points_outside_root_are_rejected() {
    let mut tree = world();
    for p in [
        Point::new(-0.5, 50.0),
        Point::new(50.0, 100.5),
        Point::new(101.0, -1.0),
    ] {
        assert!(!tree.insert(1, p));
        assert!(tree.locate(p).is_empty());
    }
    assert!(tree.is_empty());
}

#[test]
fn points_inside_root_are_always_accepted() {
    let mut tree = world();
    let mut id = 0;
    for x in 0..=10 {
        for y in 0..=10 {
            assert!(tree.insert(id, Point::new(x as f32 * 10.0, y as f32 * 10.0)));
            id += 1;
        }
    }
    assert_eq!(tree.len(), 121);
}

#[test]
fn overflow_splits_exactly_once() {
    let mut tree = world();
    for i in 0..MAX_OBJECTS {
        assert!(tree.insert(i as u32, Point::new(10.0 + i as f32, 10.0)));
    }
    assert_eq!(tree.node_count(), 1);

    assert!(tree.insert(99, Point::new(80.0, 80.0)));
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.stored_quadrant(99), Some(Quadrant::NorthEast));
    assert_eq!(tree.stored_quadrant(0), None);
}

#[test]
fn locate_returns_path_entries_including_self() {
    let mut tree = world();
    for i in 0..MAX_OBJECTS as u32 {
        tree.insert(i, Point::new(50.0, 50.0));
    }
    tree.insert(100, Point::new(10.0, 10.0));
    tree.insert(200, Point::new(90.0, 90.0));

    let near_sw = tree.locate(Point::new(10.0, 10.0));
    assert!(near_sw.contains(&100));
    assert!(!near_sw.contains(&200));
    // Root entries are on every path.
    assert!(near_sw.contains(&0));
    assert_eq!(near_sw.len(), MAX_OBJECTS + 1);

    let near_ne = tree.locate(Point::new(90.0, 90.0));
    assert!(near_ne.contains(&200));
    assert!(!near_ne.contains(&100));
}

#[test]
fn split_line_ties_go_to_lower_left_quadrant() {
    let mut tree = world();
    for i in 0..MAX_OBJECTS as u32 {
        tree.insert(i, Point::new(1.0, 1.0));
    }
    // Exactly on both split lines.
    tree.insert(10, Point::new(50.0, 50.0));
    // On the vertical split line, upper half.
    tree.insert(11, Point::new(50.0, 75.0));
    // On the horizontal split line, right half.
    tree.insert(12, Point::new(75.0, 50.0));

    assert_eq!(tree.stored_quadrant(10), Some(Quadrant::SouthWest));
    assert_eq!(tree.stored_quadrant(11), Some(Quadrant::NorthWest));
    assert_eq!(tree.stored_quadrant(12), Some(Quadrant::SouthEast));

    assert_eq!(tree.root_quadrant(Point::new(50.0, 50.0)), Some(Quadrant::SouthWest));
    assert_eq!(tree.root_quadrant(Point::new(50.0, 75.0)), Some(Quadrant::NorthWest));
    assert_eq!(tree.root_quadrant(Point::new(75.0, 50.0)), Some(Quadrant::SouthEast));
    assert_eq!(tree.root_quadrant(Point::new(150.0, 50.0)), None);
}

#[test]
fn identical_points_stop_at_max_depth() {
    let mut tree = world();
    let n = MAX_OBJECTS * (MAX_DEPTH as usize + 4);
    for i in 0..n {
        assert!(tree.insert(i as u32, Point::new(33.0, 66.0)));
    }
    assert_eq!(tree.len(), n);
    assert_eq!(tree.depth(), MAX_DEPTH);
    assert_eq!(tree.locate(Point::new(33.0, 66.0)).len(), n);
}

#[test]
fn clear_keeps_only_the_root() {
    let mut tree = world();
    for i in 0..20u32 {
        tree.insert(i, Point::new(i as f32 * 5.0, 50.0));
    }
    assert!(tree.node_count() > 1);

    tree.clear();

    assert_eq!(tree.node_count(), 1);
    assert!(tree.is_empty());
    assert!(tree.locate(Point::new(10.0, 50.0)).is_empty());
    assert_eq!(tree.bounds(), (Point::new(0.0, 0.0), Point::new(100.0, 100.0)));
}

#[test]
fn box_query_reaches_across_a_split_line() {
    let mut tree = world();
    // Fill the root, spread far from the centre.
    for i in 0..MAX_OBJECTS as u32 {
        tree.insert(i, Point::new(2.0 + i as f32, 2.0));
    }
    tree.insert(20, Point::new(48.0, 60.0));
    tree.insert(21, Point::new(52.0, 60.0));
    assert_eq!(tree.stored_quadrant(20), Some(Quadrant::NorthWest));
    assert_eq!(tree.stored_quadrant(21), Some(Quadrant::NorthEast));

    // The path query from 20 never enters the NE quadrant.
    assert!(!tree.locate(Point::new(48.0, 60.0)).contains(&21));

    let mut out = Vec::new();
    tree.locate_in(Point::new(43.0, 55.0), Point::new(53.0, 65.0), &mut out);
    out.sort_unstable();
    assert_eq!(out, vec![20, 21]);
}

#[test]
fn box_query_filters_by_point_and_appends() {
    let mut tree = world();
    tree.insert(1, Point::new(10.0, 10.0));
    tree.insert(2, Point::new(90.0, 90.0));

    let mut out = vec![7];
    tree.locate_in(Point::new(0.0, 0.0), Point::new(10.0, 10.0), &mut out);
    assert_eq!(out, vec![7, 1]);

    out.clear();
    tree.locate_in(Point::new(200.0, 200.0), Point::new(300.0, 300.0), &mut out);
    assert!(out.is_empty());
}
