use super::*;

impl<T: Copy + PartialEq> QuadTree<T> {
    /// Insert `item` at `at`.
    ///
    /// Returns `false` when `at` lies outside the root rectangle; such items
    /// are simply not indexed.
    pub fn insert(&mut self, item: T, at: Point) -> bool {
        if !self.nodes[ROOT].contains(at) {
            return false;
        }

        let mut idx = ROOT;
        loop {
            let node = &self.nodes[idx];
            if node.entries.len() < MAX_OBJECTS || node.depth >= MAX_DEPTH {
                self.nodes[idx].entries.push((item, at));
                self.len += 1;
                return true;
            }

            let existing = node.children;
            let children = match existing {
                Some(children) => children,
                None => self.split(idx),
            };

            // The parent contains `at`, so one of its quadrants does too.
            match children.iter().copied().find(|&c| self.nodes[c].contains(at)) {
                Some(child) => idx = child,
                None => {
                    debug_assert!(false, "point {:?} escaped all quadrants", at);
                    self.nodes[idx].entries.push((item, at));
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Create the four quadrant children of `idx`, in SW, NW, SE, NE order.
    pub(super) fn split(&mut self, idx: usize) -> [usize; 4] {
        let (bl, tr, depth) = {
            let node = &self.nodes[idx];
            (node.bottom_left, node.top_right, node.depth + 1)
        };
        let mid = Point::new(bl.x + (tr.x - bl.x) * 0.5, bl.y + (tr.y - bl.y) * 0.5);

        let rects = [
            (bl, mid),                                          // SW
            (Point::new(bl.x, mid.y), Point::new(mid.x, tr.y)), // NW
            (Point::new(mid.x, bl.y), Point::new(tr.x, mid.y)), // SE
            (mid, tr),                                          // NE
        ];

        let first = self.nodes.len();
        for (child_bl, child_tr) in rects {
            self.nodes.push(Node::new(child_bl, child_tr, depth));
        }
        let children = [first, first + 1, first + 2, first + 3];
        self.nodes[idx].children = Some(children);
        children
    }
}
