use super::*;

impl<T: Copy + PartialEq> QuadTree<T> {
    /// Broad-phase candidates for a body at `at`.
    ///
    /// Collects the entries of every node on the root-to-leaf path containing
    /// `at`. The result includes the querying item itself when it was indexed
    /// there; callers filter self-pairs. Empty when `at` is outside the tree.
    pub fn locate(&self, at: Point) -> Vec<T> {
        let mut out = Vec::new();
        self.locate_into(at, &mut out);
        out
    }

    /// Same as [`QuadTree::locate`], appending into a reusable buffer
    pub fn locate_into(&self, at: Point, out: &mut Vec<T>) {
        if !self.nodes[ROOT].contains(at) {
            return;
        }

        let mut idx = ROOT;
        loop {
            let node = &self.nodes[idx];
            out.extend(node.entries.iter().map(|(item, _)| *item));

            let Some(children) = node.children else {
                return;
            };
            match children.iter().copied().find(|&c| self.nodes[c].contains(at)) {
                Some(child) => idx = child,
                None => return,
            }
        }
    }

    /// Broad-phase candidates for a body whose extent is the box
    /// `bottom_left..=top_right`.
    ///
    /// Visits every node whose rectangle meets the box and collects the
    /// entries whose point lies inside it, so bodies stored in sibling
    /// quadrants are still found when their boxes straddle a split line.
    /// Appends into `out`; callers clear it between queries.
    pub fn locate_in(&self, bottom_left: Point, top_right: Point, out: &mut Vec<T>) {
        if !self.nodes[ROOT].overlaps(bottom_left, top_right) {
            return;
        }

        let mut stack = vec![ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.nodes[idx];
            out.extend(
                node.entries
                    .iter()
                    .filter(|(_, at)| at.is_in_rect(bottom_left, top_right))
                    .map(|(item, _)| *item),
            );
            if let Some(children) = node.children {
                stack.extend(
                    children
                        .iter()
                        .copied()
                        .filter(|&c| self.nodes[c].overlaps(bottom_left, top_right)),
                );
            }
        }
    }
}
