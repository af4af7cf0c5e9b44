//! Query traversal. `contains` walks the implicit tree recursively, passing the current
//! `nodeId` (and the leaf range it spans) as a plain recursion parameter rather than keeping a
//! mutable "current node" cursor on the tree — every descent is self-contained, so concurrent
//! `contains` calls against the same tree with distinct collectors never observe shared mutable
//! state. See the design notes on cursor-style navigation vs. parameter passing.

use crate::geometry::{BBox, Relation};
use crate::kdbtree::index::{left, right, root, KDBTree};
use crate::r#trait::SpatialIndex;

impl<Id: Clone> SpatialIndex<Id> for KDBTree<Id> {
    fn contains(&self, query: &BBox, collector: &mut Vec<Id>) {
        self.contains_node(root(), 0, self.num_leaves(), query, collector);
    }
}

impl<Id: Clone> KDBTree<Id> {
    fn contains_node(
        &self,
        node: usize,
        leaf_lo: usize,
        leaf_hi: usize,
        query: &BBox,
        collector: &mut Vec<Id>,
    ) {
        let node_box = self.node_box(node);
        match node_box.relate(query) {
            Relation::Disjoint => {}
            Relation::Within => {
                let (lo, hi) = self.leaf_point_range(leaf_lo, leaf_hi);
                collector.extend(self.points[lo..hi].iter().map(|p| p.id.clone()));
            }
            // CONTAINS or INTERSECTS at a leaf: scan its points linearly.
            _ if self.is_leaf(node) => {
                let (lo, hi) = self.leaf_point_range(leaf_lo, leaf_hi);
                for p in &self.points[lo..hi] {
                    if query.point_in_box(&p.lon_lat()) {
                        collector.push(p.id.clone());
                    }
                }
            }
            _ => {
                let mid = (leaf_lo + leaf_hi) / 2;
                self.contains_node(left(node), leaf_lo, mid, query, collector);
                self.contains_node(right(node), mid, leaf_hi, query, collector);
            }
        }
    }
}
