use std::sync::Arc;

use crate::geometry::BBox;
use crate::kdbtree::KDBTree;
use crate::point::Point;
use crate::r#trait::SpatialIndex;

/// An ordered list of [`KDBTree`]s whose slices partition a shared point array in
/// longitude-sorted order. A query dispatches to every tree and concatenates results; no dedup
/// is needed since the trees' slices never overlap.
#[derive(Debug, Clone)]
pub struct BKDForest<Id> {
    pub(crate) points: Arc<[Point<Id>]>,
    pub(crate) trees: Vec<KDBTree<Id>>,
    pub(crate) max_docs_per_leaf: usize,
}

impl<Id> BKDForest<Id> {
    /// The number of KDB trees this forest partitioned its input into.
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// The total number of indexed points across all trees.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn max_docs_per_leaf(&self) -> usize {
        self.max_docs_per_leaf
    }

    pub fn trees(&self) -> &[KDBTree<Id>] {
        &self.trees
    }
}

impl<Id: Clone> SpatialIndex<Id> for BKDForest<Id> {
    fn contains(&self, query: &BBox, collector: &mut Vec<Id>) {
        for tree in &self.trees {
            tree.contains(query, collector);
        }
    }
}
