use std::sync::Arc;

use crate::bkdforest::index::BKDForest;
use crate::error::{GeoIndexError, Result};
use crate::kdbtree::layout::Layout;
use crate::kdbtree::KDBTree;
use crate::point::Point;

impl<Id> BKDForest<Id> {
    /// Bulk-builds a forest over `points`.
    ///
    /// Sorts the whole array by longitude once, then repeatedly bites off the largest
    /// power-of-two-leaf KDB tree that still fits the remaining points (occupancy at least 50%,
    /// and exactly 100% for every tree but possibly the last), until the array is exhausted.
    pub fn build(mut points: Vec<Point<Id>>, max_docs_per_leaf: usize) -> Result<Self> {
        if points.is_empty() {
            return Err(GeoIndexError::General(
                "cannot build a BKD forest over an empty point sequence".to_string(),
            ));
        }
        if max_docs_per_leaf < 2 {
            return Err(GeoIndexError::General(
                "maxDocsPerLeaf must be at least 2".to_string(),
            ));
        }

        // 1. sort the entire sequence by longitude once; every tree inherits this order and
        // skips its own longitude sort.
        points.sort_by(|a, b| a.lon.total_cmp(&b.lon).then(a.lat.total_cmp(&b.lat)));

        let len = points.len();
        let mut cursor = 0;
        let mut layouts = Vec::new();

        while cursor < len {
            let remaining = len - cursor;
            let take = if remaining <= max_docs_per_leaf {
                remaining
            } else {
                // smallest level >= 2 with 2^(level-1) * maxDocsPerLeaf >= remaining
                let mut level = 2usize;
                while (1usize << (level - 1)) * max_docs_per_leaf < remaining {
                    level += 1;
                }
                (1usize << (level - 2)) * max_docs_per_leaf
            };

            let start = cursor;
            let end = cursor + take;
            let layout = Layout::build(&mut points, start, end, max_docs_per_leaf, true)?;
            layouts.push(layout);
            cursor = end;
        }

        let points: Arc<[Point<Id>]> = Arc::from(points);
        let trees = layouts
            .into_iter()
            .map(|layout| KDBTree::from_parts(points.clone(), layout))
            .collect();

        Ok(Self {
            points,
            trees,
            max_docs_per_leaf,
        })
    }
}
