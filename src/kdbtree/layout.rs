//! Bulk-construction math for a single KDB tree: level count, leaf sizing, the sort schedule,
//! and bounding-box rollup. Kept apart from [`crate::kdbtree::index::KDBTree`] itself so the
//! [`crate::bkdforest::BKDForest`] builder can run this over disjoint slices of one shared,
//! not-yet-`Arc`'d point buffer before any tree takes shared ownership of it.

use crate::error::{GeoIndexError, Result};
use crate::geometry::LonLat;
use crate::point::Point;

/// Everything about a KDB tree except the points buffer it slices into. A full [`KDBTree`][crate::kdbtree::KDBTree]
/// is this plus a shared, read-only handle on that buffer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Layout {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) max_level: usize,
    pub(crate) num_leaves: usize,
    pub(crate) min_docs: usize,
    pub(crate) extras: usize,
    pub(crate) min_bounds: Vec<LonLat>,
    pub(crate) max_bounds: Vec<LonLat>,
}

impl Layout {
    /// Builds the layout for the slice `points[start..end]`, sorting that slice in place.
    ///
    /// `sorted` indicates the slice is already sorted by longitude ascending (true for every
    /// tree a [`BKDForest`][crate::bkdforest::BKDForest] builds, since it sorts the whole array
    /// once up front).
    pub(crate) fn build<Id>(
        points: &mut [Point<Id>],
        start: usize,
        end: usize,
        max_docs_per_leaf: usize,
        sorted: bool,
    ) -> Result<Self> {
        if end <= start {
            return Err(GeoIndexError::General(
                "cannot build a KDB tree over an empty slice".to_string(),
            ));
        }
        if max_docs_per_leaf < 2 {
            return Err(GeoIndexError::General(
                "maxDocsPerLeaf must be at least 2".to_string(),
            ));
        }

        let n = end - start;

        // 1. level count: smallest L with 2^(L-1) * maxDocsPerLeaf >= n
        let mut max_level = 1usize;
        while (1usize << (max_level - 1)) * max_docs_per_leaf < n {
            max_level += 1;
        }
        let num_leaves = 1usize << (max_level - 1);
        let min_docs = n / num_leaves;
        let extras = n % num_leaves;

        let slice = &mut points[start..end];

        // 3. sort by longitude, unless the caller already guarantees it (tie-broken by latitude
        // for reproducibility, per the data model's "unspecified but deterministic" rule).
        if !sorted {
            slice.sort_by(|a, b| a.lon.total_cmp(&b.lon).then(a.lat.total_cmp(&b.lat)));
        }

        // 4. longitude-partitioned sort by latitude: split into P = 2^(L/2) leaf groups and sort
        // each independently.
        let p = 1usize << (max_level / 2);
        let leaves_per_group = num_leaves / p;
        for group in 0..p {
            let leaf_lo = group * leaves_per_group;
            let leaf_hi = leaf_lo + leaves_per_group;
            let point_lo = leaf_start(start, min_docs, extras, leaf_lo);
            let point_hi = leaf_start(start, min_docs, extras, leaf_hi);
            points[point_lo..point_hi]
                .sort_by(|a, b| a.lat.total_cmp(&b.lat).then(a.lon.total_cmp(&b.lon)));
        }

        let num_nodes = 2 * num_leaves - 1;
        let mut min_bounds = vec![LonLat::new(f64::INFINITY, f64::INFINITY); num_nodes];
        let mut max_bounds = vec![LonLat::new(f64::NEG_INFINITY, f64::NEG_INFINITY); num_nodes];

        // 5. leaf bounding boxes
        for i in 0..num_leaves {
            let lo = leaf_start(start, min_docs, extras, i);
            let hi = leaf_start(start, min_docs, extras, i + 1);
            let (mut min_lon, mut min_lat) = (f64::INFINITY, f64::INFINITY);
            let (mut max_lon, mut max_lat) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
            for p in &points[lo..hi] {
                min_lon = min_lon.min(p.lon);
                min_lat = min_lat.min(p.lat);
                max_lon = max_lon.max(p.lon);
                max_lat = max_lat.max(p.lat);
            }
            let idx = num_leaves - 1 + i;
            min_bounds[idx] = LonLat::new(min_lon, min_lat);
            max_bounds[idx] = LonLat::new(max_lon, max_lat);
        }

        // 6. internal bounding boxes, bottom-up
        for level in (1..max_level).rev() {
            let lo = 1usize << (level - 1);
            let hi = (1usize << level) - 1;
            for n in lo..=hi {
                let left = min_bounds[2 * n - 1];
                let right = min_bounds[2 * n];
                min_bounds[n - 1] = LonLat::new(left.lon.min(right.lon), left.lat.min(right.lat));

                let left = max_bounds[2 * n - 1];
                let right = max_bounds[2 * n];
                max_bounds[n - 1] = LonLat::new(left.lon.max(right.lon), left.lat.max(right.lat));
            }
        }

        Ok(Self {
            start,
            end,
            max_level,
            num_leaves,
            min_docs,
            extras,
            min_bounds,
            max_bounds,
        })
    }
}

/// `leaf_start(i) = start + i * min_docs + min(i, extras)`; leaves `0..extras` hold one extra
/// point each. Valid for `i` in `0..=num_leaves` (the latter giving `end`).
#[inline]
pub(crate) fn leaf_start(start: usize, min_docs: usize, extras: usize, i: usize) -> usize {
    start + i * min_docs + i.min(extras)
}
