//! An immutable, bulk-loaded spatial index over a static set of geographic points.
//!
//! The index answers axis-aligned bounding-box containment queries — "return every point whose
//! coordinates lie inside `[minLon,maxLon] x [minLat,maxLat]`" — honoring antimeridian
//! wraparound in longitude. It is built once from the full input set and is immutable
//! thereafter: no incremental insertion or deletion, no persistence, no k-NN queries.
//!
//! ## Layout
//!
//! - [`geometry`] — pure functions over boxes and points on the longitude-wrapped sphere.
//! - [`kdbtree`] — a single static, complete binary KD-B tree over a contiguous point slice.
//! - [`bkdforest`] — a forest of disjoint KDB trees partitioning the full input by longitude
//!   band; this is the type most callers want.
//!
//! ## Example
//!
//! ```
//! use bkd_geo_index::bkdforest::BKDForest;
//! use bkd_geo_index::geometry::{BBox, LonLat};
//! use bkd_geo_index::point::Point;
//! use bkd_geo_index::SpatialIndex;
//!
//! let points = vec![
//!     Point::new("a", 0.0, 0.0),
//!     Point::new("b", 1.0, 1.0),
//!     Point::new("c", 40.0, 40.0),
//! ];
//! let forest = BKDForest::build(points, 2).unwrap();
//!
//! let query = BBox::new(LonLat::new(2.0, 2.0), LonLat::new(-2.0, -2.0));
//! let mut hits = Vec::new();
//! forest.contains(&query, &mut hits);
//! hits.sort();
//! assert_eq!(hits, vec!["a", "b"]);
//! ```

pub mod bkdforest;
mod error;
pub mod geometry;
pub mod ingest;
pub mod kdbtree;
pub mod point;
mod r#trait;

pub use error::GeoIndexError;
pub use r#trait::SpatialIndex;

#[cfg(test)]
mod test;
