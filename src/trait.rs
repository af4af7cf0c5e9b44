use crate::geometry::BBox;

/// The single capability shared by [`crate::kdbtree::KDBTree`] and
/// [`crate::bkdforest::BKDForest`]: answer a bounding-box containment query into a caller-owned
/// collector. Modeled as one tiny trait rather than an inheritance hierarchy — a generic "Tree"
/// handle is simply anything implementing this.
pub trait SpatialIndex<Id> {
    /// Appends the id of every indexed point inside `query` to `collector`. Matching order
    /// follows each tree's in-order leaf traversal (the longitude/latitude sort order fixed at
    /// construction); callers must not assume any other order.
    fn contains(&self, query: &BBox, collector: &mut Vec<Id>);
}
