//! A forest of disjoint KDB trees bulk-built over one shared, longitude-sorted point array.

mod builder;
mod index;

#[cfg(test)]
mod test;

pub use index::BKDForest;
