use thiserror::Error;

/// Enum with all errors this crate's core can raise.
///
/// These are construction invariant violations (empty input, a leaf size too small to hold
/// anything), never query-time failures: once a [`crate::kdbtree::KDBTree`] or
/// [`crate::bkdforest::BKDForest`] exists, `contains` cannot fail.
#[derive(Error, Debug)]
pub enum GeoIndexError {
    #[error("General error: {0}")]
    General(String),
}

pub type Result<T, E = GeoIndexError> = std::result::Result<T, E>;
