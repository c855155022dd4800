//! Package cluster implements DBSCAN clustering on (lat, lon) using a 2-d tree
pub mod dbscan;
pub mod kdtree;

#[cfg(test)]
mod kdtree_test;

pub use dbscan::{DbscanResult, SpatialIndex, dbscan};
pub use kdtree::KDTree;
