//! Constructive heuristics for building initial routes.
//!
//! - [`nearest_neighbor_tour`] — greedy nearest-neighbor ordering, O(n²)
//! - [`multi_start_nearest_neighbor`] — best of several random starts

mod nearest_neighbor;

pub use nearest_neighbor::{multi_start_nearest_neighbor, nearest_neighbor_tour};
