//! Distance and travel time matrices.
//!
//! Provides a dense matrix type and the distance/duration pair the
//! time-windowed evaluator walks.

mod matrix;

pub use matrix::{DistanceMatrix, TravelMatrix};
