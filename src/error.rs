//! Error type shared by every optimization entry point.

use thiserror::Error;

/// Errors returned when the inputs of an optimization call are invalid.
///
/// Only structural problems are errors. Missing or malformed opening hours
/// degrade to penalties inside the evaluator, and a distance matrix that
/// violates the triangle inequality is a caller precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ItineraryError {
    /// The route has no stops.
    #[error("route must contain at least one venue")]
    EmptyRoute,
    /// A venue index occurs more than once in the route.
    #[error("venue {index} appears more than once in the route")]
    DuplicateVenue {
        /// The repeated venue index.
        index: usize,
    },
    /// A venue index does not exist in the catalog or matrix.
    #[error("venue index {index} is out of range for {size} venues")]
    VenueOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of known venues.
        size: usize,
    },
    /// The matrices and the venue catalog disagree on the number of venues.
    #[error("expected {expected} venues, found {found}")]
    DimensionMismatch {
        /// Size implied by the distance model.
        expected: usize,
        /// Size actually supplied.
        found: usize,
    },
    /// The start vertex of a tour construction is not a matrix vertex.
    #[error("start vertex {start} is out of range for {size} vertices")]
    StartOutOfRange {
        /// Requested start vertex.
        start: usize,
        /// Number of vertices.
        size: usize,
    },
    /// The distance matrix has no vertices.
    #[error("distance matrix is empty")]
    EmptyMatrix,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, ItineraryError>;
