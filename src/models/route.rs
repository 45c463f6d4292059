//! Validated visiting order.

use serde::{Deserialize, Serialize};

use crate::error::{ItineraryError, Result};

/// Checks that `stops` is a non-empty sequence of distinct indices below `size`.
pub fn validate_route(stops: &[usize], size: usize) -> Result<()> {
    if stops.is_empty() {
        return Err(ItineraryError::EmptyRoute);
    }
    let mut seen = vec![false; size];
    for &index in stops {
        if index >= size {
            return Err(ItineraryError::VenueOutOfRange { index, size });
        }
        if seen[index] {
            return Err(ItineraryError::DuplicateVenue { index });
        }
        seen[index] = true;
    }
    Ok(())
}

/// An ordered sequence of distinct venue indices.
///
/// Invalid sequences are rejected rather than repaired.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Route;
/// use u_itinerary::ItineraryError;
///
/// let route = Route::new(vec![2, 0, 1], 3).unwrap();
/// assert_eq!(route.stops(), &[2, 0, 1]);
///
/// assert_eq!(
///     Route::new(vec![0, 0], 3),
///     Err(ItineraryError::DuplicateVenue { index: 0 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<usize>,
}

impl Route {
    /// Validates and wraps a sequence of venue indices.
    pub fn new(stops: Vec<usize>, venue_count: usize) -> Result<Self> {
        validate_route(&stops, venue_count)?;
        Ok(Self { stops })
    }

    /// The route `0, 1, …, n-1`.
    pub fn identity(n: usize) -> Result<Self> {
        Self::new((0..n).collect(), n)
    }

    /// Visiting order.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Unwraps the visiting order.
    pub fn into_stops(self) -> Vec<usize> {
        self.stops
    }
}
