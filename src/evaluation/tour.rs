//! Pure-distance objectives.
//!
//! Used by the ant colony, the spanning-tree bounds, and the pure-distance
//! tabu search. None of these reason about calendar time.

use crate::distance::DistanceMatrix;

/// Length of the closed tour `route[0] → … → route[n-1] → route[0]`.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::evaluation::tour_cost;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert!((tour_cost(&[0, 1, 2], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_cost(route: &[usize], distances: &DistanceMatrix) -> f64 {
    match (route.first(), route.last()) {
        (Some(&first), Some(&last)) => path_cost(route, distances) + distances.get(last, first),
        _ => 0.0,
    }
}

/// Length of the open path `route[0] → … → route[n-1]`.
pub fn path_cost(route: &[usize], distances: &DistanceMatrix) -> f64 {
    route.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}
