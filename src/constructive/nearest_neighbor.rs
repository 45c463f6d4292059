//! Nearest-neighbor constructive heuristic.
//!
//! Builds a route greedily: starting from a chosen venue, always move to the
//! unvisited venue with the least travel cost from the current position.
//!
//! # Complexity
//!
//! O(n²) where n = number of venues.

use rand::Rng;

use crate::distance::DistanceMatrix;

/// Orders `venues` by repeatedly appending the nearest unvisited venue.
///
/// `start` becomes the first stop; it is added if `venues` lacks it.
/// Ties resolve to the venue listed first.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::constructive::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(nearest_neighbor_tour(0, &[3, 2, 1, 0], &dm), vec![0, 1, 2, 3]);
/// ```
pub fn nearest_neighbor_tour(
    start: usize,
    venues: &[usize],
    matrix: &DistanceMatrix,
) -> Vec<usize> {
    let mut remaining: Vec<usize> = venues.iter().copied().filter(|&v| v != start).collect();
    let mut tour = Vec::with_capacity(remaining.len() + 1);
    tour.push(start);

    let mut current = start;
    while let Some(next) = matrix.nearest_neighbor(current, &remaining) {
        remaining.retain(|&v| v != next);
        tour.push(next);
        current = next;
    }
    tour
}

/// Runs [`nearest_neighbor_tour`] from up to `starts` distinct random venues
/// and keeps the tour with the lowest `cost`.
///
/// Returns `None` if `venues` is empty or `starts` is zero.
pub fn multi_start_nearest_neighbor<R, F>(
    venues: &[usize],
    matrix: &DistanceMatrix,
    starts: usize,
    rng: &mut R,
    mut cost: F,
) -> Option<(Vec<usize>, f64)>
where
    R: Rng + ?Sized,
    F: FnMut(&[usize]) -> f64,
{
    let amount = starts.min(venues.len());
    let mut best: Option<(Vec<usize>, f64)> = None;

    for pos in rand::seq::index::sample(rng, venues.len(), amount) {
        let tour = nearest_neighbor_tour(venues[pos], venues, matrix);
        let c = cost(&tour);
        if best.as_ref().is_none_or(|(_, best_cost)| c < *best_cost) {
            best = Some((tour, c));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::tour_cost;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1.0, 0.0, 1.0, 2.0],
            vec![2.0, 1.0, 0.0, 1.0],
            vec![3.0, 2.0, 1.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 10.0, 1.0],
            vec![10.0, 0.0, 9.0],
            vec![1.0, 9.0, 0.0],
        ])
        .expect("square");
        assert_eq!(nearest_neighbor_tour(0, &[0, 1, 2], &dm), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_from_middle() {
        let tour = nearest_neighbor_tour(2, &[0, 1, 2, 3], &line());
        assert_eq!(tour.len(), 4);
        assert_eq!(tour[0], 2);
        let mut sorted = tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_nn_subset() {
        assert_eq!(nearest_neighbor_tour(3, &[0, 3], &line()), vec![3, 0]);
    }

    #[test]
    fn test_nn_single() {
        assert_eq!(nearest_neighbor_tour(1, &[1], &line()), vec![1]);
    }

    #[test]
    fn test_multi_start_keeps_best() {
        let dm = line();
        let mut rng = StdRng::seed_from_u64(7);
        let (tour, cost) =
            multi_start_nearest_neighbor(&[0, 1, 2, 3], &dm, 4, &mut rng, |t| tour_cost(t, &dm))
                .expect("non-empty");
        assert_eq!(tour.len(), 4);
        // Every start on a line yields a tour; the best closed tour has length 6.
        assert!((cost - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_multi_start_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(multi_start_nearest_neighbor(&[], &line(), 3, &mut rng, |_| 0.0).is_none());
        assert!(multi_start_nearest_neighbor(&[0, 1], &line(), 0, &mut rng, |_| 0.0).is_none());
    }
}
