//! 2-opt segment reversal neighborhood.
//!
//! # Algorithm
//!
//! For each pair of positions (i, j) with `i + 2 <= j`, reverse the segment
//! `route[i+1..=j]`. On a closed tour this removes edges (i, i+1) and
//! (j, j+1) and adds (i, j) and (i+1, j+1), so the change in length is
//!
//! ```text
//! delta = d(r[i], r[j]) + d(r[i+1], r[j+1]) - d(r[i], r[i+1]) - d(r[j], r[j+1])
//! ```
//!
//! with `j + 1` taken modulo n. The formula needs a symmetric matrix, since
//! the reversed segment is traversed backwards. It does not apply to the
//! time-windowed objective, where a reversal shifts every later arrival.
//!
//! # Complexity
//!
//! O(n²) moves per neighborhood, O(1) per delta.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::Move;
use crate::distance::DistanceMatrix;

/// Enumerates every 2-opt move for a route of length `n`.
///
/// # Examples
///
/// ```
/// use u_itinerary::local_search::{two_opt_moves, Move};
///
/// let moves = two_opt_moves(4);
/// assert_eq!(
///     moves,
///     vec![
///         Move::TwoOpt { i: 0, j: 2 },
///         Move::TwoOpt { i: 0, j: 3 },
///         Move::TwoOpt { i: 1, j: 3 },
///     ]
/// );
/// ```
pub fn two_opt_moves(n: usize) -> Vec<Move> {
    let mut moves = Vec::new();
    for i in 0..n.saturating_sub(2) {
        for j in (i + 2)..n {
            moves.push(Move::TwoOpt { i, j });
        }
    }
    moves
}

/// Closed-tour length change of reversing `route[i+1..=j]`.
///
/// Valid for symmetric matrices only.
///
/// # Panics
///
/// Panics if `j >= route.len()` or `i + 1 > j`.
pub fn two_opt_delta(route: &[usize], i: usize, j: usize, distances: &DistanceMatrix) -> f64 {
    let n = route.len();
    let a = route[i];
    let b = route[i + 1];
    let c = route[j];
    let d = route[(j + 1) % n];

    distances.get(a, c) + distances.get(b, d) - distances.get(a, b) - distances.get(c, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::tour_cost;
    use proptest::prelude::*;

    #[test]
    fn test_move_count() {
        // (n - 1)(n - 2) / 2 pairs
        assert_eq!(two_opt_moves(5).len(), 6);
        assert_eq!(two_opt_moves(10).len(), 36);
        assert!(two_opt_moves(2).is_empty());
        assert!(two_opt_moves(0).is_empty());
    }

    #[test]
    fn test_reversal() {
        let mv = Move::TwoOpt { i: 0, j: 3 };
        assert_eq!(mv.apply(&[5, 6, 7, 8, 9]), vec![5, 8, 7, 6, 9]);
    }

    #[test]
    fn test_delta_removes_crossing() {
        // Square corners 0 (0,0), 1 (1,1), 2 (1,0), 3 (0,1): tour 0-1-2-3 crosses.
        let s = 2f64.sqrt();
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, s, 1.0, 1.0],
            vec![s, 0.0, 1.0, 1.0],
            vec![1.0, 1.0, 0.0, s],
            vec![1.0, 1.0, s, 0.0],
        ])
        .expect("square");
        let route = [0, 1, 2, 3];
        let delta = two_opt_delta(&route, 0, 2, &dm);
        assert!(delta < 0.0);
        let improved = Move::TwoOpt { i: 0, j: 2 }.apply(&route);
        assert!((tour_cost(&improved, &dm) - 4.0).abs() < 1e-10);
    }

    fn symmetric_matrix(n: usize) -> impl Strategy<Value = DistanceMatrix> {
        proptest::collection::vec(0.0f64..100.0, n * n).prop_map(move |raw| {
            let mut dm = DistanceMatrix::new(n);
            for i in 0..n {
                for j in (i + 1)..n {
                    dm.set(i, j, raw[i * n + j]);
                    dm.set(j, i, raw[i * n + j]);
                }
            }
            dm
        })
    }

    proptest! {
        #[test]
        fn prop_delta_matches_recompute(
            dm in symmetric_matrix(7),
            route in Just((0..7usize).collect::<Vec<_>>()).prop_shuffle(),
        ) {
            let base = tour_cost(&route, &dm);
            for mv in two_opt_moves(route.len()) {
                let Move::TwoOpt { i, j } = mv else { unreachable!() };
                let delta = two_opt_delta(&route, i, j, &dm);
                let recomputed = tour_cost(&mv.apply(&route), &dm) - base;
                prop_assert!((delta - recomputed).abs() < 1e-7);
            }
        }
    }
}
