//! Swap and insertion neighborhoods.
//!
//! Used alongside 2-opt by the extended neighborhood of the pure-distance
//! tabu search. Neither has a constant-time delta here; candidates are
//! re-evaluated in full.

use super::Move;

/// Every exchange of two positions `i < j` in a route of length `n`.
///
/// # Examples
///
/// ```
/// use u_itinerary::local_search::{swap_moves, Move};
///
/// assert_eq!(swap_moves(3).len(), 3);
/// assert_eq!(Move::Swap { i: 0, j: 2 }.apply(&[4, 5, 6]), vec![6, 5, 4]);
/// ```
pub fn swap_moves(n: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            moves.push(Move::Swap { i, j });
        }
    }
    moves
}

/// Every relocation of the stop at `from` to position `to`, `from != to`.
///
/// # Examples
///
/// ```
/// use u_itinerary::local_search::{insert_moves, Move};
///
/// assert_eq!(insert_moves(3).len(), 6);
/// assert_eq!(Move::Insert { from: 0, to: 2 }.apply(&[4, 5, 6]), vec![5, 6, 4]);
/// ```
pub fn insert_moves(n: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(n * n.saturating_sub(1));
    for from in 0..n {
        for to in 0..n {
            if from != to {
                moves.push(Move::Insert { from, to });
            }
        }
    }
    moves
}
