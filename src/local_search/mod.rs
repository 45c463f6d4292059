//! Route neighborhoods for local search.
//!
//! - [`two_opt`](two_opt_moves) — segment reversal, with an O(1) tour delta
//! - [`swap`](swap_moves) — exchange two stops
//! - [`insert`](insert_moves) — relocate one stop

mod exchange;
mod two_opt;

use serde::{Deserialize, Serialize};

pub use exchange::{insert_moves, swap_moves};
pub use two_opt::{two_opt_delta, two_opt_moves};

/// Identity of a neighborhood move, by route positions.
///
/// Two moves with equal identity are the same move for tabu bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Reverse the stops at positions `i+1..=j`.
    TwoOpt {
        /// Position before the reversed segment.
        i: usize,
        /// Last position of the reversed segment.
        j: usize,
    },
    /// Exchange the stops at positions `i` and `j`.
    Swap {
        /// First position.
        i: usize,
        /// Second position.
        j: usize,
    },
    /// Remove the stop at `from` and reinsert it at `to`.
    Insert {
        /// Original position.
        from: usize,
        /// Position after reinsertion.
        to: usize,
    },
}

impl Move {
    /// Returns the route produced by this move.
    pub fn apply(&self, route: &[usize]) -> Vec<usize> {
        let mut out = route.to_vec();
        self.apply_in_place(&mut out);
        out
    }

    /// Applies this move to `route` in place.
    pub fn apply_in_place(&self, route: &mut Vec<usize>) {
        match *self {
            Move::TwoOpt { i, j } => route[i + 1..=j].reverse(),
            Move::Swap { i, j } => route.swap(i, j),
            Move::Insert { from, to } => {
                let stop = route.remove(from);
                route.insert(to, stop);
            }
        }
    }
}

/// Which moves a search explores around the current route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// 2-opt reversals only.
    #[default]
    TwoOpt,
    /// 2-opt, swap, and insertion moves.
    Extended,
}

impl Neighborhood {
    /// All moves of this neighborhood for a route of length `n`.
    pub fn moves(&self, n: usize) -> Vec<Move> {
        match self {
            Neighborhood::TwoOpt => two_opt_moves(n),
            Neighborhood::Extended => {
                let mut moves = two_opt_moves(n);
                moves.extend(swap_moves(n));
                moves.extend(insert_moves(n));
                moves
            }
        }
    }
}
