//! Bounded FIFO tabu memory.

use std::collections::VecDeque;

use crate::local_search::Move;

/// Recently applied moves, oldest first.
///
/// Holds at most `capacity` distinct moves. Pushing a move that is already
/// present moves it to the back instead of storing it twice.
///
/// # Examples
///
/// ```
/// use u_itinerary::local_search::Move;
/// use u_itinerary::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.push(Move::TwoOpt { i: 0, j: 2 });
/// tabu.push(Move::TwoOpt { i: 0, j: 3 });
/// tabu.push(Move::TwoOpt { i: 1, j: 3 });
/// assert_eq!(tabu.len(), 2);
/// assert!(!tabu.contains(&Move::TwoOpt { i: 0, j: 2 }));
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    moves: VecDeque<Move>,
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` moves.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            moves: VecDeque::with_capacity(capacity),
        }
    }

    /// Records a move, evicting the oldest one beyond capacity.
    pub fn push(&mut self, mv: Move) {
        if self.capacity == 0 {
            return;
        }
        if let Some(pos) = self.moves.iter().position(|m| *m == mv) {
            self.moves.remove(pos);
        }
        self.moves.push_back(mv);
        while self.moves.len() > self.capacity {
            self.moves.pop_front();
        }
    }

    /// Returns `true` if the move is currently forbidden.
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Number of stored moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if no move is stored.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Maximum number of stored moves.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
