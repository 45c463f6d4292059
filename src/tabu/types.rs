//! Objectives and results for Tabu Search.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::evaluation::{tour_cost, RouteEvaluator};
use crate::local_search::{two_opt_delta, Move};

/// A route objective the tabu runner can minimize.
///
/// Implementors decide how a candidate move is costed: either by full
/// re-evaluation (the default) or by an incremental delta.
pub trait TabuObjective {
    /// Cost of a complete route (lower is better).
    fn cost(&mut self, route: &[usize]) -> f64;

    /// Cost of the route obtained by applying `mv` to `route`, whose own
    /// cost is `current_cost`.
    fn move_cost(&mut self, route: &[usize], current_cost: f64, mv: Move) -> f64 {
        let _ = current_cost;
        self.cost(&mv.apply(route))
    }
}

/// Time-windowed itinerary objective.
///
/// Every candidate is re-evaluated in full: a reversal shifts the arrival
/// clock of every later stop.
pub struct ItineraryObjective<'a> {
    evaluator: RouteEvaluator<'a>,
}

impl<'a> ItineraryObjective<'a> {
    /// Wraps an evaluator.
    pub fn new(evaluator: RouteEvaluator<'a>) -> Self {
        Self { evaluator }
    }
}

impl TabuObjective for ItineraryObjective<'_> {
    fn cost(&mut self, route: &[usize]) -> f64 {
        self.evaluator.cost(route)
    }
}

/// Closed-tour length objective.
///
/// 2-opt candidates are costed in O(1) when the matrix is symmetric; other
/// moves, and every move on an asymmetric matrix, are recomputed.
pub struct TourObjective<'a> {
    distances: &'a DistanceMatrix,
    symmetric: bool,
}

impl<'a> TourObjective<'a> {
    /// Creates the objective over a distance matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self {
            distances,
            symmetric: distances.is_symmetric(1e-9),
        }
    }
}

impl TabuObjective for TourObjective<'_> {
    fn cost(&mut self, route: &[usize]) -> f64 {
        tour_cost(route, self.distances)
    }

    fn move_cost(&mut self, route: &[usize], current_cost: f64, mv: Move) -> f64 {
        match mv {
            Move::TwoOpt { i, j } if self.symmetric => {
                current_cost + two_opt_delta(route, i, j, self.distances)
            }
            other => self.cost(&other.apply(route)),
        }
    }
}

/// Costs recorded after one tabu iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TabuTracePoint {
    /// Iteration number, from zero.
    pub iteration: usize,
    /// Cost of the route adopted in this iteration.
    pub current_cost: f64,
    /// Best cost found so far.
    pub best_cost: f64,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabuResult {
    /// Best route found.
    pub best_route: Vec<usize>,
    /// Cost of the best route.
    pub best_cost: f64,
    /// Cost of the route the search started from.
    pub initial_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best route was found (`None` if the initial
    /// route was never improved).
    pub best_iteration: Option<usize>,
    /// Per-iteration current and best cost.
    pub trace: Vec<TabuTracePoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_objective_asymmetric_recomputes() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 1.0, 9.0, 4.0],
            vec![2.0, 0.0, 1.0, 8.0],
            vec![7.0, 3.0, 0.0, 1.0],
            vec![1.0, 6.0, 5.0, 0.0],
        ])
        .expect("square");
        let mut objective = TourObjective::new(&dm);
        let route = [0, 1, 2, 3];
        let current = objective.cost(&route);
        let mv = Move::TwoOpt { i: 0, j: 2 };
        let expected = tour_cost(&mv.apply(&route), &dm);
        assert!((objective.move_cost(&route, current, mv) - expected).abs() < 1e-10);
    }
}
