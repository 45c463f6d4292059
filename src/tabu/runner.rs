//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the given route
//! 2. At each iteration:
//!    a. Cost every move of the neighborhood
//!    b. Select the cheapest move that is not tabu, or is tabu but beats the
//!       global best (aspiration)
//!    c. Adopt it even if it is worse than the current route
//!    d. Update the global best on strict improvement
//!    e. Push the move into the tabu list
//! 3. Terminate when no move is admissible, after max iterations, or after
//!    max idle iterations without a new best
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use tracing::{debug, info};

use super::config::TabuConfig;
use super::list::TabuList;
use super::types::{TabuObjective, TabuResult, TabuTracePoint};
use crate::local_search::Move;

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search from `initial` on the given objective.
    ///
    /// Uses `config.neighborhood`, `config.tabu_capacity`,
    /// `config.max_iterations`, and `config.max_idle_iterations`; initial
    /// route construction is the caller's concern.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_itinerary::distance::DistanceMatrix;
    /// use u_itinerary::tabu::{TabuConfig, TabuRunner, TourObjective};
    ///
    /// let dm = DistanceMatrix::from_rows(&[
    ///     vec![0.0, 1.0, 2.0, 1.0],
    ///     vec![1.0, 0.0, 1.0, 2.0],
    ///     vec![2.0, 1.0, 0.0, 1.0],
    ///     vec![1.0, 2.0, 1.0, 0.0],
    /// ])
    /// .unwrap();
    /// let mut objective = TourObjective::new(&dm);
    /// let result = TabuRunner::run(&mut objective, vec![0, 2, 1, 3], &TabuConfig::default());
    /// assert!((result.best_cost - 4.0).abs() < 1e-10);
    /// ```
    pub fn run<O: TabuObjective>(
        objective: &mut O,
        initial: Vec<usize>,
        config: &TabuConfig,
    ) -> TabuResult {
        let mut current = initial;
        let mut current_cost = objective.cost(&current);
        let initial_cost = current_cost;

        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut best_iteration = None;

        let moves = config.neighborhood.moves(current.len());
        let mut tabu = TabuList::new(config.tabu_capacity);
        let mut trace = Vec::with_capacity(config.max_iterations);
        let mut idle = 0;

        for iteration in 0..config.max_iterations {
            let candidates = moves
                .iter()
                .map(|&mv| (mv, objective.move_cost(&current, current_cost, mv)));

            let Some((mv, cost)) = select_candidate(candidates, &tabu, best_cost) else {
                debug!(iteration, "no admissible move, stopping");
                break;
            };

            mv.apply_in_place(&mut current);
            current_cost = cost;

            if cost < best_cost {
                best = current.clone();
                best_cost = cost;
                best_iteration = Some(iteration);
                idle = 0;
                debug!(iteration, best_cost, "new best route");
            } else {
                idle += 1;
            }

            tabu.push(mv);
            trace.push(TabuTracePoint {
                iteration,
                current_cost,
                best_cost,
            });

            if idle >= config.max_idle_iterations {
                debug!(iteration, idle, "no improvement, stopping");
                break;
            }
        }

        // Incremental deltas accumulate rounding; report the exact cost.
        if best_iteration.is_some() {
            best_cost = objective.cost(&best);
        }

        info!(
            iterations = trace.len(),
            initial_cost,
            best_cost,
            "tabu search finished"
        );

        TabuResult {
            best_route: best,
            best_cost,
            initial_cost,
            iterations: trace.len(),
            best_iteration,
            trace,
        }
    }
}

/// Picks the cheapest admissible candidate.
///
/// A tabu candidate is admissible only if it beats `best_cost`. Ties keep
/// the earliest candidate.
fn select_candidate<I>(candidates: I, tabu: &TabuList, best_cost: f64) -> Option<(Move, f64)>
where
    I: IntoIterator<Item = (Move, f64)>,
{
    let mut chosen: Option<(Move, f64)> = None;
    for (mv, cost) in candidates {
        let admissible = !tabu.contains(&mv) || cost < best_cost;
        if admissible && chosen.is_none_or(|(_, c)| cost < c) {
            chosen = Some((mv, cost));
        }
    }
    chosen
}
