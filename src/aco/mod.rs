//! Ant Colony Optimization for closed tours.
//!
//! Pure-distance construction metaheuristic: ants build tours guided by
//! pheromone trails and edge visibility, and the colony reinforces the
//! edges of short tours. Opening hours and ratings play no part.

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoTracePoint, AntColony};

use crate::distance::DistanceMatrix;
use crate::error::Result;

/// Runs an ant colony over `distances` with every tour starting at `start`.
///
/// # Errors
///
/// [`EmptyMatrix`](crate::ItineraryError::EmptyMatrix) for a 0×0 matrix and
/// [`StartOutOfRange`](crate::ItineraryError::StartOutOfRange) when `start`
/// is not a vertex.
///
/// # Examples
///
/// ```
/// use u_itinerary::aco::{run_ant_colony, AcoConfig};
/// use u_itinerary::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 9.0, 10.0],
///     vec![1.0, 0.0, 6.0, 4.0],
///     vec![15.0, 7.0, 0.0, 8.0],
///     vec![6.0, 3.0, 12.0, 0.0],
/// ])
/// .unwrap();
/// let config = AcoConfig::default().with_ants(10).with_generations(30).with_seed(4);
/// let result = run_ant_colony(&dm, &config, 0).unwrap();
/// assert_eq!(result.trace.len(), 30);
/// assert!((result.best_cost - 21.0).abs() < 1e-10);
/// ```
pub fn run_ant_colony(
    distances: &DistanceMatrix,
    config: &AcoConfig,
    start: usize,
) -> Result<AcoResult> {
    AntColony::new(distances, config.clone()).run(start)
}
