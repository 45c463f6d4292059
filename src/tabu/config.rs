//! Tabu Search configuration.

use serde::{Deserialize, Serialize};

use crate::evaluation::PenaltyWeights;
use crate::local_search::Neighborhood;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_itinerary::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_capacity(7)
///     .with_smart_initial(false);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_capacity, 7);
/// assert!(!config.use_smart_initial);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabuConfig {
    /// Weight of elapsed time in the itinerary objective.
    pub alpha: f64,
    /// Weight of collected ratings in the itinerary objective.
    pub beta: f64,
    /// Number of recent moves kept in the tabu list.
    pub tabu_capacity: usize,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Stop after this many consecutive iterations without a new best.
    pub max_idle_iterations: usize,
    /// Start from the best multi-start nearest-neighbor route instead of
    /// the caller's route.
    pub use_smart_initial: bool,
    /// Number of random starting venues tried by the smart initial route.
    pub smart_starts: usize,
    /// Moves explored around the current route.
    pub neighborhood: Neighborhood,
    /// Penalty magnitudes of the itinerary objective.
    pub penalties: PenaltyWeights,
    /// Random seed (None for an OS-seeded generator).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 20.0,
            tabu_capacity: 10,
            max_iterations: 100,
            max_idle_iterations: 30,
            use_smart_initial: true,
            smart_starts: 3,
            neighborhood: Neighborhood::TwoOpt,
            penalties: PenaltyWeights::default(),
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the time weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the rating weight.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the maximum number of consecutive iterations without improvement.
    pub fn with_max_idle_iterations(mut self, n: usize) -> Self {
        self.max_idle_iterations = n;
        self
    }

    /// Enables or disables the nearest-neighbor initial route.
    pub fn with_smart_initial(mut self, enabled: bool) -> Self {
        self.use_smart_initial = enabled;
        self
    }

    /// Sets the number of nearest-neighbor starts.
    pub fn with_smart_starts(mut self, starts: usize) -> Self {
        self.smart_starts = starts;
        self
    }

    /// Sets the neighborhood.
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the penalty magnitudes.
    pub fn with_penalties(mut self, penalties: PenaltyWeights) -> Self {
        self.penalties = penalties;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
