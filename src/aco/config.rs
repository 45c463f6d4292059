//! Ant Colony Optimization configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for the ant colony.
///
/// # Examples
///
/// ```
/// use u_itinerary::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(10)
///     .with_generations(50)
///     .with_seed(7);
/// assert_eq!(config.ants, 10);
/// assert_eq!(config.generations, 50);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoConfig {
    /// Tours built per generation.
    pub ants: usize,
    /// Number of generations.
    pub generations: usize,
    /// Pheromone exponent.
    pub alpha: f64,
    /// Visibility exponent.
    pub beta: f64,
    /// Fraction of pheromone lost each generation, in `[0, 1]`.
    pub evaporation: f64,
    /// Pheromone amount `Q`; a tour of cost `c` deposits `Q / c`.
    pub deposit: f64,
    /// Multiplier of the extra deposit on the global-best tour.
    pub elite_weight: f64,
    /// Pheromone on every edge before the first generation.
    pub initial_pheromone: f64,
    /// Random seed (None for an OS-seeded generator).
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 20,
            generations: 200,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.5,
            deposit: 100.0,
            elite_weight: 2.0,
            initial_pheromone: 0.1,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants.
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = ants;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the visibility exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation(mut self, rate: f64) -> Self {
        self.evaporation = rate;
        self
    }

    /// Sets the deposit constant.
    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    /// Sets the elite weight.
    pub fn with_elite_weight(mut self, weight: f64) -> Self {
        self.elite_weight = weight;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aco_config_defaults() {
        let config = AcoConfig::default();
        assert_eq!(config.ants, 20);
        assert_eq!(config.generations, 200);
        assert_eq!(config.alpha, 1.0);
        assert_eq!(config.beta, 2.0);
        assert_eq!(config.evaporation, 0.5);
        assert_eq!(config.deposit, 100.0);
        assert_eq!(config.elite_weight, 2.0);
        assert_eq!(config.initial_pheromone, 0.1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_aco_config_builder() {
        let config = AcoConfig::default()
            .with_alpha(2.0)
            .with_beta(3.0)
            .with_evaporation(0.1)
            .with_deposit(1.0)
            .with_elite_weight(0.0)
            .with_initial_pheromone(1.0);
        assert_eq!(config.alpha, 2.0);
        assert_eq!(config.beta, 3.0);
        assert_eq!(config.evaporation, 0.1);
        assert_eq!(config.deposit, 1.0);
        assert_eq!(config.elite_weight, 0.0);
        assert_eq!(config.initial_pheromone, 1.0);
    }
}
