//! Ant System with elitist reinforcement.
//!
//! # Algorithm
//!
//! 1. Initialize every pheromone level to `initial_pheromone`
//! 2. Each generation:
//!    a. Every ant builds a closed tour from the start vertex, choosing the
//!       next vertex by roulette with weight τ^α·η^β (η = 1/d)
//!    b. Update the global best after each ant
//!    c. Evaporate, let every ant deposit `Q / cost`, then reinforce the
//!       global best with `elite_weight · Q / best_cost`
//! 3. Stop after a fixed number of generations
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization
//! by a colony of cooperating agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::distance::DistanceMatrix;
use crate::error::{ItineraryError, Result};
use crate::evaluation::tour_cost;

/// Costs recorded after one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcoTracePoint {
    /// Generation number, from zero.
    pub generation: usize,
    /// Cheapest tour of this generation.
    pub best_cost: f64,
    /// Mean tour cost of this generation.
    pub mean_cost: f64,
    /// Best cost found so far.
    pub global_best: f64,
}

/// Result of an ant colony run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcoResult {
    /// Best closed tour found, starting at the start vertex.
    ///
    /// Empty when no tour was built (zero ants or generations).
    pub best_tour: Vec<usize>,
    /// Closed-tour cost of `best_tour` (infinite when empty).
    pub best_cost: f64,
    /// Per-generation statistics.
    pub trace: Vec<AcoTracePoint>,
}

/// Ant colony over a distance matrix.
///
/// # Examples
///
/// ```
/// use u_itinerary::aco::{AcoConfig, AntColony};
/// use u_itinerary::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0, 1.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![1.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let config = AcoConfig::default().with_ants(5).with_generations(20).with_seed(42);
/// let result = AntColony::new(&dm, config).run(0).unwrap();
/// assert_eq!(result.best_tour[0], 0);
/// assert!((result.best_cost - 4.0).abs() < 1e-10);
/// ```
pub struct AntColony<'a> {
    distances: &'a DistanceMatrix,
    visibility: Vec<f64>,
    config: AcoConfig,
}

impl<'a> AntColony<'a> {
    /// Prepares a colony; visibility is `1/d` for positive off-diagonal
    /// distances and zero elsewhere.
    pub fn new(distances: &'a DistanceMatrix, config: AcoConfig) -> Self {
        let n = distances.size();
        let mut visibility = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let d = distances.get(i, j);
                if i != j && d > 0.0 {
                    visibility[i * n + j] = 1.0 / d;
                }
            }
        }
        Self {
            distances,
            visibility,
            config,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Runs the colony from `start`, seeded by `config.seed`.
    pub fn run(&self, start: usize) -> Result<AcoResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(start, &mut rng)
    }

    /// Runs the colony from `start` with a caller-supplied random source.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(start = start, n = self.distances.size())
    )]
    pub fn run_with_rng<R: Rng + ?Sized>(&self, start: usize, rng: &mut R) -> Result<AcoResult> {
        self.run_observed(start, rng, |_, _| {})
    }

    /// Colony loop; `observe` sees each generation's statistics and the
    /// pheromone levels left by its update.
    fn run_observed<R, F>(&self, start: usize, rng: &mut R, mut observe: F) -> Result<AcoResult>
    where
        R: Rng + ?Sized,
        F: FnMut(&AcoTracePoint, &PheromoneMatrix),
    {
        let n = self.distances.size();
        if n == 0 {
            return Err(ItineraryError::EmptyMatrix);
        }
        if start >= n {
            return Err(ItineraryError::StartOutOfRange { start, size: n });
        }

        let config = &self.config;
        let mut pheromone = PheromoneMatrix::new(n, config.initial_pheromone);
        let mut global: Option<(Vec<usize>, f64)> = None;
        let mut trace = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            if config.ants == 0 {
                break;
            }
            let mut tours = Vec::with_capacity(config.ants);
            for _ in 0..config.ants {
                let tour = self.build_tour(start, &pheromone, rng);
                let cost = tour_cost(&tour, self.distances);
                if global.as_ref().is_none_or(|(_, best)| cost < *best) {
                    debug!(generation, cost, "new best tour");
                    global = Some((tour.clone(), cost));
                }
                tours.push((tour, cost));
            }

            pheromone.evaporate(config.evaporation);
            for (tour, cost) in &tours {
                if *cost > 0.0 {
                    pheromone.deposit_tour(tour, config.deposit / cost);
                }
            }
            if let Some((best_tour, best_cost)) = &global {
                if *best_cost > 0.0 {
                    let elite = config.elite_weight * config.deposit / best_cost;
                    pheromone.deposit_tour(best_tour, elite);
                }
            }

            let generation_best = tours
                .iter()
                .map(|(_, c)| *c)
                .min_by(f64::total_cmp)
                .unwrap_or(f64::INFINITY);
            let mean_cost = tours.iter().map(|(_, c)| c).sum::<f64>() / tours.len() as f64;
            let point = AcoTracePoint {
                generation,
                best_cost: generation_best,
                mean_cost,
                global_best: global.as_ref().map_or(f64::INFINITY, |(_, c)| *c),
            };
            observe(&point, &pheromone);
            trace.push(point);
        }

        let (best_tour, best_cost) = global.unwrap_or((Vec::new(), f64::INFINITY));
        info!(generations = trace.len(), best_cost, "ant colony finished");

        Ok(AcoResult {
            best_tour,
            best_cost,
            trace,
        })
    }

    /// One ant's tour from `start` over every vertex.
    fn build_tour<R: Rng + ?Sized>(
        &self,
        start: usize,
        pheromone: &PheromoneMatrix,
        rng: &mut R,
    ) -> Vec<usize> {
        let n = self.distances.size();
        let mut tour = Vec::with_capacity(n);
        tour.push(start);
        let mut unvisited: Vec<usize> = (0..n).filter(|&v| v != start).collect();
        let mut weights = Vec::with_capacity(unvisited.len());

        let mut current = start;
        while !unvisited.is_empty() {
            weights.clear();
            weights.extend(unvisited.iter().map(|&next| {
                pheromone.get(current, next).powf(self.config.alpha)
                    * self.visibility[current * n + next].powf(self.config.beta)
            }));
            let pick = roulette(&weights, rng);
            current = unvisited.remove(pick);
            tour.push(current);
        }
        tour
    }
}

/// Index drawn with probability proportional to its weight.
///
/// Falls back to a uniform draw when no weight is positive and finite.
/// Zero weights are never drawn otherwise.
fn roulette<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> usize {
    let usable = |w: f64| w.is_finite() && w > 0.0;
    let total: f64 = weights.iter().copied().filter(|&w| usable(w)).sum();
    if !(total.is_finite() && total > 0.0) {
        return rng.random_range(0..weights.len());
    }

    let target = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_usable = 0;
    for (idx, &w) in weights.iter().enumerate() {
        if !usable(w) {
            continue;
        }
        cumulative += w;
        last_usable = idx;
        if target < cumulative {
            return idx;
        }
    }
    last_usable
}
