//! Pheromone trail storage.

use serde::{Deserialize, Serialize};

/// Symmetric N×N pheromone levels, row-major.
///
/// Levels never go negative: evaporation scales by a factor in `[0, 1]`
/// and deposits of non-positive or non-finite amounts are ignored.
///
/// # Examples
///
/// ```
/// use u_itinerary::aco::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(3, 0.1);
/// tau.evaporate(0.5);
/// tau.deposit_tour(&[0, 1, 2], 1.0);
/// assert!((tau.get(0, 1) - 1.05).abs() < 1e-12);
/// assert!((tau.get(1, 0) - 1.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneMatrix {
    size: usize,
    levels: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates a matrix with every entry set to `initial` (clamped at zero).
    pub fn new(size: usize, initial: f64) -> Self {
        let level = if initial.is_finite() { initial.max(0.0) } else { 0.0 };
        Self {
            size,
            levels: vec![level; size * size],
        }
    }

    /// Pheromone on edge `from → to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.levels[from * self.size + to]
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every level by `1 − rate`.
    ///
    /// `rate` is clamped to `[0, 1]`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = (1.0 - rate).clamp(0.0, 1.0);
        for level in &mut self.levels {
            *level *= keep;
        }
    }

    /// Adds `amount` to both directions of every edge of the closed tour.
    pub fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        if !(amount.is_finite() && amount > 0.0) {
            return;
        }
        let n = tour.len();
        for k in 0..n {
            let (a, b) = (tour[k], tour[(k + 1) % n]);
            self.levels[a * self.size + b] += amount;
            self.levels[b * self.size + a] += amount;
        }
    }

    /// Smallest stored level, or `None` for an empty matrix.
    pub fn min_level(&self) -> Option<f64> {
        self.levels.iter().copied().min_by(f64::total_cmp)
    }
}
