//! Dense distance and travel-time matrices.

use serde::{Deserialize, Serialize};

use crate::error::{ItineraryError, Result};

/// A dense n×n matrix stored in row-major order.
///
/// Used both for travel distance and for travel duration (minutes). Entries
/// are expected to be non-negative with a zero diagonal; the bounding
/// algorithms additionally assume symmetry and the triangle inequality.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 4.0],
///     vec![8.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a `size`×`size` matrix of zeros.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Wraps row-major `data`.
    ///
    /// Returns `None` unless `data` holds exactly `size * size` entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Returns `None` if the rows do not form a square grid.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Some(Self { data, size })
    }

    /// Entry for the leg `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Overwrites the entry for the leg `from → to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of venues.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` for a 0×0 matrix.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns `true` if every leg costs the same both ways, within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Cheapest candidate to reach from `from`.
    ///
    /// Ties resolve to the earliest candidate. Returns `None` if `candidates`
    /// is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }
}

/// Paired distance and duration matrices over the same venues.
///
/// The tabu search walks the clock with `duration`; the pure-distance
/// algorithms (ant colony, spanning-tree bounds) read `distance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelMatrix {
    distance: DistanceMatrix,
    duration: DistanceMatrix,
}

impl TravelMatrix {
    /// Pairs a distance matrix with a duration matrix of the same size.
    pub fn new(distance: DistanceMatrix, duration: DistanceMatrix) -> Result<Self> {
        if distance.size() != duration.size() {
            return Err(ItineraryError::DimensionMismatch {
                expected: distance.size(),
                found: duration.size(),
            });
        }
        Ok(Self { distance, duration })
    }

    /// Uses one matrix for both distance and duration.
    pub fn uniform(matrix: DistanceMatrix) -> Self {
        Self {
            duration: matrix.clone(),
            distance: matrix,
        }
    }

    /// Travel distance matrix.
    pub fn distance(&self) -> &DistanceMatrix {
        &self.distance
    }

    /// Travel duration matrix, in minutes.
    pub fn duration(&self) -> &DistanceMatrix {
        &self.duration
    }

    /// Number of venues covered.
    pub fn size(&self) -> usize {
        self.distance.size()
    }
}
