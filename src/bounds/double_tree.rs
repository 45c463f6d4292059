//! Double-tree tour (Bellmore–Nemhauser upper bound).
//!
//! # Algorithm
//!
//! 1. Build a minimum spanning tree
//! 2. Duplicate every tree edge so each vertex has even degree
//! 3. Walk an Eulerian circuit from vertex 0 (Hierholzer)
//! 4. Shortcut vertices already visited
//!
//! Under the triangle inequality the tour costs at most twice the tree
//! weight. The bound is not checked at run time.
//!
//! # Reference
//!
//! Rosenkrantz, D. J., Stearns, R. E. & Lewis, P. M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM J. Comput.*
//! 6(3), 563-581.

use serde::{Deserialize, Serialize};

use super::kruskal::{minimum_spanning_tree, SpanningTree};
use crate::distance::DistanceMatrix;
use crate::evaluation::tour_cost;

/// Result of the double-tree heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleTreeResult {
    /// Closed tour visiting every vertex once, starting at 0.
    pub tour: Vec<usize>,
    /// Closed-tour cost.
    pub cost: f64,
    /// Weight of the spanning tree the tour was built from.
    pub mst_cost: f64,
}

impl DoubleTreeResult {
    /// `cost / mst_cost`, or `None` when the tree weight is zero.
    pub fn approximation_ratio(&self) -> Option<f64> {
        (self.mst_cost > 0.0).then(|| self.cost / self.mst_cost)
    }
}

/// Builds a tour by shortcutting the doubled minimum spanning tree.
///
/// # Examples
///
/// ```
/// use u_itinerary::bounds::double_tree_tour;
/// use u_itinerary::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0, 3.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![3.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let result = double_tree_tour(&dm);
/// assert_eq!(result.tour, vec![0, 1, 2, 3]);
/// assert!((result.cost - 6.0).abs() < 1e-10);
/// assert!((result.mst_cost - 3.0).abs() < 1e-10);
/// ```
pub fn double_tree_tour(distances: &DistanceMatrix) -> DoubleTreeResult {
    let tree = minimum_spanning_tree(distances);
    let circuit = euler_circuit(&tree);
    let tour = shortcut(&circuit, tree.num_vertices());
    DoubleTreeResult {
        cost: tour_cost(&tour, distances),
        mst_cost: tree.total_weight(),
        tour,
    }
}

/// Eulerian circuit of the doubled tree, starting and ending at vertex 0.
fn euler_circuit(tree: &SpanningTree) -> Vec<usize> {
    if tree.num_vertices() == 0 {
        return Vec::new();
    }

    let mut adj: Vec<Vec<usize>> = tree
        .adjacency()
        .into_iter()
        .map(|neighbors| neighbors.into_iter().flat_map(|u| [u, u]).collect())
        .collect();

    let mut stack = vec![0];
    let mut circuit = Vec::with_capacity(2 * tree.edges().len() + 1);
    while let Some(&v) = stack.last() {
        match adj[v].pop() {
            Some(u) => {
                if let Some(pos) = adj[u].iter().position(|&w| w == v) {
                    adj[u].remove(pos);
                }
                stack.push(u);
            }
            None => {
                circuit.push(v);
                stack.pop();
            }
        }
    }
    circuit.reverse();
    circuit
}

/// First occurrence of every vertex, in circuit order.
fn shortcut(circuit: &[usize], n: usize) -> Vec<usize> {
    let mut seen = vec![false; n];
    let mut tour = Vec::with_capacity(n);
    for &v in circuit {
        if !seen[v] {
            seen[v] = true;
            tour.push(v);
        }
    }
    tour
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn euclidean(points: &[(f64, f64)]) -> DistanceMatrix {
        let n = points.len();
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                dm.set(i, j, (dx * dx + dy * dy).sqrt());
            }
        }
        dm
    }

    #[test]
    fn test_circuit_uses_every_edge_twice() {
        let dm = euclidean(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (5.0, 5.0)]);
        let tree = minimum_spanning_tree(&dm);
        let circuit = euler_circuit(&tree);
        assert_eq!(circuit.len(), 2 * tree.edges().len() + 1);
        assert_eq!(circuit.first(), Some(&0));
        assert_eq!(circuit.last(), Some(&0));
    }

    #[test]
    fn test_circuit_visits_match_tree_degrees() {
        let dm = euclidean(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (4.0, 0.0),
            (2.0, 3.0),
            (2.0, -3.0),
            (6.0, 1.0),
        ]);
        let tree = minimum_spanning_tree(&dm);
        let circuit = euler_circuit(&tree);
        let degrees = tree.degrees();
        for (v, &degree) in degrees.iter().enumerate() {
            let visits = circuit.iter().filter(|&&w| w == v).count();
            let expected = if v == 0 { degree + 1 } else { degree };
            assert_eq!(visits, expected, "vertex {v}");
        }
        for pair in circuit.windows(2) {
            assert!(tree.adjacency()[pair[0]].contains(&pair[1]));
        }
    }

    #[test]
    fn test_trivial_sizes() {
        let empty = double_tree_tour(&DistanceMatrix::new(0));
        assert!(empty.tour.is_empty());
        assert_eq!(empty.cost, 0.0);
        assert_eq!(empty.approximation_ratio(), None);

        let single = double_tree_tour(&DistanceMatrix::new(1));
        assert_eq!(single.tour, vec![0]);
        assert_eq!(single.cost, 0.0);
    }

    #[test]
    fn test_reference_instance() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ])
        .expect("square");
        let result = double_tree_tour(&dm);
        assert_eq!(result.tour[0], 0);
        let mut sorted = result.tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
        assert!((result.mst_cost - 12.0).abs() < 1e-10);
        assert!((result.cost - tour_cost(&result.tour, &dm)).abs() < 1e-10);
    }

    proptest! {
        #[test]
        fn prop_within_twice_mst(
            points in proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), 2..12),
        ) {
            let dm = euclidean(&points);
            let result = double_tree_tour(&dm);
            prop_assert_eq!(result.tour.len(), points.len());
            prop_assert!(result.cost <= 2.0 * result.mst_cost + 1e-9);
            prop_assert!(result.cost + 1e-9 >= result.mst_cost);
        }
    }
}
