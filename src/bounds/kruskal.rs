//! Minimum spanning tree by Kruskal's algorithm.
//!
//! The tree weight is a lower bound on any closed tour over the same
//! vertices: removing one edge from a tour leaves a spanning path.
//!
//! # Complexity
//!
//! O(n² log n) for the n(n−1)/2 candidate edges.

use serde::{Deserialize, Serialize};

use super::union_find::UnionFind;
use crate::distance::DistanceMatrix;

/// An undirected weighted edge, `from < to`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Lower endpoint.
    pub from: usize,
    /// Higher endpoint.
    pub to: usize,
    /// Edge weight.
    pub weight: f64,
}

/// Edges of a minimum spanning tree, in the order they were accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanningTree {
    vertices: usize,
    edges: Vec<Edge>,
    total_weight: f64,
}

impl SpanningTree {
    /// Tree edges, lightest first.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of the edge weights.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Number of vertices spanned.
    pub fn num_vertices(&self) -> usize {
        self.vertices
    }

    /// Tree degree of every vertex.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertices];
        for edge in &self.edges {
            degrees[edge.from] += 1;
            degrees[edge.to] += 1;
        }
        degrees
    }

    /// Adjacency lists of the tree.
    pub fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.vertices];
        for edge in &self.edges {
            adj[edge.from].push(edge.to);
            adj[edge.to].push(edge.from);
        }
        adj
    }
}

/// Computes a minimum spanning tree of the complete graph over `distances`.
///
/// Reads the upper triangle only; asymmetric matrices are treated through
/// `d[i][j]` with `i < j`. Equal weights keep row-major order.
///
/// # Examples
///
/// ```
/// use u_itinerary::bounds::minimum_spanning_tree;
/// use u_itinerary::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 9.0, 10.0],
///     vec![1.0, 0.0, 6.0, 4.0],
///     vec![15.0, 7.0, 0.0, 8.0],
///     vec![6.0, 3.0, 12.0, 0.0],
/// ])
/// .unwrap();
/// let mst = minimum_spanning_tree(&dm);
/// assert_eq!(mst.edges().len(), 3);
/// assert!((mst.total_weight() - 12.0).abs() < 1e-10);
/// ```
pub fn minimum_spanning_tree(distances: &DistanceMatrix) -> SpanningTree {
    let n = distances.size();
    let mut candidates = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for from in 0..n {
        for to in (from + 1)..n {
            candidates.push(Edge {
                from,
                to,
                weight: distances.get(from, to),
            });
        }
    }
    candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut uf = UnionFind::new(n);
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;
    for edge in candidates {
        if edges.len() + 1 >= n {
            break;
        }
        if uf.union(edge.from, edge.to) {
            total_weight += edge.weight;
            edges.push(edge);
        }
    }

    SpanningTree {
        vertices: n,
        edges,
        total_weight,
    }
}
