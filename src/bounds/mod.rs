//! Lower and upper bounds for closed tours.
//!
//! - [`minimum_spanning_tree`] — Kruskal with union-find; the tree weight
//!   bounds any tour from below
//! - [`double_tree_tour`] — shortcut Eulerian circuit of the doubled tree;
//!   at most twice the tree weight on metric instances
//! - [`compare_to_bound`] — gap of a tour above the tree weight

mod double_tree;
mod kruskal;
mod union_find;

pub use double_tree::{double_tree_tour, DoubleTreeResult};
pub use kruskal::{minimum_spanning_tree, Edge, SpanningTree};
pub use union_find::UnionFind;

use serde::{Deserialize, Serialize};

/// Quality band of a tour relative to the spanning-tree lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourQuality {
    /// Less than 20 % above the bound.
    Excellent,
    /// Less than 40 % above the bound.
    Good,
    /// 40 % or more above the bound.
    Fair,
}

/// A tour cost measured against a spanning-tree weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundComparison {
    /// `tour_cost − mst_cost`.
    pub gap: f64,
    /// Gap as a percentage of `mst_cost`; zero when `mst_cost` is not positive.
    pub gap_percent: f64,
    /// Band of `gap_percent`.
    pub quality: TourQuality,
}

/// Measures how far `tour_cost` sits above the lower bound `mst_cost`.
///
/// # Examples
///
/// ```
/// use u_itinerary::bounds::{compare_to_bound, TourQuality};
///
/// let cmp = compare_to_bound(13.0, 10.0);
/// assert!((cmp.gap - 3.0).abs() < 1e-12);
/// assert!((cmp.gap_percent - 30.0).abs() < 1e-9);
/// assert_eq!(cmp.quality, TourQuality::Good);
/// ```
pub fn compare_to_bound(tour_cost: f64, mst_cost: f64) -> BoundComparison {
    let gap = tour_cost - mst_cost;
    let gap_percent = if mst_cost > 0.0 {
        gap / mst_cost * 100.0
    } else {
        0.0
    };
    let quality = if gap_percent < 20.0 {
        TourQuality::Excellent
    } else if gap_percent < 40.0 {
        TourQuality::Good
    } else {
        TourQuality::Fair
    };
    BoundComparison {
        gap,
        gap_percent,
        quality,
    }
}
