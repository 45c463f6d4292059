//! Tabu Search over route neighborhoods.
//!
//! A single-solution trajectory metaheuristic that uses a short-term memory
//! of applied moves (the tabu list) to avoid cycling back to recently left
//! routes, with an aspiration criterion that lifts the ban for moves
//! producing a new global best.
//!
//! - [`run_tabu_search`] — time-windowed itinerary objective
//! - [`run_tour_tabu_search`] — pure-distance closed-tour objective
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod list;
mod runner;
mod types;

pub use config::TabuConfig;
pub use list::TabuList;
pub use runner::TabuRunner;
pub use types::{ItineraryObjective, TabuObjective, TabuResult, TabuTracePoint, TourObjective};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constructive::multi_start_nearest_neighbor;
use crate::distance::{DistanceMatrix, TravelMatrix};
use crate::error::{ItineraryError, Result};
use crate::evaluation::{tour_cost, EvaluationParams, RouteEvaluator};
use crate::models::{Route, TripWindow, Venue};

/// Creates the run's random source from `config.seed`.
fn seeded_rng(config: &TabuConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Optimizes a venue itinerary under opening hours and the trip window.
///
/// Starts from `initial`, or from the best nearest-neighbor ordering of the
/// same venues when `config.use_smart_initial` is set, and improves it with
/// tabu search over the configured neighborhood. Every candidate is
/// re-evaluated in full.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::{DistanceMatrix, TravelMatrix};
/// use u_itinerary::models::{instant, TripWindow, Venue, WeeklyHours};
/// use u_itinerary::tabu::{run_tabu_search, TabuConfig};
///
/// let travel = TravelMatrix::uniform(
///     DistanceMatrix::from_rows(&[
///         vec![0.0, 10.0, 25.0],
///         vec![10.0, 0.0, 12.0],
///         vec![25.0, 12.0, 0.0],
///     ])
///     .unwrap(),
/// );
/// let venues: Vec<Venue> = (0..3)
///     .map(|i| Venue::new(i, format!("bar {i}"), 4.0).unwrap()
///         .with_weekly_hours(WeeklyHours::always_open()))
///     .collect();
/// let trip = TripWindow::new(instant(4, 1080.0), instant(4, 1380.0)).unwrap();
/// let config = TabuConfig::default().with_seed(1);
///
/// let result = run_tabu_search(&[0, 2, 1], &travel, &venues, trip, 30.0, &config).unwrap();
/// assert!(result.best_cost <= result.initial_cost);
/// ```
pub fn run_tabu_search(
    initial: &[usize],
    travel: &TravelMatrix,
    venues: &[Venue],
    trip: TripWindow,
    visit_minutes: f64,
    config: &TabuConfig,
) -> Result<TabuResult> {
    let mut rng = seeded_rng(config);
    run_tabu_search_with_rng(initial, travel, venues, trip, visit_minutes, config, &mut rng)
}

/// [`run_tabu_search`] with a caller-supplied random source.
#[tracing::instrument(level = "debug", skip_all, fields(stops = initial.len()))]
pub fn run_tabu_search_with_rng<R: Rng + ?Sized>(
    initial: &[usize],
    travel: &TravelMatrix,
    venues: &[Venue],
    trip: TripWindow,
    visit_minutes: f64,
    config: &TabuConfig,
    rng: &mut R,
) -> Result<TabuResult> {
    let params = EvaluationParams {
        alpha: config.alpha,
        beta: config.beta,
        visit_minutes,
        penalties: config.penalties,
    };
    let mut evaluator = RouteEvaluator::new(travel, venues, trip, params)?;
    let initial = Route::new(initial.to_vec(), venues.len())?;

    let start = if config.use_smart_initial {
        multi_start_nearest_neighbor(
            initial.stops(),
            travel.duration(),
            config.smart_starts,
            rng,
            |route| evaluator.cost(route),
        )
        .map(|(route, _)| route)
        .unwrap_or_else(|| initial.into_stops())
    } else {
        initial.into_stops()
    };

    let mut objective = ItineraryObjective::new(evaluator);
    Ok(TabuRunner::run(&mut objective, start, config))
}

/// Optimizes a closed tour over `distances` by tabu search.
///
/// Ignores opening hours, ratings, and the time weights of `config`. 2-opt
/// candidates are costed incrementally when the matrix is symmetric.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::DistanceMatrix;
/// use u_itinerary::tabu::{run_tour_tabu_search, TabuConfig};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 1.0, 2.0, 1.0],
///     vec![1.0, 0.0, 1.0, 2.0],
///     vec![2.0, 1.0, 0.0, 1.0],
///     vec![1.0, 2.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let config = TabuConfig::default().with_smart_initial(false);
/// let result = run_tour_tabu_search(&[0, 2, 1, 3], &dm, &config).unwrap();
/// assert!((result.best_cost - 4.0).abs() < 1e-10);
/// ```
pub fn run_tour_tabu_search(
    initial: &[usize],
    distances: &DistanceMatrix,
    config: &TabuConfig,
) -> Result<TabuResult> {
    let mut rng = seeded_rng(config);
    run_tour_tabu_search_with_rng(initial, distances, config, &mut rng)
}

/// [`run_tour_tabu_search`] with a caller-supplied random source.
#[tracing::instrument(level = "debug", skip_all, fields(stops = initial.len()))]
pub fn run_tour_tabu_search_with_rng<R: Rng + ?Sized>(
    initial: &[usize],
    distances: &DistanceMatrix,
    config: &TabuConfig,
    rng: &mut R,
) -> Result<TabuResult> {
    if distances.is_empty() {
        return Err(ItineraryError::EmptyMatrix);
    }
    let initial = Route::new(initial.to_vec(), distances.size())?;

    let start = if config.use_smart_initial {
        multi_start_nearest_neighbor(
            initial.stops(),
            distances,
            config.smart_starts,
            rng,
            |route| tour_cost(route, distances),
        )
        .map(|(route, _)| route)
        .unwrap_or_else(|| initial.into_stops())
    } else {
        initial.into_stops()
    };

    let mut objective = TourObjective::new(distances);
    Ok(TabuRunner::run(&mut objective, start, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::minimum_spanning_tree;
    use crate::local_search::Neighborhood;
    use crate::models::{instant, WeeklyHours};
    use proptest::prelude::*;

    fn reference_matrix() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ])
        .expect("square")
    }

    fn open_venues(n: usize) -> Vec<Venue> {
        (0..n)
            .map(|i| {
                Venue::new(i, format!("venue {i}"), 5.0)
                    .expect("valid")
                    .with_weekly_hours(WeeklyHours::always_open())
            })
            .collect()
    }

    fn whole_day() -> TripWindow {
        TripWindow::new(instant(0, 0.0), instant(0, 1439.0)).expect("valid")
    }

    #[test]
    fn test_reference_instance_within_bounds() {
        let dm = reference_matrix();
        let travel = TravelMatrix::uniform(dm.clone());
        let venues = open_venues(4);
        let config = TabuConfig::default()
            .with_alpha(1.0)
            .with_beta(0.0)
            .with_smart_initial(false)
            .with_seed(3);

        let result = run_tabu_search(&[0, 1, 2, 3], &travel, &venues, whole_day(), 30.0, &config)
            .expect("valid input");

        let identity = tour_cost(&[0, 1, 2, 3], &dm);
        let found = tour_cost(&result.best_route, &dm);
        let mst = minimum_spanning_tree(&dm);
        assert!(found <= identity + 1e-10);
        assert!(found <= 2.0 * mst.total_weight() + 1e-10);
        assert!(result.best_cost <= result.initial_cost);
    }

    #[test]
    fn test_smart_initial_never_worse_than_start() {
        let travel = TravelMatrix::uniform(reference_matrix());
        let venues = open_venues(4);
        let config = TabuConfig::default().with_seed(11);
        let result = run_tabu_search(&[3, 1, 0, 2], &travel, &venues, whole_day(), 30.0, &config)
            .expect("valid input");
        assert!(result.best_cost <= result.initial_cost);
        let mut stops = result.best_route.clone();
        stops.sort_unstable();
        assert_eq!(stops, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_smart_initial_keeps_subset() {
        let travel = TravelMatrix::uniform(reference_matrix());
        let venues = open_venues(4);
        let config = TabuConfig::default().with_seed(5);
        let result = run_tabu_search(&[2, 0, 3], &travel, &venues, whole_day(), 30.0, &config)
            .expect("valid input");
        let mut stops = result.best_route.clone();
        stops.sort_unstable();
        assert_eq!(stops, vec![0, 2, 3]);
    }

    #[test]
    fn test_invalid_initial_route() {
        let travel = TravelMatrix::uniform(reference_matrix());
        let venues = open_venues(4);
        let config = TabuConfig::default().with_seed(1);
        assert_eq!(
            run_tabu_search(&[0, 1, 1], &travel, &venues, whole_day(), 30.0, &config),
            Err(ItineraryError::DuplicateVenue { index: 1 })
        );
        assert_eq!(
            run_tour_tabu_search(&[], &reference_matrix(), &config),
            Err(ItineraryError::EmptyRoute)
        );
    }

    #[test]
    fn test_initial_route_checked_like_route() {
        let travel = TravelMatrix::uniform(reference_matrix());
        let venues = open_venues(4);
        let config = TabuConfig::default().with_seed(1);
        for stops in [vec![], vec![2, 0, 2], vec![0, 4]] {
            let expected = Route::new(stops.clone(), 4).err();
            assert!(expected.is_some());
            assert_eq!(
                run_tabu_search(&stops, &travel, &venues, whole_day(), 30.0, &config).err(),
                expected
            );
            assert_eq!(
                run_tour_tabu_search(&stops, &reference_matrix(), &config).err(),
                expected
            );
        }
    }

    #[test]
    fn test_venue_count_mismatch() {
        let travel = TravelMatrix::uniform(reference_matrix());
        let venues = open_venues(3);
        let config = TabuConfig::default().with_seed(1);
        assert_eq!(
            run_tabu_search(&[0, 1], &travel, &venues, whole_day(), 30.0, &config),
            Err(ItineraryError::DimensionMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_closed_venue_pushed_later() {
        // Venue 3 opens at 01:00; arriving there first costs a closed penalty.
        let travel = TravelMatrix::uniform(
            DistanceMatrix::from_rows(&[
                vec![0.0, 20.0, 20.0, 5.0],
                vec![20.0, 0.0, 20.0, 20.0],
                vec![20.0, 20.0, 0.0, 20.0],
                vec![5.0, 20.0, 20.0, 0.0],
            ])
            .expect("square"),
        );
        let mut venues = open_venues(4);
        venues[3] = Venue::new(3, "late", 5.0)
            .expect("valid")
            .with_hours(0, 60.0, 1439.0);
        let config = TabuConfig::default()
            .with_beta(0.0)
            .with_smart_initial(false)
            .with_seed(2);
        let result = run_tabu_search(&[0, 3, 1, 2], &travel, &venues, whole_day(), 30.0, &config)
            .expect("valid input");
        assert!(result.initial_cost >= 1000.0);
        assert!(result.best_cost < 1000.0);
    }

    #[test]
    fn test_tour_search_extended_neighborhood() {
        let dm = DistanceMatrix::from_rows(&[
            vec![0.0, 3.0, 4.0, 2.0, 7.0],
            vec![3.0, 0.0, 4.0, 6.0, 3.0],
            vec![4.0, 4.0, 0.0, 5.0, 8.0],
            vec![2.0, 6.0, 5.0, 0.0, 6.0],
            vec![7.0, 3.0, 8.0, 6.0, 0.0],
        ])
        .expect("square");
        let config = TabuConfig::default()
            .with_smart_initial(false)
            .with_neighborhood(Neighborhood::Extended)
            .with_max_iterations(200);
        let result = run_tour_tabu_search(&[0, 4, 2, 1, 3], &dm, &config).expect("valid");
        // Optimal tour 0-2-1-4-3-0 (or its reverse) has length 4 + 4 + 3 + 6 + 2 = 19.
        assert!((result.best_cost - 19.0).abs() < 1e-9);
    }

    fn metric_points(n: usize) -> impl Strategy<Value = DistanceMatrix> {
        proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), n).prop_map(|pts| {
            let n = pts.len();
            let mut dm = DistanceMatrix::new(n);
            for i in 0..n {
                for j in 0..n {
                    let (dx, dy) = (pts[i].0 - pts[j].0, pts[i].1 - pts[j].1);
                    dm.set(i, j, (dx * dx + dy * dy).sqrt());
                }
            }
            dm
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_tour_search_never_worse(dm in metric_points(8), seed in 0u64..1000) {
            let config = TabuConfig::default()
                .with_seed(seed)
                .with_max_iterations(30);
            let initial: Vec<usize> = (0..8).collect();
            let result = run_tour_tabu_search(&initial, &dm, &config).expect("valid");
            prop_assert!(result.best_cost <= result.initial_cost + 1e-9);
            prop_assert!((result.best_cost - tour_cost(&result.best_route, &dm)).abs() < 1e-9);
        }

        #[test]
        fn prop_itinerary_search_never_worse(dm in metric_points(6), seed in 0u64..1000) {
            let travel = TravelMatrix::uniform(dm);
            let venues = open_venues(6);
            let config = TabuConfig::default()
                .with_seed(seed)
                .with_max_iterations(20);
            let initial: Vec<usize> = (0..6).collect();
            let result = run_tabu_search(&initial, &travel, &venues, whole_day(), 30.0, &config)
                .expect("valid");
            prop_assert!(result.best_cost <= result.initial_cost);
        }
    }
}
