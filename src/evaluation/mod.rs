//! Route objectives.
//!
//! - [`RouteEvaluator`] — time-windowed, penalized itinerary cost
//! - [`tour_cost`] / [`path_cost`] — pure-distance tour and path length
//!
//! The two objectives share the route representation but are kept apart:
//! only the evaluator knows about opening hours and trip days.

mod cache;
mod evaluator;
mod params;
mod tour;

pub use cache::ScheduleCache;
pub use evaluator::{evaluate_route, Evaluation, RouteEvaluator};
pub use params::{EvaluationParams, PenaltyWeights};
pub use tour::{path_cost, tour_cost};
