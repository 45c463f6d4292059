//! # u-itinerary
//!
//! Multi-day venue itinerary optimization: order a set of venues so that
//! travel time stays low, highly rated venues are reached while open, and
//! the whole route fits inside the trip window.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Venue, WeeklyHours, TripWindow, Route)
//! - [`distance`] — Distance and travel time matrices
//! - [`evaluation`] — Penalized itinerary objective and closed-tour cost
//! - [`constructive`] — Nearest-neighbor and multi-start initial routes
//! - [`local_search`] — Route neighborhoods (2-opt, swap, insert)
//! - [`tabu`] — Tabu Search over itineraries and closed tours
//! - [`aco`] — Ant Colony Optimization for closed tours
//! - [`bounds`] — Spanning-tree lower bound and double-tree upper bound
//!
//! ## Time model
//!
//! Instants are minutes since a reference Monday 00:00. Day `d` covers
//! `[1440·d, 1440·(d+1))` and its weekday is `d mod 7`, Monday first.
//!
//! ## Errors
//!
//! Malformed input (invalid routes, mismatched matrix sizes, an out-of-range
//! start vertex) is reported as [`ItineraryError`]. Closed venues and late
//! arrivals are never errors; they are priced into the objective.

pub mod aco;
pub mod bounds;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod tabu;

pub use error::{ItineraryError, Result};
