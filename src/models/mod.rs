//! Domain model types for itinerary planning.
//!
//! Venues with weekly opening hours and a rating, the multi-day trip window,
//! and validated routes over venue indices.

mod route;
mod trip;
mod venue;

pub use route::{validate_route, Route};
pub use trip::{clock_of, day_of, instant, weekday_of, TripWindow};
pub use venue::{
    OpeningWindow, Venue, VenueFilter, WeeklyHours, DAYS_PER_WEEK, MINUTES_PER_DAY,
};
