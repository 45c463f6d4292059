//! Time-windowed route evaluator.
//!
//! # Algorithm
//!
//! Walks the route with a clock that starts at the trip start. For each leg:
//!
//! 1. Advance the clock by the travel duration.
//! 2. If the arrival is past the daily closing time and another trip day
//!    remains, move the clock to the next day's opening time and charge a
//!    day-skip penalty. If no day remains, or the arrival is past the trip
//!    end, charge the overrun penalty and stop evaluating.
//! 3. Look up the destination's opening window for the arrival weekday.
//!    An arrival outside it (or at a venue without usable hours) is charged
//!    the closed-venue penalty; otherwise the venue's rating is collected.
//! 4. Spend the visit duration at the destination.
//!
//! The route is an open path: the first stop is the starting point and
//! earns neither penalty nor reward.

use serde::{Deserialize, Serialize};

use super::cache::ScheduleCache;
use super::params::EvaluationParams;
use crate::distance::TravelMatrix;
use crate::error::{ItineraryError, Result};
use crate::models::{clock_of, day_of, validate_route, weekday_of, TripWindow, Venue};

/// Cost breakdown of one evaluated route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Scalar objective, lower is better.
    pub cost: f64,
    /// Minutes spent travelling between stops.
    pub travel_minutes: f64,
    /// Minutes spent at destinations.
    pub visit_minutes: f64,
    /// Sum of all penalties charged.
    pub penalty: f64,
    /// Sum of ratings collected at open venues.
    pub reward: f64,
    /// Number of times the clock moved to the next day.
    pub day_skips: usize,
    /// Number of arrivals outside opening hours.
    pub closed_arrivals: usize,
    /// `true` if evaluation stopped at the end of the trip.
    pub overrun: bool,
    /// Number of destinations reached before evaluation stopped.
    pub stops_evaluated: usize,
}

impl Evaluation {
    /// Travel plus visit minutes.
    pub fn elapsed_minutes(&self) -> f64 {
        self.travel_minutes + self.visit_minutes
    }
}

/// Evaluates routes against venue hours and the trip window.
///
/// One evaluator is one evaluation context: it owns the memo of resolved
/// opening windows and should live no longer than a single search call.
///
/// # Examples
///
/// ```
/// use u_itinerary::distance::{DistanceMatrix, TravelMatrix};
/// use u_itinerary::evaluation::{EvaluationParams, PenaltyWeights, RouteEvaluator};
/// use u_itinerary::models::{instant, TripWindow, Venue, WeeklyHours};
///
/// let travel = TravelMatrix::uniform(
///     DistanceMatrix::from_rows(&[vec![0.0, 10.0], vec![10.0, 0.0]]).unwrap(),
/// );
/// let venues: Vec<Venue> = (0..2)
///     .map(|i| Venue::new(i, format!("v{i}"), 4.0).unwrap()
///         .with_weekly_hours(WeeklyHours::always_open()))
///     .collect();
/// let trip = TripWindow::new(instant(0, 1080.0), instant(0, 1380.0)).unwrap();
/// let params = EvaluationParams::default().with_beta(0.0).with_visit_minutes(30.0);
///
/// let mut evaluator = RouteEvaluator::new(&travel, &venues, trip, params).unwrap();
/// let eval = evaluator.evaluate(&[0, 1]).unwrap();
/// assert!((eval.cost - 40.0).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    travel: &'a TravelMatrix,
    venues: &'a [Venue],
    trip: TripWindow,
    params: EvaluationParams,
    cache: ScheduleCache,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem data.
    ///
    /// Fails if the venue catalog and the matrices differ in size.
    pub fn new(
        travel: &'a TravelMatrix,
        venues: &'a [Venue],
        trip: TripWindow,
        params: EvaluationParams,
    ) -> Result<Self> {
        if venues.len() != travel.size() {
            return Err(ItineraryError::DimensionMismatch {
                expected: travel.size(),
                found: venues.len(),
            });
        }
        Ok(Self {
            travel,
            venues,
            trip,
            params,
            cache: ScheduleCache::new(),
        })
    }

    /// Objective parameters in use.
    pub fn params(&self) -> &EvaluationParams {
        &self.params
    }

    /// Number of venues known to this evaluator.
    pub fn num_venues(&self) -> usize {
        self.venues.len()
    }

    /// Validates the route and evaluates it.
    pub fn evaluate(&mut self, route: &[usize]) -> Result<Evaluation> {
        validate_route(route, self.venues.len())?;
        Ok(self.evaluate_unchecked(route))
    }

    /// Scalar cost of a route already known to be valid.
    pub(crate) fn cost(&mut self, route: &[usize]) -> f64 {
        self.evaluate_unchecked(route).cost
    }

    /// Evaluates a route without validating it.
    ///
    /// Routes with fewer than two stops evaluate to the zero sentinel.
    pub(crate) fn evaluate_unchecked(&mut self, route: &[usize]) -> Evaluation {
        let mut eval = Evaluation::default();
        if route.len() <= 1 {
            return eval;
        }

        let penalties = self.params.penalties;
        let durations = self.travel.duration();
        let last_day = self.trip.last_day();
        let mut clock = self.trip.start();

        for leg in route.windows(2) {
            let (from, to) = (leg[0], leg[1]);
            let travel = durations.get(from, to);
            eval.travel_minutes += travel;
            let mut arrival = clock + travel;

            let day = day_of(arrival);
            if arrival > self.trip.closing_on(day) && day <= last_day {
                if day < last_day {
                    arrival = self.trip.opening_on(day + 1);
                    eval.penalty += penalties.day_skip;
                    eval.day_skips += 1;
                } else {
                    eval.penalty += penalties.overrun;
                    eval.overrun = true;
                    break;
                }
            }
            if arrival > self.trip.end() {
                eval.penalty += penalties.overrun;
                eval.overrun = true;
                break;
            }

            let venue = &self.venues[to];
            let arrival_clock = clock_of(arrival);
            match self.cache.window(self.venues, to, weekday_of(arrival)) {
                Some(window) if window.contains(arrival_clock) => {
                    eval.reward += venue.rating();
                }
                Some(window) => {
                    match (
                        penalties.early_arrival_per_minute,
                        window.minutes_early(arrival_clock),
                    ) {
                        (Some(rate), Some(minutes)) => eval.penalty += rate * minutes,
                        _ => eval.penalty += penalties.closed_venue,
                    }
                    eval.closed_arrivals += 1;
                }
                None => {
                    eval.penalty += penalties.closed_venue;
                    eval.closed_arrivals += 1;
                }
            }

            eval.visit_minutes += self.params.visit_minutes;
            clock = arrival + self.params.visit_minutes;
            eval.stops_evaluated += 1;
        }

        eval.cost = self.params.alpha * eval.elapsed_minutes() + eval.penalty
            - self.params.beta * eval.reward;
        eval
    }
}

/// Evaluates a single route with a fresh evaluation context.
///
/// Convenience wrapper around [`RouteEvaluator`]; searches that evaluate
/// many routes should keep one evaluator for the whole call.
pub fn evaluate_route(
    route: &[usize],
    travel: &TravelMatrix,
    venues: &[Venue],
    trip: TripWindow,
    params: EvaluationParams,
) -> Result<Evaluation> {
    RouteEvaluator::new(travel, venues, trip, params)?.evaluate(route)
}
