//! Objective weights and penalty magnitudes.

use serde::{Deserialize, Serialize};

/// Penalty magnitudes charged by the time-windowed evaluator.
///
/// Each weight is independent. The two ways of charging an early arrival
/// are both supported: by default every arrival outside opening hours costs
/// the flat `closed_venue` amount; setting `early_arrival_per_minute`
/// charges early arrivals per minute of waiting instead.
///
/// # Examples
///
/// ```
/// use u_itinerary::evaluation::PenaltyWeights;
///
/// let p = PenaltyWeights::default().with_early_arrival_per_minute(2.0);
/// assert_eq!(p.closed_venue, 1000.0);
/// assert_eq!(p.early_arrival_per_minute, Some(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    /// Charged once each time the clock is moved to the next day's opening.
    pub day_skip: f64,
    /// Charged for an arrival at a closed venue or one without usable hours.
    pub closed_venue: f64,
    /// Charged once when the route runs past the end of the trip.
    pub overrun: f64,
    /// Per-minute charge for arriving before opening, replacing `closed_venue`
    /// for early arrivals when set.
    pub early_arrival_per_minute: Option<f64>,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            day_skip: 100.0,
            closed_venue: 1000.0,
            overrun: 5000.0,
            early_arrival_per_minute: None,
        }
    }
}

impl PenaltyWeights {
    /// All penalties set to zero.
    pub fn zero() -> Self {
        Self {
            day_skip: 0.0,
            closed_venue: 0.0,
            overrun: 0.0,
            early_arrival_per_minute: None,
        }
    }

    /// Sets the day-skip penalty.
    pub fn with_day_skip(mut self, penalty: f64) -> Self {
        self.day_skip = penalty;
        self
    }

    /// Sets the closed-venue penalty.
    pub fn with_closed_venue(mut self, penalty: f64) -> Self {
        self.closed_venue = penalty;
        self
    }

    /// Sets the trip-overrun penalty.
    pub fn with_overrun(mut self, penalty: f64) -> Self {
        self.overrun = penalty;
        self
    }

    /// Charges early arrivals per minute of waiting.
    pub fn with_early_arrival_per_minute(mut self, rate: f64) -> Self {
        self.early_arrival_per_minute = Some(rate);
        self
    }
}

/// Parameters of the time-windowed objective.
///
/// `cost = alpha * (travel + visit minutes) + penalties - beta * ratings`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationParams {
    /// Weight of elapsed travel and visit time.
    pub alpha: f64,
    /// Weight of collected venue ratings.
    pub beta: f64,
    /// Time spent at each destination, in minutes.
    pub visit_minutes: f64,
    /// Penalty magnitudes.
    pub penalties: PenaltyWeights,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 20.0,
            visit_minutes: 30.0,
            penalties: PenaltyWeights::default(),
        }
    }
}

impl EvaluationParams {
    /// Sets the time weight.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the rating weight.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the visit duration.
    pub fn with_visit_minutes(mut self, minutes: f64) -> Self {
        self.visit_minutes = minutes;
        self
    }

    /// Sets the penalty magnitudes.
    pub fn with_penalties(mut self, penalties: PenaltyWeights) -> Self {
        self.penalties = penalties;
        self
    }
}
