//! Trip time window spanning one or more days.

use serde::{Deserialize, Serialize};

use super::venue::{DAYS_PER_WEEK, MINUTES_PER_DAY};

/// Absolute instant, in minutes since the reference Monday at midnight.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{instant, weekday_of, clock_of};
///
/// let friday_evening = instant(4, 18.0 * 60.0);
/// assert_eq!(weekday_of(friday_evening), 4);
/// assert!((clock_of(friday_evening) - 1080.0).abs() < 1e-10);
/// ```
pub fn instant(day: u32, clock: f64) -> f64 {
    f64::from(day) * MINUTES_PER_DAY + clock
}

/// Day number of an instant (0 = the reference Monday).
pub fn day_of(t: f64) -> i64 {
    (t / MINUTES_PER_DAY).floor() as i64
}

/// Weekday of an instant, 0 (Monday) through 6 (Sunday).
pub fn weekday_of(t: f64) -> usize {
    day_of(t).rem_euclid(DAYS_PER_WEEK as i64) as usize
}

/// Clock time of an instant, in minutes from midnight.
pub fn clock_of(t: f64) -> f64 {
    t.rem_euclid(MINUTES_PER_DAY)
}

/// The overall trip window.
///
/// The trip runs from `start` to `end` (absolute instants). On every day in
/// between, stops are only scheduled within the daily sub-window
/// `[day_open, day_close]`; the evaluator skips to the next day's opening
/// time once a day's closing time is passed.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{instant, TripWindow};
///
/// // Friday 18:00 to Sunday 23:00, 18:00–23:00 each evening.
/// let trip = TripWindow::new(instant(4, 1080.0), instant(6, 1380.0)).unwrap();
/// assert_eq!(trip.day_open(), 1080.0);
/// assert_eq!(trip.day_close(), 1380.0);
/// assert_eq!(trip.num_days(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TripWindow {
    start: f64,
    end: f64,
    day_open: f64,
    day_close: f64,
}

impl TripWindow {
    /// Creates a trip window whose daily sub-window runs from the clock time
    /// of `start` to the clock time of `end`.
    ///
    /// When `end` falls earlier in the day than `start` (a trip that ends
    /// after midnight, or in the afternoon after an evening start), the
    /// daily sub-window runs from the clock time of `start` to midnight and
    /// the trip end alone bounds the last day.
    ///
    /// Returns `None` if either instant is non-finite or `end < start`.
    pub fn new(start: f64, end: f64) -> Option<Self> {
        if !start.is_finite() || !end.is_finite() || end < start {
            return None;
        }
        let day_open = clock_of(start);
        let day_close = match clock_of(end) {
            close if close < day_open => MINUTES_PER_DAY,
            close => close,
        };
        Some(Self {
            start,
            end,
            day_open,
            day_close,
        })
    }

    /// Overrides the daily sub-window.
    ///
    /// Returns `None` unless `0 <= open <= close <= 1440`.
    pub fn with_daily_window(mut self, open: f64, close: f64) -> Option<Self> {
        if !(open.is_finite() && close.is_finite())
            || open < 0.0
            || close > MINUTES_PER_DAY
            || open > close
        {
            return None;
        }
        self.day_open = open;
        self.day_close = close;
        Some(self)
    }

    /// Trip start instant.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Trip end instant.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Daily opening clock time.
    pub fn day_open(&self) -> f64 {
        self.day_open
    }

    /// Daily closing clock time.
    pub fn day_close(&self) -> f64 {
        self.day_close
    }

    /// First day of the trip.
    pub fn first_day(&self) -> i64 {
        day_of(self.start)
    }

    /// Last day of the trip.
    pub fn last_day(&self) -> i64 {
        day_of(self.end)
    }

    /// Number of calendar days touched by the trip.
    pub fn num_days(&self) -> usize {
        (self.last_day() - self.first_day() + 1) as usize
    }

    /// Closing instant of the given day.
    pub fn closing_on(&self, day: i64) -> f64 {
        day as f64 * MINUTES_PER_DAY + self.day_close
    }

    /// Opening instant of the given day.
    pub fn opening_on(&self, day: i64) -> f64 {
        day as f64 * MINUTES_PER_DAY + self.day_open
    }
}
