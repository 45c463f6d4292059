//! Venue, opening window, and weekly schedule types.

use serde::{Deserialize, Serialize};

/// Minutes in one day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Days in one week. Weekday indices run 0 (Monday) through 6 (Sunday).
pub const DAYS_PER_WEEK: usize = 7;

/// Opening hours for a single day, as minutes from midnight.
///
/// A window whose `close` is earlier than its `open` spans midnight: the
/// venue opens in the evening and closes in the early hours of the next day.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::OpeningWindow;
///
/// let evening = OpeningWindow::new(18.0 * 60.0, 23.0 * 60.0).unwrap();
/// assert!(evening.contains(20.0 * 60.0));
/// assert!(!evening.contains(12.0 * 60.0));
///
/// let late = OpeningWindow::new(20.0 * 60.0, 2.0 * 60.0).unwrap();
/// assert!(late.spans_midnight());
/// assert!(late.contains(60.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpeningWindow {
    open: f64,
    close: f64,
}

impl OpeningWindow {
    /// Creates a new opening window.
    ///
    /// Returns `None` if either bound is non-finite or outside `[0, 1440]`.
    pub fn new(open: f64, close: f64) -> Option<Self> {
        let valid = |t: f64| t.is_finite() && (0.0..=MINUTES_PER_DAY).contains(&t);
        if !valid(open) || !valid(close) {
            return None;
        }
        Some(Self { open, close })
    }

    /// A window covering the whole day.
    pub fn all_day() -> Self {
        Self {
            open: 0.0,
            close: MINUTES_PER_DAY,
        }
    }

    /// Opening clock time.
    pub fn open(&self) -> f64 {
        self.open
    }

    /// Closing clock time.
    pub fn close(&self) -> f64 {
        self.close
    }

    /// Returns `true` if the window closes after midnight.
    pub fn spans_midnight(&self) -> bool {
        self.close < self.open
    }

    /// Returns `true` if the given clock time falls within this window.
    pub fn contains(&self, clock: f64) -> bool {
        if self.spans_midnight() {
            clock >= self.open || clock <= self.close
        } else {
            clock >= self.open && clock <= self.close
        }
    }

    /// Minutes until opening if `clock` is before the window opens.
    ///
    /// `None` when the venue is open or has already closed for the day.
    pub fn minutes_early(&self, clock: f64) -> Option<f64> {
        if !self.contains(clock) && clock < self.open {
            Some(self.open - clock)
        } else {
            None
        }
    }

    /// Returns `true` if the venue is open at any point of `[from, to]`.
    pub fn overlaps(&self, from: f64, to: f64) -> bool {
        if self.spans_midnight() {
            to >= self.open || from <= self.close
        } else {
            !(to < self.open || from > self.close)
        }
    }
}

/// Raw opening hours for each weekday, as handed over by the data loader.
///
/// Entries are stored unvalidated: a loader that could not parse a value
/// may pass `NaN` or an out-of-range number, which the evaluator treats the
/// same as a missing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHours {
    days: [Option<(f64, f64)>; DAYS_PER_WEEK],
}

impl WeeklyHours {
    /// A schedule with no opening hours on any day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open around the clock on every day.
    pub fn always_open() -> Self {
        Self {
            days: [Some((0.0, MINUTES_PER_DAY)); DAYS_PER_WEEK],
        }
    }

    /// Sets the raw hours for a weekday. Indices wrap modulo seven.
    pub fn set(&mut self, weekday: usize, open: f64, close: f64) {
        self.days[weekday % DAYS_PER_WEEK] = Some((open, close));
    }

    /// Clears the hours for a weekday.
    pub fn clear(&mut self, weekday: usize) {
        self.days[weekday % DAYS_PER_WEEK] = None;
    }

    /// Raw hours for a weekday, if any were supplied.
    pub fn raw(&self, weekday: usize) -> Option<(f64, f64)> {
        self.days[weekday % DAYS_PER_WEEK]
    }

    /// Validated window for a weekday; `None` if missing or malformed.
    pub fn window(&self, weekday: usize) -> Option<OpeningWindow> {
        self.raw(weekday)
            .and_then(|(open, close)| OpeningWindow::new(open, close))
    }
}

/// A venue that can be placed on an itinerary.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::Venue;
///
/// let v = Venue::new(0, "Bar do Zé", 4.5)
///     .unwrap()
///     .with_hours(4, 18.0 * 60.0, 23.5 * 60.0);
/// assert_eq!(v.index(), 0);
/// assert!(v.hours().window(4).is_some());
/// assert!(v.hours().window(0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    index: usize,
    name: String,
    hours: WeeklyHours,
    rating: f64,
}

impl Venue {
    /// Highest allowed rating.
    pub const MAX_RATING: f64 = 5.0;

    /// Creates a venue with no opening hours.
    ///
    /// Returns `None` if `rating` is not within `[0, 5]`.
    pub fn new(index: usize, name: impl Into<String>, rating: f64) -> Option<Self> {
        if !(0.0..=Self::MAX_RATING).contains(&rating) {
            return None;
        }
        Some(Self {
            index,
            name: name.into(),
            hours: WeeklyHours::new(),
            rating,
        })
    }

    /// Sets the raw hours for one weekday.
    pub fn with_hours(mut self, weekday: usize, open: f64, close: f64) -> Self {
        self.hours.set(weekday, open, close);
        self
    }

    /// Replaces the whole weekly schedule.
    pub fn with_weekly_hours(mut self, hours: WeeklyHours) -> Self {
        self.hours = hours;
        self
    }

    /// Identifier supplied by the data loader, normally the venue's position
    /// in the catalog and matrices.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Weekly opening hours.
    pub fn hours(&self) -> &WeeklyHours {
        &self.hours
    }

    /// Quality rating in `[0, 5]`.
    pub fn rating(&self) -> f64 {
        self.rating
    }
}

/// Pre-selection of candidate venues before optimization.
///
/// # Examples
///
/// ```
/// use u_itinerary::models::{Venue, VenueFilter};
///
/// let venues = vec![
///     Venue::new(0, "A", 4.8).unwrap().with_hours(5, 1080.0, 1380.0),
///     Venue::new(1, "B", 3.0).unwrap().with_hours(5, 1080.0, 1380.0),
///     Venue::new(2, "C", 4.9).unwrap().with_hours(5, 600.0, 900.0),
/// ];
/// let filter = VenueFilter::default()
///     .with_min_rating(4.0)
///     .with_open_during(5, 1140.0, 1320.0);
/// assert_eq!(filter.apply(&venues), vec![0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VenueFilter {
    /// Minimum rating a venue must have.
    pub min_rating: f64,
    /// Weekday and clock interval during which the venue must be open.
    pub open_during: Option<(usize, f64, f64)>,
}

impl VenueFilter {
    /// Sets the minimum rating.
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Requires the venue to be open at some point of `[from, to]` on `weekday`.
    pub fn with_open_during(mut self, weekday: usize, from: f64, to: f64) -> Self {
        self.open_during = Some((weekday, from, to));
        self
    }

    /// Returns `true` if the venue passes every criterion.
    pub fn accepts(&self, venue: &Venue) -> bool {
        if venue.rating() < self.min_rating {
            return false;
        }
        match self.open_during {
            Some((weekday, from, to)) => venue
                .hours()
                .window(weekday)
                .is_some_and(|w| w.overlaps(from, to)),
            None => true,
        }
    }

    /// Positions in `venues` of the accepted venues, in catalog order.
    ///
    /// Positions are what routes and the evaluator index by, whatever
    /// [`Venue::index`] each entry carries.
    pub fn apply(&self, venues: &[Venue]) -> Vec<usize> {
        venues
            .iter()
            .enumerate()
            .filter(|(_, v)| self.accepts(v))
            .map(|(position, _)| position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_window_valid() {
        let w = OpeningWindow::new(600.0, 1200.0).expect("valid");
        assert_eq!(w.open(), 600.0);
        assert_eq!(w.close(), 1200.0);
        assert!(!w.spans_midnight());
    }

    #[test]
    fn test_opening_window_invalid() {
        assert!(OpeningWindow::new(f64::NAN, 100.0).is_none());
        assert!(OpeningWindow::new(-1.0, 100.0).is_none());
        assert!(OpeningWindow::new(100.0, 1500.0).is_none());
        assert!(OpeningWindow::new(100.0, f64::INFINITY).is_none());
    }

    #[test]
    fn test_opening_window_contains() {
        let w = OpeningWindow::new(600.0, 1200.0).expect("valid");
        assert!(w.contains(600.0));
        assert!(w.contains(900.0));
        assert!(w.contains(1200.0));
        assert!(!w.contains(599.0));
        assert!(!w.contains(1201.0));
    }

    #[test]
    fn test_overnight_window() {
        let w = OpeningWindow::new(1200.0, 120.0).expect("valid");
        assert!(w.spans_midnight());
        assert!(w.contains(1300.0));
        assert!(w.contains(60.0));
        assert!(!w.contains(600.0));
        assert!((w.minutes_early(1000.0).expect("early") - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_minutes_early() {
        let w = OpeningWindow::new(600.0, 1200.0).expect("valid");
        assert!((w.minutes_early(540.0).expect("early") - 60.0).abs() < 1e-10);
        assert!(w.minutes_early(700.0).is_none());
        assert!(w.minutes_early(1300.0).is_none());
    }

    #[test]
    fn test_overlaps() {
        let w = OpeningWindow::new(1080.0, 1380.0).expect("valid");
        assert!(w.overlaps(1000.0, 1100.0));
        assert!(w.overlaps(1300.0, 1400.0));
        assert!(!w.overlaps(600.0, 900.0));
    }

    #[test]
    fn test_weekly_hours_malformed_is_missing() {
        let mut hours = WeeklyHours::new();
        hours.set(2, f64::NAN, 1200.0);
        assert!(hours.raw(2).is_some());
        assert!(hours.window(2).is_none());
        assert!(hours.window(3).is_none());
    }

    #[test]
    fn test_weekly_hours_always_open() {
        let hours = WeeklyHours::always_open();
        for day in 0..DAYS_PER_WEEK {
            assert_eq!(hours.window(day), Some(OpeningWindow::all_day()));
        }
    }

    #[test]
    fn test_venue_rating_range() {
        assert!(Venue::new(0, "x", 5.0).is_some());
        assert!(Venue::new(0, "x", 0.0).is_some());
        assert!(Venue::new(0, "x", 5.1).is_none());
        assert!(Venue::new(0, "x", -0.1).is_none());
        assert!(Venue::new(0, "x", f64::NAN).is_none());
    }

    #[test]
    fn test_filter_defaults_accept_all() {
        let venues = vec![
            Venue::new(0, "a", 1.0).expect("valid"),
            Venue::new(1, "b", 0.0).expect("valid"),
        ];
        assert_eq!(VenueFilter::default().apply(&venues), vec![0, 1]);
    }

    #[test]
    fn test_filter_returns_positions() {
        let venues = vec![
            Venue::new(40, "a", 2.0).expect("valid"),
            Venue::new(17, "b", 4.5).expect("valid"),
            Venue::new(3, "c", 4.0).expect("valid"),
        ];
        let filter = VenueFilter::default().with_min_rating(4.0);
        let picked = filter.apply(&venues);
        assert_eq!(picked, vec![1, 2]);
        for &position in &picked {
            assert!(filter.accepts(&venues[position]));
        }
    }

    #[test]
    fn test_filter_requires_hours_on_day() {
        let venues = vec![
            Venue::new(0, "a", 4.0)
                .expect("valid")
                .with_hours(1, 600.0, 1200.0),
            Venue::new(1, "b", 4.0).expect("valid"),
        ];
        let filter = VenueFilter::default().with_open_during(1, 700.0, 800.0);
        assert_eq!(filter.apply(&venues), vec![0]);
    }
}
