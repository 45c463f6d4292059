//! Per-evaluator memo of resolved opening windows.

use std::collections::HashMap;

use crate::models::{OpeningWindow, Venue};

/// Resolved opening windows keyed by (venue, weekday).
///
/// Owned by a single [`RouteEvaluator`](super::RouteEvaluator) and dropped
/// with it. A missing or malformed entry resolves to `None` and is cached
/// like any other.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    windows: HashMap<(usize, usize), Option<OpeningWindow>>,
}

impl ScheduleCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening window of `venue` on `weekday`, resolving it on first use.
    pub fn window(
        &mut self,
        venues: &[Venue],
        venue: usize,
        weekday: usize,
    ) -> Option<OpeningWindow> {
        *self
            .windows
            .entry((venue, weekday))
            .or_insert_with(|| venues.get(venue).and_then(|v| v.hours().window(weekday)))
    }

    /// Number of resolved entries.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns `true` if nothing has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
