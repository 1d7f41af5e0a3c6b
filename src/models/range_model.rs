#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{DataPoint, TimeRange};

/// The full series plus the window currently selected over it.
///
/// The visible slice is always derived from `points` and `range` on read,
/// so there is nothing to keep in sync when either changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeModel {
    points: Vec<DataPoint>,
    range: Option<TimeRange>,
}

impl RangeModel {
    /// Starts on the trailing default window (see [`TimeRange::initial`]).
    pub fn new(points: Vec<DataPoint>) -> Self {
        let range = TimeRange::initial(points.len());
        Self { points, range }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `None` only when the series is empty.
    pub fn range(&self) -> Option<TimeRange> {
        self.range
    }

    /// `points[start..=end]`, or an empty slice when there is no data.
    pub fn visible(&self) -> &[DataPoint] {
        match self.range {
            Some(r) if r.fits(self.points.len()) => &self.points[r.start_index..=r.end_index],
            _ => &[],
        }
    }

    /// Replaces the window wholesale. Ranges that are unordered or reach past
    /// the series are refused and the current window is kept.
    /// Returns whether the window changed.
    pub fn set_range(&mut self, new_range: TimeRange) -> bool {
        if !new_range.fits(self.points.len()) {
            log::warn!(
                "Ignoring range {}..={} for a series of {} points",
                new_range.start_index,
                new_range.end_index,
                self.points.len()
            );
            return false;
        }
        if self.range == Some(new_range) {
            return false;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_range_changes {
            log::info!(
                "[range] {:?} -> {}..={} ({} days)",
                self.range,
                new_range.start_index,
                new_range.end_index,
                new_range.day_count()
            );
        }

        self.range = Some(new_range);
        true
    }
}
