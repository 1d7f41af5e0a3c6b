use crate::config::VIEW;

/// Inclusive `[start_index, end_index]` window over the full series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimeRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl TimeRange {
    pub fn new(start_index: usize, end_index: usize) -> Self {
        Self {
            start_index,
            end_index,
        }
    }

    /// The window shown when data first arrives: the last
    /// `VIEW.default_window_points` points, or everything if there are fewer.
    /// `None` for an empty series.
    pub fn initial(len: usize) -> Option<Self> {
        Self::trailing(len, VIEW.default_window_points)
    }

    pub fn trailing(len: usize, window: usize) -> Option<Self> {
        if len == 0 || window == 0 {
            return None;
        }
        let end_index = len - 1;
        let start_index = end_index.saturating_sub(window - 1);
        Some(Self::new(start_index, end_index))
    }

    /// Number of points (trading days) covered, both ends included.
    pub fn day_count(&self) -> usize {
        self.end_index.saturating_sub(self.start_index) + 1
    }

    pub fn is_ordered(&self) -> bool {
        self.start_index <= self.end_index
    }

    /// Ordered and both ends inside a series of `len` points.
    pub fn fits(&self, len: usize) -> bool {
        self.is_ordered() && self.end_index < len
    }
}
