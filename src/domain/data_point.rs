use crate::utils::time_utils::epoch_ms_to_local_date;

/// One daily observation of the margin ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Epoch milliseconds
    pub timestamp: i64,
    /// Margin balance / float market cap, as a ratio (0.05 == 5%)
    pub value: f64,
}

impl DataPoint {
    pub fn new(date: impl Into<String>, timestamp: i64, value: f64) -> Self {
        Self {
            date: date.into(),
            timestamp,
            value,
        }
    }

    /// Builds a point whose date is derived from the timestamp.
    pub fn from_timestamp(timestamp: i64, value: f64) -> Self {
        Self::new(epoch_ms_to_local_date(timestamp), timestamp, value)
    }
}

/// Sorts ascending by timestamp and keeps only the last point seen for each date.
pub fn normalize_series(mut points: Vec<DataPoint>) -> Vec<DataPoint> {
    points.sort_by_key(|p| p.timestamp);
    let mut out: Vec<DataPoint> = Vec::with_capacity(points.len());
    for point in points {
        match out.last_mut() {
            Some(last) if last.date == point.date => *last = point,
            _ => out.push(point),
        }
    }
    out
}
