use crate::config::VIEW;
use crate::domain::DataPoint;
use crate::utils::maths_utils;

/// Summary figures for the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    pub latest: f64,
    pub average: f64,
    pub max: f64,
    pub min: f64,
    /// Relative change from the first visible point to the latest one.
    /// `None` when the first value is zero (no meaningful base).
    pub change_from_start: Option<f64>,
}

impl WindowStats {
    /// `None` for an empty window; the stat tiles are hidden then.
    pub fn from_points(visible: &[DataPoint]) -> Option<Self> {
        let (first, last) = (visible.first()?, visible.last()?);
        let values: Vec<f64> = visible.iter().map(|p| p.value).collect();
        let (min, max) = maths_utils::get_min_max(&values);

        let change = (last.value - first.value) / first.value;
        let change_from_start = (first.value != 0.0 && change.is_finite()).then_some(change);

        Some(Self {
            latest: last.value,
            average: maths_utils::mean(&values),
            max,
            min,
            change_from_start,
        })
    }
}

/// Y axis bounds: the value range padded by `VIEW.y_padding_pct` on both
/// sides, never below zero.
pub fn y_domain(visible: &[DataPoint]) -> (f64, f64) {
    if visible.is_empty() {
        return VIEW.empty_y_domain;
    }
    let values: Vec<f64> = visible.iter().map(|p| p.value).collect();
    let (min, max) = maths_utils::get_min_max(&values);
    let padding = (max - min) * VIEW.y_padding_pct;
    ((min - padding).max(0.0), max + padding)
}

/// Number of unlabelled points between two labelled X ticks.
pub fn x_tick_interval(len: usize) -> usize {
    len / VIEW.x_tick_divisions
}

/// Indices (into the visible window) that get an X axis label.
pub fn x_tick_indices(len: usize) -> Vec<usize> {
    let step = x_tick_interval(len) + 1;
    (0..len).step_by(step).collect()
}

/// Evenly spaced Y tick values over the domain.
pub fn y_ticks(domain: (f64, f64)) -> Vec<f64> {
    maths_utils::linspace(domain.0, domain.1, VIEW.y_tick_count)
}
