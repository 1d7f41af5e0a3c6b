use crate::data::FeedError;
use crate::domain::{DataPoint, TimeRange};
use crate::models::ScreenPoint;

/// Everything that can change the view state.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The initial fetch finished, one way or the other.
    DataLoaded(Result<Vec<DataPoint>, FeedError>),
    /// The range control submitted a new window.
    RangeChanged(TimeRange),
    /// Pointer over the plot. `plot_x` is in plot coordinates, `screen` is
    /// where to anchor the tooltip.
    PointerMoved { plot_x: f64, screen: ScreenPoint },
    PointerLeft,
}
