use crate::data::FeedError;
use crate::domain::{DataPoint, TimeRange};
use crate::models::{RangeModel, TooltipState, WindowStats};

/// Where the initial fetch stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    /// Terminal: there is no retry.
    Failed(FeedError),
    Ready,
}

/// The single owned state record behind the view.
/// Only [`crate::engine::reduce`] mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub phase: LoadPhase,
    pub range_model: RangeModel,
    pub tooltip: TooltipState,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    pub fn error(&self) -> Option<&FeedError> {
        match &self.phase {
            LoadPhase::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// True once data arrived and there is at least one point to show.
    pub fn has_data(&self) -> bool {
        self.phase == LoadPhase::Ready && !self.range_model.is_empty()
    }

    pub fn visible(&self) -> &[DataPoint] {
        self.range_model.visible()
    }

    pub fn range(&self) -> Option<TimeRange> {
        self.range_model.range()
    }

    /// Aggregates for the stat tiles; `None` whenever tiles should be hidden.
    pub fn stats(&self) -> Option<WindowStats> {
        if !self.has_data() {
            return None;
        }
        WindowStats::from_points(self.visible())
    }
}
