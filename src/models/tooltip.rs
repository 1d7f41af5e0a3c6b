use crate::domain::DataPoint;
use crate::utils::format_percentage;

/// Pointer position in screen coordinates (egui points).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Hover tooltip content. Deactivating keeps the last content so the box
/// doesn't flicker empty while fading out.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub active: bool,
    pub date: String,
    pub value: f64,
    pub formatted_value: String,
    pub screen_position: Option<ScreenPoint>,
    /// Index of the hovered point within the visible window.
    pub visible_index: Option<usize>,
}

impl TooltipState {
    /// Points the tooltip at `point`, shown at `screen`.
    pub fn activate(&mut self, visible_index: usize, point: &DataPoint, screen: ScreenPoint) {
        self.active = true;
        self.date = point.date.clone();
        self.value = point.value;
        self.formatted_value = format_percentage(point.value);
        self.screen_position = Some(screen);
        self.visible_index = Some(visible_index);
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Resolves the visible point nearest to plot X coordinate `x`, where point
/// `i` of the window sits at `x == i`. `None` outside the plotted span.
pub fn nearest_visible_index(x: f64, len: usize) -> Option<usize> {
    if len == 0 || !x.is_finite() {
        return None;
    }
    if x < -0.5 || x > len as f64 - 0.5 {
        return None;
    }
    let index = x.round().max(0.0) as usize;
    Some(index.min(len - 1))
}
