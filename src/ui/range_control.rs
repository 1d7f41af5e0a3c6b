use eframe::egui::{Align, Layout, Rect, Sense, Stroke, Ui, pos2, vec2};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::{DataPoint, TimeRange};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::Panel;

/// Which end of the window a drag is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeHandle {
    Start,
    End,
}

/// Dual-handle slider over the full series. Emits the complete new window
/// whenever a drag moves either handle.
pub struct RangeControl<'a> {
    points: &'a [DataPoint],
    range: TimeRange,
}

impl<'a> RangeControl<'a> {
    pub fn new(points: &'a [DataPoint], range: TimeRange) -> Self {
        Self { points, range }
    }

    fn render_dates(&self, ui: &mut Ui) {
        let Some((start, end)) = boundary_dates(self.points, self.range) else {
            return;
        };
        ui.horizontal(|ui| {
            ui.label_subdued(start);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label_subdued(end);
            });
        });
    }

    fn render_track(&self, ui: &mut Ui) -> Option<TimeRange> {
        let n = self.points.len();
        let radius = UI_CONFIG.range_handle_radius;
        let (rect, response) = ui.allocate_exact_size(
            vec2(ui.available_width(), UI_CONFIG.range_control_height),
            Sense::click_and_drag(),
        );
        let track = Rect::from_min_max(
            pos2(rect.left() + radius, rect.center().y - 2.0),
            pos2(rect.right() - radius, rect.center().y + 2.0),
        );
        let fraction_at = |x: f32| ((x - track.left()) / track.width().max(1.0)) as f64;
        let x_of = |index: usize| track.left() + track.width() * index_fraction(index, n) as f32;

        let mut changed = None;
        let drag_id = response.id;
        if let Some(pointer) = response.interact_pointer_pos() {
            let index = index_at_fraction(fraction_at(pointer.x), n);
            let stored = ui.data(|d| d.get_temp::<RangeHandle>(drag_id));
            let handle = stored.unwrap_or_else(|| nearest_handle(self.range, index));
            // A collapsed window only knows which handle to move once the pointer leaves it.
            if stored.is_none() && (self.range.start_index != self.range.end_index || index != self.range.start_index) {
                ui.data_mut(|d| d.insert_temp(drag_id, handle));
            }
            let next = drag_to(self.range, handle, index);
            if next != self.range {
                changed = Some(next);
            }
        }
        if !response.is_pointer_button_down_on() {
            ui.data_mut(|d| d.remove::<RangeHandle>(drag_id));
        }

        let painter = ui.painter_at(rect.expand(radius));
        let rounding = 2.0;
        painter.rect_filled(track, rounding, UI_CONFIG.colors.track);

        let (start_x, end_x) = (x_of(self.range.start_index), x_of(self.range.end_index));
        let selected = Rect::from_min_max(pos2(start_x, track.top()), pos2(end_x, track.bottom()));
        painter.rect_filled(selected, rounding, UI_CONFIG.colors.track_selected);

        let handle_stroke = Stroke::new(2.0, UI_CONFIG.colors.accent);
        for x in [start_x, end_x] {
            painter.circle(pos2(x, track.center().y), radius, UI_CONFIG.colors.handle_fill, handle_stroke);
        }

        changed
    }
}

impl Panel for RangeControl<'_> {
    type Event = TimeRange;

    fn render(&mut self, ui: &mut Ui) -> Vec<TimeRange> {
        let mut events = Vec::new();
        if self.points.is_empty() {
            return events;
        }

        self.render_dates(ui);
        if let Some(next) = self.render_track(ui) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_range_changes {
                log::info!("[range control] drag -> {}..={}", next.start_index, next.end_index);
            }
            events.push(next);
        }
        ui.horizontal(|ui| {
            ui.label_subdued(UI_TEXT.range_hint);
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label_subdued(format!("{}{}", self.range.day_count(), UI_TEXT.trading_days_suffix));
            });
        });
        events
    }
}

/// Dates under the two handles.
pub fn boundary_dates(points: &[DataPoint], range: TimeRange) -> Option<(&str, &str)> {
    let start = points.get(range.start_index)?;
    let end = points.get(range.end_index)?;
    Some((start.date.as_str(), end.date.as_str()))
}

/// Position of `index` along the track, in `[0, 1]`.
pub fn index_fraction(index: usize, len: usize) -> f64 {
    if len <= 1 {
        return 0.0;
    }
    index.min(len - 1) as f64 / (len - 1) as f64
}

/// Series index under a track position, snapping to the nearest point.
pub fn index_at_fraction(fraction: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
    (fraction * (len - 1) as f64).round() as usize
}

/// The handle a press at `index` grabs. Ties go to the start handle.
pub fn nearest_handle(range: TimeRange, index: usize) -> RangeHandle {
    if index <= range.start_index {
        RangeHandle::Start
    } else if index >= range.end_index {
        RangeHandle::End
    } else if index - range.start_index <= range.end_index - index {
        RangeHandle::Start
    } else {
        RangeHandle::End
    }
}

/// Moves one handle to `index`. Handles stop at each other rather than cross.
pub fn drag_to(range: TimeRange, handle: RangeHandle, index: usize) -> TimeRange {
    match handle {
        RangeHandle::Start => TimeRange::new(index.min(range.end_index), range.end_index),
        RangeHandle::End => TimeRange::new(range.start_index, index.max(range.start_index)),
    }
}
