use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use eframe::egui::{self, Align2, Area, CornerRadius, Frame, Id, Margin, Order, RichText, Stroke, pos2};
use egui_plot::{AxisHints, GridMark, HPlacement, Plot};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{PLOT_CONFIG, VIEW};
use crate::domain::DataPoint;
use crate::engine::ViewEvent;
use crate::models::{self, ScreenPoint, TooltipState, WindowStats};
use crate::ui::config::UI_CONFIG;
use crate::ui::plot_layers::{AverageLineLayer, HoverLayer, LayerContext, PlotLayer, SeriesLineLayer};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format_percentage;
use crate::utils::time_utils::date_to_axis_label;

/// Smallest Y span drawn; flat windows are widened to this around their value.
const MIN_Y_SPAN: f64 = 0.002;

/// Everything the plot needs that only changes with the visible window.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    window_hash: u64,
    /// `[index, value]`, one per visible point.
    pub points: Vec<[f64; 2]>,
    pub date_labels: Vec<String>,
    pub x_ticks: Vec<usize>,
    pub y_domain: (f64, f64),
    pub y_ticks: Vec<f64>,
}

impl ChartGeometry {
    pub fn from_visible(visible: &[DataPoint]) -> Self {
        let points = visible
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.value])
            .collect();
        let date_labels = visible.iter().map(|p| date_to_axis_label(&p.date)).collect();

        let (mut lo, mut hi) = models::y_domain(visible);
        if hi - lo < MIN_Y_SPAN {
            let mid = (lo + hi) / 2.0;
            lo = (mid - MIN_Y_SPAN / 2.0).max(0.0);
            hi = lo + MIN_Y_SPAN;
        }

        Self {
            window_hash: window_hash(visible),
            points,
            date_labels,
            x_ticks: models::x_tick_indices(visible.len()),
            y_domain: (lo, hi),
            y_ticks: models::y_ticks((lo, hi)),
        }
    }

    fn len(&self) -> usize {
        self.points.len()
    }

    pub fn x_max(&self) -> f64 {
        self.len().saturating_sub(1) as f64
    }

    /// Half a slot of slack each side, so every point owns the same hover span.
    pub fn x_bounds(&self) -> (f64, f64) {
        (-0.5, self.len().max(1) as f64 - 0.5)
    }
}

fn window_hash(visible: &[DataPoint]) -> u64 {
    let mut hasher = DefaultHasher::new();
    visible.len().hash(&mut hasher);
    for point in visible {
        point.timestamp.hash(&mut hasher);
        point.value.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

#[derive(Default)]
pub struct PlotView {
    cache: Option<ChartGeometry>,
    cache_hits: usize,
    cache_misses: usize,
}

impl PlotView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses
    }

    pub fn cache_hit_rate(&self) -> Option<f64> {
        let total = self.cache_hits + self.cache_misses;
        (total > 0).then(|| self.cache_hits as f64 / total as f64)
    }

    /// Geometry for `visible`, rebuilt only when the window contents change.
    pub fn geometry_for(&mut self, visible: &[DataPoint]) -> ChartGeometry {
        let hash = window_hash(visible);
        if let Some(cache) = &self.cache {
            if cache.window_hash == hash {
                self.cache_hits += 1;
                return cache.clone();
            }
        }

        self.cache_misses += 1;
        let geometry = ChartGeometry::from_visible(visible);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_plot_cache_stats {
            log::info!(
                "[plot cache] rebuilt for {} points (hits {}, misses {}, hit rate {:.2})",
                geometry.len(),
                self.cache_hits,
                self.cache_misses,
                self.cache_hit_rate().unwrap_or(0.0)
            );
        }

        self.cache = Some(geometry.clone());
        geometry
    }

    /// Draws the line chart for the visible window and reports pointer
    /// movement over it.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        visible: &[DataPoint],
        stats: &WindowStats,
        tooltip: &TooltipState,
    ) -> Vec<ViewEvent> {
        let geometry = self.geometry_for(visible);
        let (x_min, x_max) = geometry.x_bounds();
        let (y_min, y_max) = geometry.y_domain;

        let x_ticks = geometry.x_ticks.clone();
        let x_step = (models::x_tick_interval(geometry.len()) + 1) as f64;
        let y_ticks = geometry.y_ticks.clone();
        let y_step = (y_max - y_min) / (VIEW.y_tick_count.max(2) - 1) as f64;

        let response = Plot::new("margin_ratio_plot")
            .height(PLOT_CONFIG.chart_height)
            .show_background(false)
            .custom_x_axes(vec![create_x_axis(geometry.date_labels.clone())])
            .custom_y_axes(vec![create_y_axis()])
            // Suppress Defaults
            .label_formatter(|_, _| String::new())
            .show_x(false)
            .show_y(false)
            .x_grid_spacer(move |_input| {
                x_ticks
                    .iter()
                    .map(|&i| GridMark { value: i as f64, step_size: x_step })
                    .collect()
            })
            .y_grid_spacer(move |_input| {
                y_ticks
                    .iter()
                    .map(|&value| GridMark { value, step_size: y_step })
                    .collect()
            })
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_min..=x_max);
                plot_ui.set_plot_bounds_y(y_min..=y_max);

                let ctx = LayerContext {
                    geometry: &geometry,
                    stats,
                    tooltip,
                };

                // Back to front
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(AverageLineLayer),
                    Box::new(SeriesLineLayer),
                    Box::new(HoverLayer),
                ];
                for layer in layers {
                    layer.render(plot_ui, &ctx);
                }

                plot_ui.pointer_coordinate()
            });

        let mut events = Vec::new();
        match (response.inner, response.response.hover_pos()) {
            (Some(coordinate), Some(pos)) => events.push(ViewEvent::PointerMoved {
                plot_x: coordinate.x,
                screen: ScreenPoint::new(pos.x, pos.y),
            }),
            _ if tooltip.active => events.push(ViewEvent::PointerLeft),
            _ => {}
        }
        events
    }
}

/// Floating value box next to the hovered point.
pub fn show_tooltip(ctx: &egui::Context, tooltip: &TooltipState) {
    if !tooltip.active {
        return;
    }
    let Some(screen) = tooltip.screen_position else {
        return;
    };
    let (dx, dy) = VIEW.tooltip_offset;

    Area::new(Id::new("margin_ratio_tooltip"))
        .order(Order::Tooltip)
        .fixed_pos(pos2(screen.x + dx, screen.y + dy))
        .pivot(Align2::CENTER_TOP)
        .interactable(false)
        .show(ctx, |ui| {
            Frame::new()
                .fill(UI_CONFIG.colors.tooltip_fill)
                .stroke(Stroke::new(1.0, UI_CONFIG.colors.track))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(Margin::same(8))
                .show(ui, |ui| {
                    ui.label_subdued(&tooltip.date);
                    ui.horizontal(|ui| {
                        ui.label_subdued(UI_TEXT.tooltip_metric);
                        ui.label(
                            RichText::new(&tooltip.formatted_value)
                                .strong()
                                .color(UI_CONFIG.colors.accent),
                        );
                    });
                });
        });
}

fn create_x_axis(date_labels: Vec<String>) -> AxisHints<'static> {
    AxisHints::new_x().formatter(move |grid_mark, _range| {
        let index = grid_mark.value.round();
        if index < 0.0 {
            return String::new();
        }
        date_labels.get(index as usize).cloned().unwrap_or_default()
    })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| format_percentage(grid_mark.value))
        .placement(HPlacement::Left)
        .min_thickness(PLOT_CONFIG.y_axis_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                DataPoint::new(format!("2024-03-{:02}", i + 1), 1_709_251_200_000 + i as i64 * 86_400_000, v)
            })
            .collect()
    }

    #[test]
    fn geometry_follows_the_window() {
        let visible = window(&[0.04, 0.05, 0.06]);
        let geometry = ChartGeometry::from_visible(&visible);

        assert_eq!(geometry.points, vec![[0.0, 0.04], [1.0, 0.05], [2.0, 0.06]]);
        assert_eq!(geometry.date_labels, vec!["3/1", "3/2", "3/3"]);
        assert_eq!(geometry.y_domain, models::y_domain(&visible));
        assert_eq!(geometry.y_ticks.len(), VIEW.y_tick_count);
        assert_eq!(geometry.x_bounds(), (-0.5, 2.5));
        assert_eq!(geometry.x_max(), 2.0);
    }

    #[test]
    fn flat_window_gets_a_drawable_span() {
        let geometry = ChartGeometry::from_visible(&window(&[0.05, 0.05, 0.05]));
        let (lo, hi) = geometry.y_domain;
        assert!(hi - lo >= MIN_Y_SPAN - 1e-12);
        assert!(lo <= 0.05 && 0.05 <= hi);
    }

    #[test]
    fn geometry_is_cached_per_window() {
        let mut view = PlotView::new();
        let first = window(&[0.04, 0.05, 0.06]);

        let a = view.geometry_for(&first);
        let b = view.geometry_for(&first);
        assert_eq!(a, b);
        assert_eq!((view.cache_hits(), view.cache_misses()), (1, 1));

        view.geometry_for(&first[1..]);
        assert_eq!(view.cache_misses(), 2);
        assert_eq!(view.cache_hit_rate(), Some(1.0 / 3.0));

        view.geometry_for(&first);
        assert_eq!(view.cache_misses(), 3);
    }
}
