use eframe::egui::{Align2, RichText};
use egui_plot::{HLine, LineStyle, Line, MarkerShape, PlotPoint, PlotPoints, PlotUi, Points, Text, VLine};

use crate::config::PLOT_CONFIG;
use crate::models::{TooltipState, WindowStats};
use crate::ui::ui_plot_view::ChartGeometry;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::format_percentage;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub geometry: &'a ChartGeometry,
    pub stats: &'a WindowStats,
    pub tooltip: &'a TooltipState,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. SERIES LAYER
// ============================================================================
pub struct SeriesLineLayer;

impl PlotLayer for SeriesLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let line = Line::new(UI_TEXT.series_name, PlotPoints::new(ctx.geometry.points.clone()))
            .color(PLOT_CONFIG.line_color)
            .width(PLOT_CONFIG.line_width);
        plot_ui.line(line);
    }
}

// ============================================================================
// 2. AVERAGE REFERENCE LAYER
// ============================================================================
pub struct AverageLineLayer;

impl PlotLayer for AverageLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let average = ctx.stats.average;
        let label = format!("{}{}", UI_TEXT.average_label_prefix, format_percentage(average));

        plot_ui.hline(
            HLine::new(&label, average)
                .color(PLOT_CONFIG.average_line_color)
                .width(PLOT_CONFIG.average_line_width)
                .style(LineStyle::dashed_loose()),
        );

        // Label sits at the right edge, just above the line.
        let anchor = PlotPoint::new(ctx.geometry.x_max(), average);
        plot_ui.text(
            Text::new(
                &label,
                anchor,
                RichText::new(&label).small().color(PLOT_CONFIG.average_label_color),
            )
            .anchor(Align2::RIGHT_BOTTOM),
        );
    }
}

// ============================================================================
// 3. HOVER LAYER (cursor + active dot)
// ============================================================================
pub struct HoverLayer;

impl PlotLayer for HoverLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if !ctx.tooltip.active {
            return;
        }
        let Some(&[x, y]) = ctx
            .tooltip
            .visible_index
            .and_then(|i| ctx.geometry.points.get(i))
        else {
            return;
        };

        plot_ui.vline(
            VLine::new("cursor", x)
                .color(PLOT_CONFIG.cursor_color)
                .width(PLOT_CONFIG.cursor_width)
                .style(LineStyle::dashed_dense()),
        );
        plot_ui.points(
            Points::new("active", vec![[x, y]])
                .shape(MarkerShape::Circle)
                .filled(true)
                .radius(PLOT_CONFIG.active_dot_radius)
                .color(PLOT_CONFIG.active_dot_color),
        );
    }
}
