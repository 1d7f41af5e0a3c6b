//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Series line
    pub line_color: Color32,
    pub line_width: f32,
    /// Highlighted point under the cursor
    pub active_dot_color: Color32,
    pub active_dot_radius: f32,
    /// Horizontal reference line at the window average
    pub average_line_color: Color32,
    pub average_label_color: Color32,
    pub average_line_width: f32,
    /// Vertical hover cursor
    pub cursor_color: Color32,
    pub cursor_width: f32,
    /// Height of the chart area in points
    pub chart_height: f32,
    /// Width reserved for the Y axis labels
    pub y_axis_width: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_color: Color32::from_rgb(240, 190, 131), // Sand
    line_width: 1.5,
    active_dot_color: Color32::from_rgb(240, 190, 131),
    active_dot_radius: 4.0,
    average_line_color: Color32::from_gray(110),
    average_label_color: Color32::from_rgb(107, 114, 128),
    average_line_width: 1.0,
    cursor_color: Color32::from_rgb(156, 163, 175),
    cursor_width: 1.0,
    chart_height: 320.0,
    y_axis_width: 50.0,
};
