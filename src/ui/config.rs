use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    /// Stat tiles and the chart card
    pub card_fill: Color32,
    pub tooltip_fill: Color32,
    pub accent: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub neutral: Color32,
    pub error: Color32,
    /// Range control track and the selected segment over it
    pub track: Color32,
    pub track_selected: Color32,
    pub handle_fill: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Content is centred and capped at this width on large windows.
    pub max_content_width: f32,
    pub card_rounding: u8,
    pub range_control_height: f32,
    pub range_handle_radius: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(156, 163, 175),
        heading: Color32::from_rgb(243, 244, 246),
        central_panel: Color32::from_rgb(26, 31, 44), // #1A1F2C
        side_panel: Color32::from_rgb(34, 34, 50),
        card_fill: Color32::from_rgb(42, 42, 61),
        tooltip_fill: Color32::from_rgba_premultiplied(38, 38, 55, 235),
        accent: Color32::from_rgb(240, 190, 131),
        positive: Color32::from_rgb(34, 197, 94),
        negative: Color32::from_rgb(239, 68, 68),
        neutral: Color32::GRAY,
        error: Color32::from_rgb(255, 100, 100),
        track: Color32::from_rgb(55, 55, 75),
        track_selected: Color32::from_rgb(240, 190, 131),
        handle_fill: Color32::from_rgb(243, 244, 246),
    },
    max_content_width: 1100.0,
    card_rounding: 8,
    range_control_height: 28.0,
    range_handle_radius: 8.0,
};
