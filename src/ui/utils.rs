use eframe::egui::{Color32, Context, CornerRadius, Frame, Margin, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading for a card section
pub fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .color(UI_CONFIG.colors.heading)
        .strong()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.card_fill;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.extreme_bg_color = UI_CONFIG.colors.card_fill;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Rounded card background shared by the tiles and the chart.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(UI_CONFIG.colors.card_fill)
        .corner_radius(CornerRadius::same(UI_CONFIG.card_rounding))
        .inner_margin(Margin::same(12))
}

/// Green for gains, red for losses, gray when flat.
pub fn change_color(change: f64) -> Color32 {
    if change > 0.0 {
        UI_CONFIG.colors.positive
    } else if change < 0.0 {
        UI_CONFIG.colors.negative
    } else {
        UI_CONFIG.colors.neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_color_follows_direction() {
        assert_eq!(change_color(0.012), UI_CONFIG.colors.positive);
        assert_eq!(change_color(-0.004), UI_CONFIG.colors.negative);
        assert_eq!(change_color(0.0), UI_CONFIG.colors.neutral);
    }
}
