use eframe::egui::{Color32, RichText, Ui};

use crate::ui::config::UI_CONFIG;
use crate::utils::format_signed_change;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, gray text (good for labels like "Average").
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders a section header using the configured global color.
    fn label_header(&mut self, text: impl Into<String>);

    /// Renders an error message (Red).
    fn label_error(&mut self, text: impl Into<String>);

    /// Large strong figure, as shown on the stat tiles.
    fn label_figure(&mut self, text: impl Into<String>, color: Color32);

    /// Signed relative change, colored by direction. Nothing is drawn for `None`.
    fn label_change(&mut self, change: Option<f64>);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.label));
    }

    fn label_header(&mut self, text: impl Into<String>) {
        self.heading(RichText::new(text).color(UI_CONFIG.colors.heading).strong());
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).color(UI_CONFIG.colors.error));
    }

    fn label_figure(&mut self, text: impl Into<String>, color: Color32) {
        self.label(RichText::new(text).size(20.0).strong().color(color));
    }

    fn label_change(&mut self, change: Option<f64>) {
        if let Some(change) = change {
            self.label(
                RichText::new(format_signed_change(change))
                    .small()
                    .color(crate::ui::utils::change_color(change)),
            );
        }
    }
}
