use eframe::egui::Ui;
use std::convert::Infallible;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::models::WindowStats;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::card_frame;
use crate::utils::format_percentage;

/// Trait for UI panels that can be rendered.
/// Panels that only display use `Infallible` as their event type.
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Below this width the tiles wrap onto two rows.
const NARROW_LAYOUT_WIDTH: f32 = 600.0;

/// One summary tile each, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum StatKind {
    Current,
    Average,
    Max,
    Min,
}

impl StatKind {
    pub fn title(self) -> &'static str {
        match self {
            StatKind::Current => UI_TEXT.stat_current,
            StatKind::Average => UI_TEXT.stat_average,
            StatKind::Max => UI_TEXT.stat_max,
            StatKind::Min => UI_TEXT.stat_min,
        }
    }

    pub fn value(self, stats: &WindowStats) -> f64 {
        match self {
            StatKind::Current => stats.latest,
            StatKind::Average => stats.average,
            StatKind::Max => stats.max,
            StatKind::Min => stats.min,
        }
    }

    /// Only the current tile carries the change since the window start.
    pub fn change(self, stats: &WindowStats) -> Option<f64> {
        match self {
            StatKind::Current => stats.change_from_start,
            _ => None,
        }
    }
}

/// The four stat tiles above the chart. Read-only, so it emits nothing.
pub struct StatTilesPanel {
    stats: WindowStats,
}

impl StatTilesPanel {
    pub fn new(stats: WindowStats) -> Self {
        Self { stats }
    }

    fn render_tiles(&self, ui: &mut Ui) {
        let per_row = if ui.available_width() < NARROW_LAYOUT_WIDTH { 2 } else { 4 };
        let kinds: Vec<StatKind> = StatKind::iter().collect();

        for row in kinds.chunks(per_row) {
            ui.columns(per_row, |columns| {
                for (column, kind) in columns.iter_mut().zip(row) {
                    self.render_tile(column, *kind);
                }
            });
            ui.add_space(8.0);
        }
    }

    fn render_tile(&self, ui: &mut Ui, kind: StatKind) {
        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label_subdued(kind.title());
            ui.horizontal(|ui| {
                ui.label_figure(format_percentage(kind.value(&self.stats)), UI_CONFIG.colors.heading);
                ui.label_change(kind.change(&self.stats));
            });
        });
    }
}

impl Panel for StatTilesPanel {
    type Event = Infallible;

    fn render(&mut self, ui: &mut Ui) -> Vec<Infallible> {
        self.render_tiles(ui);
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> WindowStats {
        WindowStats {
            latest: 0.06,
            average: 0.05,
            max: 0.07,
            min: 0.04,
            change_from_start: Some(0.2),
        }
    }

    fn assert_display_panel<P: Panel<Event = Infallible>>() {}

    #[test]
    fn stat_tiles_are_a_display_only_panel() {
        assert_display_panel::<StatTilesPanel>();
    }

    #[test]
    fn tiles_come_in_display_order() {
        let titles: Vec<&str> = StatKind::iter().map(StatKind::title).collect();
        assert_eq!(
            titles,
            vec![UI_TEXT.stat_current, UI_TEXT.stat_average, UI_TEXT.stat_max, UI_TEXT.stat_min]
        );
    }

    #[test]
    fn each_tile_reads_its_own_figure() {
        let stats = stats();
        let values: Vec<f64> = StatKind::iter().map(|k| k.value(&stats)).collect();
        assert_eq!(values, vec![0.06, 0.05, 0.07, 0.04]);
    }

    #[test]
    fn only_current_tile_shows_change() {
        let stats = stats();
        assert_eq!(StatKind::Current.change(&stats), Some(0.2));
        assert_eq!(StatKind::Average.change(&stats), None);
        assert_eq!(StatKind::Max.change(&stats), None);
        assert_eq!(StatKind::Min.change(&stats), None);

        let flat_base = WindowStats { change_from_start: None, ..stats };
        assert_eq!(StatKind::Current.change(&flat_base), None);
    }
}
