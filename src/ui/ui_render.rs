use eframe::egui::{
    Align, CentralPanel, Context, Frame, Layout, Margin, ScrollArea, Spinner, TopBottomPanel, Ui, vec2,
};

use crate::config::PLOT_CONFIG;
use crate::engine::{LoadPhase, ViewEvent};
use crate::ui::app::MarginRatioApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::range_control::RangeControl;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, StatTilesPanel};
use crate::ui::ui_plot_view::show_tooltip;
use crate::ui::utils::{card_frame, section_heading, spaced_separator};
use crate::utils::time_utils::current_year;

impl MarginRatioApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(16, 10));
        TopBottomPanel::top("header_panel")
            .frame(header_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_header(UI_TEXT.page_title);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(format!(
                            "{}{}",
                            UI_TEXT.data_source_prefix,
                            self.source.signature()
                        ));
                    });
                });
            });
    }

    pub(super) fn render_footer_panel(&mut self, ctx: &Context) {
        let footer_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 6));
        TopBottomPanel::bottom("footer_panel")
            .frame(footer_frame)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label_subdued(format!("© {}{}", current_year(), UI_TEXT.footer_suffix));
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(16));
        CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let width = ui.available_width().min(UI_CONFIG.max_content_width);
                        let gutter = (ui.available_width() - width) / 2.0;
                        ui.horizontal(|ui| {
                            ui.add_space(gutter);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                self.render_page(ui);
                            });
                        });
                    });
            });
    }

    fn render_page(&mut self, ui: &mut Ui) {
        self.render_chart_heading(ui);

        if let Some(stats) = self.state.stats() {
            StatTilesPanel::new(stats).render(ui);
        }

        card_frame().show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            self.render_chart_area(ui);
            if self.state.has_data() {
                spaced_separator(ui);
                self.render_range_control(ui);
            }
        });

        ui.add_space(12.0);
        ui.label_subdued(UI_TEXT.usage_hint);
    }

    fn render_chart_heading(&self, ui: &mut Ui) {
        section_heading(ui, UI_TEXT.chart_title);
        if let Some(range) = self.state.range().filter(|_| self.state.has_data()) {
            ui.label_subdued(format!(
                "{}{}{}",
                UI_TEXT.window_prefix,
                range.day_count(),
                UI_TEXT.window_suffix
            ));
        }
        ui.add_space(8.0);
    }

    fn render_chart_area(&mut self, ui: &mut Ui) {
        let phase = self.state.phase.clone();
        match phase {
            LoadPhase::Loading => chart_placeholder(ui, |ui| {
                ui.add(Spinner::new());
                ui.label_subdued(UI_TEXT.loading);
            }),
            LoadPhase::Failed(error) => chart_placeholder(ui, |ui| {
                ui.label_error(format!("{}{}", UI_TEXT.error_prefix, error));
            }),
            LoadPhase::Ready => {
                let Some(stats) = self.state.stats() else {
                    chart_placeholder(ui, |ui| ui.label_subdued(UI_TEXT.no_data));
                    return;
                };
                let events = self.plot_view.show(
                    ui,
                    self.state.range_model.visible(),
                    &stats,
                    &self.state.tooltip,
                );
                self.dispatch_all(events);
                show_tooltip(ui.ctx(), &self.state.tooltip);
            }
        }
    }

    fn render_range_control(&mut self, ui: &mut Ui) {
        let Some(range) = self.state.range() else {
            return;
        };
        let mut control = RangeControl::new(self.state.range_model.points(), range);
        let events = control.render(ui);
        self.dispatch_all(events.into_iter().map(ViewEvent::RangeChanged));
    }
}

/// Fills the chart's slot so the card keeps its height in every state.
fn chart_placeholder(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    let height = PLOT_CONFIG.chart_height;
    ui.allocate_ui_with_layout(
        vec2(ui.available_width(), height),
        Layout::top_down(Align::Center),
        |ui| {
            ui.set_min_height(height);
            ui.add_space(height * 0.4);
            add_contents(ui);
        },
    );
}
