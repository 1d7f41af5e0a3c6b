use eframe::egui;
use eframe::Frame;
use poll_promise::Promise;
use std::sync::Arc;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::MarginSource;
use crate::engine::{ViewEvent, ViewState, reduce};
use crate::ui::app_async::FetchOutcome;
use crate::ui::ui_plot_view::PlotView;
use crate::ui::utils::setup_custom_visuals;

/// Single-page viewer for the margin balance to float market cap ratio.
///
/// Owns the one [`ViewState`]; panels report what the user did as
/// [`ViewEvent`]s and the app applies them through [`reduce`].
pub struct MarginRatioApp {
    pub(super) state: ViewState,
    pub(super) source: Arc<dyn MarginSource>,
    pub(super) fetch_promise: Option<Promise<FetchOutcome>>,
    pub(super) plot_view: PlotView,
}

impl MarginRatioApp {
    /// Builds the app and kicks off the one-shot data fetch.
    pub fn new(cc: &eframe::CreationContext<'_>, source: Arc<dyn MarginSource>) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut app = Self {
            state: ViewState::default(),
            source,
            fetch_promise: None,
            plot_view: PlotView::new(),
        };
        app.start_fetch();
        app
    }

    pub(super) fn dispatch(&mut self, ev: ViewEvent) -> bool {
        reduce(&mut self.state, ev)
    }

    pub(super) fn dispatch_all(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for ev in events {
            self.dispatch(ev);
        }
    }
}

impl eframe::App for MarginRatioApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight fetch; its result has nowhere to go now.
        if let Some(promise) = self.fetch_promise.take() {
            drop(promise);
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_fetch(ctx);

        self.render_header_panel(ctx);
        self.render_footer_panel(ctx);
        self.render_central_panel(ctx);
    }
}
