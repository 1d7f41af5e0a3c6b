use eframe::egui;
use poll_promise::Promise;
use std::sync::Arc;
use std::time::Duration;

use crate::data::{FeedError, MarginSource};
use crate::domain::DataPoint;
use crate::engine::ViewEvent;
use crate::ui::app::MarginRatioApp;
use crate::utils::app_time::{elapsed_since, now};

pub(super) struct FetchOutcome {
    pub(super) result: Result<Vec<DataPoint>, FeedError>,
    pub(super) signature: &'static str,
    elapsed_time: Duration,
}

impl FetchOutcome {
    pub(super) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl MarginRatioApp {
    /// Starts the single fetch for this session. No-op while one is running.
    pub(super) fn start_fetch(&mut self) {
        if self.fetch_promise.is_some() {
            return;
        }

        let source = Arc::clone(&self.source);

        #[cfg(not(target_arch = "wasm32"))]
        let promise = Promise::spawn_thread("margin_fetch", move || run_fetch_blocking(source));

        #[cfg(target_arch = "wasm32")]
        let promise = {
            let (sender, promise) = Promise::new();
            wasm_bindgen_futures::spawn_local(async move {
                sender.send(run_fetch(source).await);
            });
            promise
        };

        self.fetch_promise = Some(promise);
    }

    /// Hands a finished fetch to the reducer; keeps repainting until then.
    pub(super) fn poll_fetch(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.fetch_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(outcome) => {
                log::info!(
                    "{} fetch finished in {:?}",
                    outcome.signature,
                    outcome.elapsed_time()
                );
                self.dispatch(ViewEvent::DataLoaded(outcome.result));
            }
            Err(pending) => {
                self.fetch_promise = Some(pending);
                ctx.request_repaint();
            }
        }
    }
}

async fn run_fetch(source: Arc<dyn MarginSource>) -> FetchOutcome {
    let start = now();
    let result = source.fetch().await;
    FetchOutcome {
        result,
        signature: source.signature(),
        elapsed_time: elapsed_since(start),
    }
}

/// Drives the async fetch on a private current-thread runtime.
#[cfg(not(target_arch = "wasm32"))]
fn run_fetch_blocking(source: Arc<dyn MarginSource>) -> FetchOutcome {
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(run_fetch(source)),
        Err(e) => FetchOutcome {
            result: Err(FeedError::Transport(format!("could not start fetch runtime: {}", e))),
            signature: source.signature(),
            elapsed_time: Duration::ZERO,
        },
    }
}
