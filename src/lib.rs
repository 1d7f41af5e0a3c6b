#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;
pub mod utils;

use std::sync::Arc;

// Re-export commonly used types
pub use data::{FeedError, MarginSource, MockFeed, select_source};
pub use domain::{DataPoint, TimeRange};
pub use engine::{ViewEvent, ViewState, reduce};
pub use ui::MarginRatioApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;

use crate::config::FEED;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load from the live margin data API instead of generating mock data
    #[arg(long, default_value_t = false)]
    pub live: bool,

    /// Override the live API endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Trading days of mock data to generate
    #[arg(long, default_value_t = FEED.mock.default_days)]
    pub mock_days: usize,

    /// Seed the mock generator for a reproducible series
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            live: false,
            endpoint: None,
            mock_days: FEED.mock.default_days,
            seed: None,
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    source: Arc<dyn MarginSource>,
) -> Box<dyn eframe::App> {
    Box::new(MarginRatioApp::new(cc, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mock_feed() {
        let args = Cli::try_parse_from(["margin-ratio-viewer"]).unwrap();
        assert_eq!(args, Cli::default());
        assert_eq!(select_source(&args).signature(), "Mock Generator");
    }

    #[test]
    fn parses_live_and_mock_flags() {
        let args = Cli::try_parse_from([
            "margin-ratio-viewer",
            "--live",
            "--endpoint",
            "http://localhost:8080/api",
            "--mock-days",
            "50",
            "--seed",
            "42",
        ])
        .unwrap();
        assert!(args.live);
        assert_eq!(args.endpoint.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(args.mock_days, 50);
        assert_eq!(args.seed, Some(42));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn live_flag_selects_the_api_feed() {
        let args = Cli {
            live: true,
            ..Cli::default()
        };
        assert_eq!(select_source(&args).signature(), "Margin Data API");
    }
}
