// Data feeds for the margin ratio series
#[cfg(not(target_arch = "wasm32"))]
pub mod live_feed;
pub mod mock_feed;
pub mod source;

use std::sync::Arc;

use crate::Cli;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

// Re-export commonly used types
#[cfg(not(target_arch = "wasm32"))]
pub use live_feed::LiveFeed;
pub use mock_feed::MockFeed;
pub use source::{FeedError, MarginSource};

/// Picks the feed the app will load from. Runs before the GUI starts.
pub fn select_source(args: &Cli) -> Arc<dyn MarginSource> {
    #[cfg(not(target_arch = "wasm32"))]
    let source: Arc<dyn MarginSource> = if args.live {
        Arc::new(LiveFeed::new(args.endpoint.as_deref()))
    } else {
        Arc::new(MockFeed::new(args.mock_days, args.seed))
    };

    // No networking in the browser build
    #[cfg(target_arch = "wasm32")]
    let source: Arc<dyn MarginSource> = {
        if args.live {
            log::warn!("Live feed is unavailable in the browser build, using mock data");
        }
        Arc::new(MockFeed::new(args.mock_days, args.seed))
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_fetch {
        log::info!("Selected data source: {}", source.signature());
    }
    source
}
