//! Configuration module for the margin ratio viewer.

mod debug; // Private: use crate::config::DEBUG_FLAGS rather than crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod feed;
pub mod plot;
pub mod view;

// Re-export commonly used items
pub use feed::FEED;
pub use plot::PLOT_CONFIG;
pub use view::VIEW;
