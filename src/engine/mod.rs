pub mod messages;
pub mod reducer;
pub mod state;

// Re-export key components
pub use messages::ViewEvent;
pub use reducer::reduce;
pub use state::{LoadPhase, ViewState};
