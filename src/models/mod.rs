// View-models over the loaded series.
// Pure logic, independent of egui so everything here is unit-testable.

pub mod range_model;
pub mod tooltip;
pub mod window_stats;

// Re-export key types for convenience
pub use range_model::RangeModel;
pub use tooltip::{ScreenPoint, TooltipState, nearest_visible_index};
pub use window_stats::{WindowStats, x_tick_indices, x_tick_interval, y_domain, y_ticks};
