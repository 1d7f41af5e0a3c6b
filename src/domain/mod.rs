// Domain types and value objects
pub mod data_point;
pub mod time_range;

// Re-export commonly used types
pub use data_point::DataPoint;
pub use time_range::TimeRange;
