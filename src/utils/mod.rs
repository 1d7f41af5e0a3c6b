pub mod app_time;
pub mod format_utils;
pub mod maths_utils;
pub mod time_utils;

pub use format_utils::{format_percentage, format_signed_change};
pub use time_utils::TimeUtils;
