// src/utils/app_time.rs
// `std::time::Instant` panics on wasm32, so the browser build uses web-time.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

pub fn elapsed_since(start: AppInstant) -> Duration {
    now().saturating_duration_since(start)
}
