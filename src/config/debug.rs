//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so debug
//! builds stay readable. Every flag is additionally gated by
//! `cfg(debug_assertions)` at the call site.

pub struct DebugFlags {
    /// Emit source selection and fetch timing details.
    pub print_fetch: bool,
    /// Emit every accepted or rejected range change.
    pub print_range_changes: bool,
    /// Emit tooltip activation changes (noisy: fires on pointer moves).
    pub print_tooltip: bool,
    /// Emit chart geometry cache hit/miss diagnostics.
    pub print_plot_cache_stats: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch: false,
    print_range_changes: false,
    print_tooltip: false,
    print_plot_cache_stats: false,
    print_shutdown: false,
};
