//! View-model constants shared by the range model, aggregates and chart.

pub struct ViewConfig {
    /// Points shown when data first arrives.
    pub default_window_points: usize,
    /// Fraction of the value range added above and below the Y domain.
    pub y_padding_pct: f64,
    /// Y domain used when there is nothing to show.
    pub empty_y_domain: (f64, f64),
    /// Roughly how many labelled ticks the X axis should carry.
    pub x_tick_divisions: usize,
    pub y_tick_count: usize,
    /// Tooltip box offset from the pointer, in screen points.
    pub tooltip_offset: (f32, f32),
}

pub const VIEW: ViewConfig = ViewConfig {
    default_window_points: 200,
    y_padding_pct: 0.1,
    empty_y_domain: (0.0, 0.1),
    x_tick_divisions: 6,
    y_tick_count: 5,
    tooltip_offset: (10.0, -60.0),
};
