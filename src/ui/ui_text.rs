//! Every user-facing string in one place.

pub struct UiText {
    pub window_title: &'static str,
    pub page_title: &'static str,
    pub chart_title: &'static str,
    pub window_prefix: &'static str,
    pub window_suffix: &'static str,

    // Stat tiles
    pub stat_current: &'static str,
    pub stat_average: &'static str,
    pub stat_max: &'static str,
    pub stat_min: &'static str,

    // Chart states
    pub loading: &'static str,
    pub error_prefix: &'static str,
    pub no_data: &'static str,
    pub average_label_prefix: &'static str,
    pub series_name: &'static str,
    pub tooltip_metric: &'static str,

    // Range control
    pub range_hint: &'static str,
    pub trading_days_suffix: &'static str,

    // Notes and footer
    pub usage_hint: &'static str,
    pub data_source_prefix: &'static str,
    pub footer_suffix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Margin Ratio Viewer",
    page_title: "Market Trend Analysis",
    chart_title: "Margin Balance / Float Market Cap",
    window_prefix: "Last ",
    window_suffix: " trading days",

    stat_current: "Current",
    stat_average: "Average",
    stat_max: "High",
    stat_min: "Low",

    loading: "Loading...",
    error_prefix: "Failed to fetch data: ",
    no_data: "No data available",
    average_label_prefix: "Avg: ",
    series_name: "Margin ratio",
    tooltip_metric: "Margin / float cap: ",

    range_hint: "Set time range",
    trading_days_suffix: " trading days",

    usage_hint: "Drag either handle below the chart to change the analysed period. Hover the chart for daily values.",
    data_source_prefix: "Data source: ",
    footer_suffix: " Margin Ratio Analysis Tool",
};
