//! Data feed configuration: live endpoint, request payload pieces and the
//! parameters of the synthetic series used when no live feed is wanted.

/// Request payload pieces for the margin-ratio snapshot endpoint.
pub struct RequestConfig {
    pub app_id: &'static str,
    /// Instrument universe (block code) the snapshot is taken over.
    pub block_code: &'static str,
    pub page_size: usize,
    pub fixed: &'static str,
    pub column_title: &'static str,
}

/// Random walk + sinusoid parameters for the mock series.
pub struct MockConfig {
    /// Number of trading days to aim for.
    pub default_days: usize,
    /// Calendar days per trading day, roughly offsets weekends.
    pub calendar_factor: f64,
    pub start_value_min: f64,
    pub start_value_spread: f64,
    /// Full width of the uniform daily step.
    pub step_width: f64,
    pub trend_amplitude: f64,
    pub trend_period: f64,
    pub cycle_amplitude: f64,
    pub cycle_period: f64,
    pub value_floor: f64,
    pub value_ceiling: f64,
}

pub struct FeedConfig {
    pub endpoint: &'static str,
    pub metric_id: &'static str,
    pub request: RequestConfig,
    pub mock: MockConfig,
}

pub const FEED: FeedConfig = FeedConfig {
    endpoint: "http://dq.10jqka.com.cn/fuyao/rzrq_data/default/v1/fetch_data",
    metric_id: "rzrq_margin_trading_bal_flow_value_rate",
    request: RequestConfig {
        app_id: "tangram-data-view-stocklist",
        block_code: "1B",
        page_size: 200,
        fixed: "20",
        column_title: "融资融券余额占流通市值比",
    },
    mock: MockConfig {
        default_days: 200,
        calendar_factor: 1.4,
        start_value_min: 0.04,
        start_value_spread: 0.02,
        step_width: 0.002,
        trend_amplitude: 0.005,
        trend_period: 30.0,
        cycle_amplitude: 0.002,
        cycle_period: 10.0,
        value_floor: 0.03,
        value_ceiling: 0.08,
    },
};
