//! HTTP client for the margin ratio snapshot endpoint.

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::FEED;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::source::{FeedError, MarginSource};
use crate::domain::DataPoint;
use crate::domain::data_point::normalize_series;

pub struct LiveFeed {
    endpoint: String,
}

impl LiveFeed {
    /// `endpoint` overrides the configured URL.
    pub fn new(endpoint: Option<&str>) -> Self {
        Self {
            endpoint: endpoint.unwrap_or(FEED.endpoint).to_string(),
        }
    }
}

#[async_trait]
impl MarginSource for LiveFeed {
    fn signature(&self) -> &'static str {
        "Margin Data API"
    }

    async fn fetch(&self) -> Result<Vec<DataPoint>, FeedError> {
        let client = reqwest::Client::new();
        let response = client
            .post(&self.endpoint)
            .json(&FetchRequest::for_metric(FEED.metric_id))
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch {
            log::info!("Received {} bytes from {}", body.len(), self.endpoint);
        }

        parse_feed_body(&body)
    }
}

/// Request body. The endpoint expects several fields as JSON encoded strings.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FetchRequest {
    pub code_selectors: String,
    pub index_info: String,
    pub app_id: String,
    pub column_map: String,
    pub page: String,
    pub sort: String,
    pub fixed: String,
}

impl FetchRequest {
    pub fn for_metric(metric_id: &str) -> Self {
        let request = &FEED.request;
        let code_selectors = serde_json::json!({
            "include": [{ "type": "block_code", "values": [request.block_code] }]
        });
        let index_info = serde_json::json!([
            { "index_id": "security_name" },
            {
                "index_id": metric_id,
                "attribute": {},
                "timestamp": 0,
                "time_type": "SNAPSHOT"
            }
        ]);
        let mut column_map = serde_json::Map::new();
        column_map.insert(
            metric_id.to_string(),
            serde_json::json!({ "title": request.column_title, "sortBy": true, "fit": true }),
        );

        Self {
            code_selectors: code_selectors.to_string(),
            index_info: index_info.to_string(),
            app_id: request.app_id.to_string(),
            column_map: serde_json::Value::Object(column_map).to_string(),
            page: format!("{{size:{}}}", request.page_size),
            sort: "{}".to_string(),
            fixed: request.fixed.to_string(),
        }
    }
}

/// The endpoint has been seen answering with a bare record list as well as
/// with a `data.list` envelope keyed by metric id.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum FeedResponse {
    Records(Vec<FeedRecord>),
    Envelope { data: EnvelopeData },
}

#[derive(Deserialize, Debug)]
struct FeedRecord {
    value: Option<f64>,
    timestamp: Option<i64>,
}

#[derive(Deserialize, Debug)]
struct EnvelopeData {
    list: Vec<EnvelopeRecord>,
}

#[derive(Deserialize, Debug)]
struct EnvelopeRecord {
    rzrq_margin_trading_bal_flow_value_rate: Option<f64>,
    timestamp: Option<i64>,
}

/// Turns a response body into an ascending, date-unique series.
/// Records without a timestamp or a finite value are dropped.
pub fn parse_feed_body(body: &str) -> Result<Vec<DataPoint>, FeedError> {
    let response: FeedResponse = serde_json::from_str(body)
        .context("body is neither a record list nor a data envelope")
        .map_err(|e| FeedError::Parse(format!("{:#}", e)))?;

    let raw: Vec<(Option<i64>, Option<f64>)> = match response {
        FeedResponse::Records(records) => records
            .into_iter()
            .map(|r| (r.timestamp, r.value))
            .collect(),
        FeedResponse::Envelope { data } => data
            .list
            .into_iter()
            .map(|r| (r.timestamp, r.rzrq_margin_trading_bal_flow_value_rate))
            .collect(),
    };

    let points = raw
        .into_iter()
        .filter_map(|(timestamp, value)| {
            let value = value.filter(|v| v.is_finite())?;
            Some(DataPoint::from_timestamp(timestamp?, value))
        })
        .collect();

    Ok(normalize_series(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn noon_ms(y: i32, m: u32, d: u32) -> i64 {
        Local
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn parses_record_list_into_sorted_series() {
        let body = format!(
            r#"[
                {{"value": 0.0521, "label": "b", "timestamp": {}}},
                {{"value": 0.0512, "label": "a", "timestamp": {}}},
                {{"value": null, "label": "gap", "timestamp": {}}}
            ]"#,
            noon_ms(2024, 3, 6),
            noon_ms(2024, 3, 5),
            noon_ms(2024, 3, 7),
        );

        let points = parse_feed_body(&body).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2024-03-05");
        assert_eq!(points[0].value, 0.0512);
        assert_eq!(points[1].date, "2024-03-06");
    }

    #[test]
    fn parses_data_envelope() {
        let body = format!(
            r#"{{"data": {{"list": [
                {{"rzrq_margin_trading_bal_flow_value_rate": 0.047, "security_name": "X", "timestamp": {}}}
            ]}}}}"#,
            noon_ms(2024, 1, 2),
        );

        let points = parse_feed_body(&body).unwrap();
        assert_eq!(points, vec![DataPoint::from_timestamp(noon_ms(2024, 1, 2), 0.047)]);
    }

    #[test]
    fn records_without_timestamp_are_dropped() {
        let body = format!(
            r#"[
                {{"value": 0.0512, "timestamp": {}}},
                {{"value": 0.0533, "timestamp": null}},
                {{"value": 0.0544}}
            ]"#,
            noon_ms(2024, 3, 5),
        );

        let points = parse_feed_body(&body).unwrap();
        assert_eq!(points, vec![DataPoint::from_timestamp(noon_ms(2024, 3, 5), 0.0512)]);

        let envelope = r#"{"data": {"list": [
            {"rzrq_margin_trading_bal_flow_value_rate": 0.047, "security_name": "X"}
        ]}}"#;
        assert!(parse_feed_body(envelope).unwrap().is_empty());
    }

    #[test]
    fn unknown_shape_is_a_parse_error() {
        let err = parse_feed_body(r#"{"status": "ok"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));

        let err = parse_feed_body("<html>502</html>").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn request_payload_selects_metric() {
        let request = FetchRequest::for_metric(FEED.metric_id);
        assert_eq!(request.app_id, "tangram-data-view-stocklist");
        assert_eq!(request.page, "{size:200}");
        assert!(request.index_info.contains("rzrq_margin_trading_bal_flow_value_rate"));
        assert!(request.index_info.contains("SNAPSHOT"));
        assert!(request.code_selectors.contains("1B"));

        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("codeSelectors").is_some());
        assert!(body.get("columnMap").is_some());
    }

    /// Serves exactly one HTTP exchange on an ephemeral local port and
    /// returns the URL to reach it.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request(&mut socket).await;
            let reply = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{addr}/fetch_data")
    }

    /// Reads headers and the full body so the client sees a clean reply.
    async fn read_request(socket: &mut TcpStream) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                return;
            }
            buf.extend_from_slice(&chunk[..n]);
            let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let headers = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = headers
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                return;
            }
        }
    }

    #[tokio::test]
    async fn server_error_status_is_reported() {
        let endpoint = serve_once("503 Service Unavailable", "").await;
        let feed = LiveFeed::new(Some(endpoint.as_str()));
        let err = feed.fetch().await.unwrap_err();
        assert_eq!(err, FeedError::Status(503));
        assert_eq!(err.to_string(), "API request failed: 503");
    }

    #[tokio::test]
    async fn unexpected_body_is_a_parse_error() {
        let endpoint = serve_once("200 OK", r#"{"status":"ok"}"#).await;
        let feed = LiveFeed::new(Some(endpoint.as_str()));
        let err = feed.fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn successful_reply_becomes_a_series() {
        let endpoint = serve_once(
            "200 OK",
            r#"{"data": {"list": [{"rzrq_margin_trading_bal_flow_value_rate": 0.047, "security_name": "X", "timestamp": 1704196800000}]}}"#,
        )
        .await;
        let feed = LiveFeed::new(Some(endpoint.as_str()));
        let points = feed.fetch().await.unwrap();
        assert_eq!(points, vec![DataPoint::from_timestamp(1_704_196_800_000, 0.047)]);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        // Port 9 (discard) on localhost: refused or closed, never a valid reply
        let feed = LiveFeed::new(Some("http://127.0.0.1:9/fetch_data"));
        let err = feed.fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::Transport(_)), "got {err:?}");
    }
}
