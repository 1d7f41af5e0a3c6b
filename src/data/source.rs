use async_trait::async_trait;
use std::fmt;

use crate::domain::DataPoint;

/// Why a fetch produced no series.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedError {
    /// Network failure or client setup problem
    Transport(String),
    /// Server answered with a non-2xx status
    Status(u16),
    /// Body didn't match any known response shape
    Parse(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Transport(msg) => write!(f, "Network error: {}", msg),
            FeedError::Status(code) => write!(f, "API request failed: {}", code),
            FeedError::Parse(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for FeedError {}

/// A producer of the margin ratio series, ordered ascending by date.
#[async_trait]
pub trait MarginSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<DataPoint>, FeedError>;

    /// Short human readable name (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_the_reason() {
        assert_eq!(
            FeedError::Status(503).to_string(),
            "API request failed: 503"
        );
        assert!(
            FeedError::Transport("connection refused".into())
                .to_string()
                .contains("connection refused")
        );
    }
}
