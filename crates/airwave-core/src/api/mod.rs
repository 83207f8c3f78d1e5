//! HTTP client for the EPG backend
//!
//! A thin async client over `reqwest` with a request timeout. The wire
//! schema (dummy program IDs, possibly inverted overnight intervals) is
//! kept in DTO types here; [`crate::guide::prepare_channels`] turns them
//! into the domain model.

mod error;

pub use error::{GuideError, GuideResult};

use std::time::Duration;

use serde::Deserialize;

use crate::types::TimestampMs;

/// Default base URL of the EPG mock backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:1337";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A channel as served by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelDto {
    /// Channel identifier
    pub id: String,
    /// Channel name
    pub title: String,
    /// Channel branding assets
    pub images: ChannelImagesDto,
    /// Scheduled programs; an empty list is valid data, not an error
    #[serde(default)]
    pub schedules: Vec<ScheduleDto>,
}

/// Channel branding assets
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelImagesDto {
    /// Channel logo URL
    #[serde(rename = "LOGO")]
    pub logo: String,
}

/// One scheduled program on the wire.
///
/// `end` may precede `start` for overnight programs; preparation fixes it.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDto {
    /// Program title
    pub title: String,
    /// Start time (Unix milliseconds)
    pub start: TimestampMs,
    /// End time (Unix milliseconds)
    pub end: TimestampMs,
}

/// Async client for the EPG backend
#[derive(Debug, Clone)]
pub struct EpgClient {
    client: reqwest::Client,
    base_url: String,
}

impl EpgClient {
    /// Create a client with the given base URL and request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> GuideResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GuideError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the full guide: every channel with its schedule
    pub async fn fetch_guide(&self) -> GuideResult<Vec<ChannelDto>> {
        let url = format!("{}/epg", self.base_url);
        log::debug!("fetching guide from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("guide backend returned {}", status);
            return Err(GuideError::Http {
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<ChannelDto>>()
            .await
            .map_err(|e| GuideError::Decode(e.to_string()))
    }
}

fn map_request_error(error: reqwest::Error) -> GuideError {
    if error.is_timeout() {
        GuideError::Timeout
    } else {
        GuideError::Network(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_dto_decodes_wire_shape() {
        let payload = r#"[{
            "id": "ch-1",
            "title": "Das Erste",
            "images": { "LOGO": "https://example.com/logo.png" },
            "schedules": [
                { "title": "Morning News", "start": 1705305600000, "end": 1705309200000 }
            ]
        }]"#;

        let channels: Vec<ChannelDto> = serde_json::from_str(payload).unwrap();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].images.logo, "https://example.com/logo.png");
        assert_eq!(channels[0].schedules[0].start, 1_705_305_600_000);
    }

    #[test]
    fn test_missing_schedules_default_to_empty() {
        let payload = r#"[{
            "id": "ch-2",
            "title": "ZDF",
            "images": { "LOGO": "https://example.com/zdf.png" }
        }]"#;

        let channels: Vec<ChannelDto> = serde_json::from_str(payload).unwrap();
        assert!(channels[0].schedules.is_empty());
    }

    #[test]
    fn test_error_status_accessor() {
        assert_eq!(GuideError::Http { status: 503 }.status(), Some(503));
        assert_eq!(GuideError::Timeout.status(), None);
    }
}
