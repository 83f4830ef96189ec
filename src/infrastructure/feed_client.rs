// IPMA warnings feed client
use crate::application::warning_feed::{FeedError, WarningFeed};
use crate::domain::warning::WarningRecord;
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct IpmaFeedClient {
    client: reqwest::Client,
    url: String,
}

impl IpmaFeedClient {
    pub fn new(url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl WarningFeed for IpmaFeedClient {
    async fn fetch(&self) -> Result<Vec<WarningRecord>, FeedError> {
        tracing::debug!("Fetching warnings from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Warnings feed responded with status {}", status);
            return Err(FeedError::Unavailable(format!("status {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FeedError::Unavailable(e.to_string()))?;

        let records: Vec<WarningRecord> =
            serde_json::from_slice(&body).map_err(|e| FeedError::Parse(e.to_string()))?;

        tracing::debug!("Parsed {} warning records", records.len());
        Ok(records)
    }
}
