// Feed trait for warning data access
use crate::domain::warning::WarningRecord;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport failure, timeout or non-success status.
    #[error("warnings feed unavailable: {0}")]
    Unavailable(String),

    /// Body was not a JSON array of warning records.
    #[error("warnings feed returned an unexpected body: {0}")]
    Parse(String),
}

#[async_trait]
pub trait WarningFeed: Send + Sync {
    /// Fetch a fresh snapshot of all current warnings, in feed order
    async fn fetch(&self) -> Result<Vec<WarningRecord>, FeedError>;
}
