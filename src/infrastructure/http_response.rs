// HTTP error responses
use crate::application::warning_feed::FeedError;
use crate::domain::observation::ValidationError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Feed(#[from] FeedError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error("no warnings loaded for this session; refresh first")]
    NotLoaded,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Feed(_) => StatusCode::BAD_GATEWAY,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::NotLoaded => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(FeedError::Unavailable("timeout".to_string())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(FeedError::Parse("eof".to_string())).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::from(ValidationError::EmptyField("time")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotLoaded.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_message_is_transparent() {
        let err = ApiError::from(ValidationError::EmptyField("location"));
        assert_eq!(err.to_string(), "field `location` must not be empty");
    }
}
