// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod feed_client;
pub mod http_response;
