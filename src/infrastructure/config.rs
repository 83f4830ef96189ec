// Configuration loading
use crate::domain::observation::ValidationMode;
use serde::Deserialize;
use std::time::Duration;

pub const IPMA_WARNINGS_URL: &str = "https://api.ipma.pt/open-data/forecast/warnings/warnings_www.json";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub feed: FeedSettings,
    pub server: ServerSettings,
    pub observations: ObservationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedSettings {
    pub url: String,
    pub timeout_secs: u64,
}

impl FeedSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservationSettings {
    pub strict_validation: bool,
}

impl ObservationSettings {
    pub fn validation_mode(&self) -> ValidationMode {
        if self.strict_validation {
            ValidationMode::Strict
        } else {
            ValidationMode::Lenient
        }
    }
}

fn builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("feed.url", IPMA_WARNINGS_URL)?
        .set_default("feed.timeout_secs", 30)?
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("observations.strict_validation", false)?)
}

/// Load settings from defaults, the optional `config/app` file and
/// `IPMA_`-prefixed environment variables, in that order.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = builder()?
        .add_source(config::File::with_name("config/app").required(false))
        .add_source(
            config::Environment::with_prefix("IPMA")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
