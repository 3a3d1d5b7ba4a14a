//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `whatsapp`: Graph API credentials, webhook secrets, reply style
//! - `schedule`: class schedule source

mod schedule;
mod server;
mod whatsapp;

use std::path::PathBuf;

use config::{ConfigBuilder, ConfigError, FileFormat, builder::DefaultState};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use schedule::ScheduleConfig;
pub use server::ServerConfig;
pub(crate) use server::default_log_filter;
pub use whatsapp::WhatsAppConfig;

/// Prefix of structured environment overrides (`RELAY_SERVER__PORT`)
pub const ENV_PREFIX: &str = "RELAY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// WhatsApp configuration
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,

    /// Schedule configuration
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl AppConfig {
    /// Load configuration from `.env`, optional `config.toml` and environment
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env file");
        }

        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., RELAY_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_legacy_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML document on top of the defaults, without touching the environment
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("whatsapp.api_version", integration_whatsapp::DEFAULT_API_VERSION)?
            .set_default("schedule.csv_path", "data/schedule.csv")
    }

    /// Apply the bare `ACCESS_TOKEN`, `VERSION`, ... variables
    ///
    /// `lookup` returns the value of a variable; empty values are ignored.
    pub fn apply_legacy_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = get("ACCESS_TOKEN") {
            self.whatsapp.access_token = Some(SecretString::from(token));
        }
        if let Some(version) = get("VERSION") {
            self.whatsapp.api_version = version;
        }
        if let Some(id) = get("PHONE_NUMBER_ID") {
            self.whatsapp.phone_number_id = Some(id);
        }
        if let Some(token) = get("VERIFY_TOKEN") {
            self.whatsapp.verify_token = Some(token);
        }
        if let Some(secret) = get("APP_SECRET") {
            self.whatsapp.app_secret = Some(SecretString::from(secret));
        }
        if let Some(path) = get("SCHEDULE_CSV_PATH") {
            self.schedule.csv_path = PathBuf::from(path);
        }
    }
}
