//! Client configuration
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `INTERMED_*` environment variables (e.g. `INTERMED_BASE_URL`,
//! `INTERMED_ACCEPT_INVALID_CERTS=true`).

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://intermed76.ru";
pub const DEFAULT_RECORD_SOURCE: &str = "intermed";
pub const DEFAULT_SCHEDULE_TABLE_RECORD_SOURCE: &str = "epgu";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:81.0) Gecko/20100101 Firefox/81.0";

/// Settings for a [`SessionClient`](crate::SessionClient).
///
/// ```rust
/// use intermed_client::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.base_url, "https://intermed76.ru");
/// assert!(!config.accept_invalid_certs);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Portal root, without a trailing path
    pub base_url: String,
    /// Skip TLS certificate validation. The portal has served a broken
    /// certificate chain in the past; keep this off unless needed.
    pub accept_invalid_certs: bool,
    /// Per-request timeout applied by the transport and the dispatcher
    pub request_timeout_secs: u64,
    /// Channel tag sent as `Record_Source`
    pub record_source: String,
    /// Channel tag the schedule table endpoint expects
    pub schedule_table_record_source: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            accept_invalid_certs: false,
            request_timeout_secs: 30,
            record_source: DEFAULT_RECORD_SOURCE.to_string(),
            schedule_table_record_source: DEFAULT_SCHEDULE_TABLE_RECORD_SOURCE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from an optional file and the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Loading client config file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("INTERMED")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.base_url()?;
        if url.host_str().is_none() {
            return Err(Error::Config(format!(
                "base_url has no host: {}",
                self.base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
