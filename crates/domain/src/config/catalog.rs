use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::errors::ConfigError;

/// Remote destination catalog settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Scheme and host of the catalog CDN, without a trailing path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `GET` target listing the integrations of one project. The key is
    /// inserted verbatim; callers check it with [`super::is_valid_write_key`].
    pub fn integrations_url(&self, write_key: &str) -> String {
        format!(
            "{}/v1/projects/{}/integrations",
            self.base_url.trim_end_matches('/'),
            write_key
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "Catalog base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Catalog timeout_secs cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "https://cdn.segment.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("consent-manager/{}", env!("CARGO_PKG_VERSION"))
}
