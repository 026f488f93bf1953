//! Destination catalog served over HTTP(S) by the analytics CDN.
//!
//! ```text
//! GET {base_url}/v1/projects/{write_key}/integrations
//! 200 OK
//! [{"creationName": "Amplitude", "name": "Amplitude", "category": "Analytics", ...}]
//! ```

use async_trait::async_trait;
use consent_manager_application::ports::DestinationCatalog;
use consent_manager_domain::{is_valid_write_key, CatalogConfig, CatalogDestination, DomainError};
use tracing::debug;

pub struct HttpDestinationCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpDestinationCatalog {
    pub fn new(config: CatalogConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config))
    }

    /// Reuses an existing client, sharing its connection pool.
    pub fn with_client(client: reqwest::Client, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl DestinationCatalog for HttpDestinationCatalog {
    async fn fetch(&self, write_key: &str) -> Result<Vec<CatalogDestination>, DomainError> {
        if write_key.is_empty() {
            return Err(DomainError::MissingWriteKey);
        }
        if !is_valid_write_key(write_key) {
            return Err(DomainError::InvalidWriteKey(write_key.to_string()));
        }

        let url = self.config.integrations_url(write_key);
        debug!(url = %url, "Fetching project integrations");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::CatalogRequest {
                write_key: write_key.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::CatalogStatus {
                write_key: write_key.to_string(),
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::CatalogRequest {
                write_key: write_key.to_string(),
                reason: e.to_string(),
            })?;

        let destinations: Vec<CatalogDestination> =
            serde_json::from_str(&body).map_err(|e| DomainError::CatalogDecode {
                write_key: write_key.to_string(),
                reason: e.to_string(),
            })?;

        debug!(
            write_key = %write_key,
            count = destinations.len(),
            "Project integrations received"
        );

        Ok(destinations)
    }
}
