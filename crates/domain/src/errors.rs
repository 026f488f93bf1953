use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("At least one write key is required")]
    MissingWriteKey,

    #[error("Invalid write key '{0}': only ASCII letters, digits, '-' and '_' are allowed")]
    InvalidWriteKey(String),

    #[error("Failed to fetch integrations for write key {write_key}: {reason}")]
    CatalogRequest { write_key: String, reason: String },

    #[error("Failed to fetch integrations for write key {write_key}: HTTP {status} {reason}")]
    CatalogStatus {
        write_key: String,
        status: u16,
        reason: String,
    },

    #[error("Invalid integrations payload for write key {write_key}: {reason}")]
    CatalogDecode { write_key: String, reason: String },

    #[error("Analytics client not present")]
    AnalyticsClientMissing,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Write key of the catalog request that produced this error, if any.
    pub fn write_key(&self) -> Option<&str> {
        match self {
            DomainError::CatalogRequest { write_key, .. }
            | DomainError::CatalogStatus { write_key, .. }
            | DomainError::CatalogDecode { write_key, .. } => Some(write_key),
            _ => None,
        }
    }
}
