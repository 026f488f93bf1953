use async_trait::async_trait;
use consent_manager_domain::{CatalogDestination, DomainError};

/// Port for the remote destination catalog.
#[async_trait]
pub trait DestinationCatalog: Send + Sync {
    /// Raw catalog entries of one project, before normalization.
    async fn fetch(&self, write_key: &str) -> Result<Vec<CatalogDestination>, DomainError>;
}
