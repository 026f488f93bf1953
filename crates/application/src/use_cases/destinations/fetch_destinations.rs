use crate::ports::DestinationCatalog;
use consent_manager_domain::{normalize_destinations, CatalogDestination, Destination, DomainError};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct FetchDestinationsUseCase {
    catalog: Arc<dyn DestinationCatalog>,
}

impl FetchDestinationsUseCase {
    pub fn new(catalog: Arc<dyn DestinationCatalog>) -> Self {
        Self { catalog }
    }

    /// Fetches every project's destinations concurrently and merges them with
    /// `external_destinations` into one sorted, deduplicated list.
    ///
    /// Any failing project fails the whole call. When several fail, the error
    /// of the first one in `write_keys` order is returned.
    #[instrument(skip(self, external_destinations), fields(projects = write_keys.len()))]
    pub async fn execute(
        &self,
        write_keys: &[String],
        external_destinations: &[CatalogDestination],
    ) -> Result<Vec<Destination>, DomainError> {
        if write_keys.is_empty() {
            return Err(DomainError::MissingWriteKey);
        }

        let requests = write_keys.iter().map(|write_key| {
            let catalog = Arc::clone(&self.catalog);
            async move { catalog.fetch(write_key).await }
        });

        let mut records = Vec::new();
        for (write_key, result) in write_keys.iter().zip(join_all(requests).await) {
            match result {
                Ok(batch) => {
                    debug!(write_key = %write_key, count = batch.len(), "Fetched project destinations");
                    records.extend(batch);
                }
                Err(e) => {
                    warn!(write_key = %write_key, error = %e, "Failed to fetch project destinations");
                    return Err(e);
                }
            }
        }

        let fetched = records.len();
        records.extend(external_destinations.iter().cloned());

        let destinations = normalize_destinations(records);

        info!(
            fetched,
            external = external_destinations.len(),
            destinations = destinations.len(),
            "Destination catalog assembled"
        );

        Ok(destinations)
    }
}
