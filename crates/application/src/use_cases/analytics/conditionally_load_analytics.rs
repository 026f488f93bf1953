use crate::ports::{AnalyticsClient, AnalyticsHost, ExternalDestinationNotifier, PageReloader};
use consent_manager_domain::{
    CatalogDestination, Destination, DestinationPreferences, DomainError, Integrations,
    LoadOptions, LoadOutcome,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Inputs of one load decision.
#[derive(Debug, Clone, Copy)]
pub struct LoadRequest<'a> {
    pub write_key: &'a str,
    pub destinations: &'a [Destination],
    pub preferences: Option<&'a DestinationPreferences>,
    pub external_destinations: &'a [CatalogDestination],
    pub consent_required: bool,
    pub should_reload: bool,
}

impl<'a> LoadRequest<'a> {
    /// Consent required, no preferences, no external destinations, reload enabled.
    pub fn new(write_key: &'a str, destinations: &'a [Destination]) -> Self {
        Self {
            write_key,
            destinations,
            preferences: None,
            external_destinations: &[],
            consent_required: true,
            should_reload: true,
        }
    }

    pub fn with_preferences(mut self, preferences: Option<&'a DestinationPreferences>) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn with_external_destinations(mut self, external: &'a [CatalogDestination]) -> Self {
        self.external_destinations = external;
        self
    }

    pub fn consent_required(mut self, required: bool) -> Self {
        self.consent_required = required;
        self
    }

    pub fn should_reload(mut self, reload: bool) -> Self {
        self.should_reload = reload;
        self
    }
}

/// Decides whether and how the analytics snippet gets loaded for the
/// preferences at hand.
pub struct ConditionallyLoadAnalyticsUseCase {
    host: Arc<dyn AnalyticsHost>,
    notifier: Arc<dyn ExternalDestinationNotifier>,
    reloader: Arc<dyn PageReloader>,
}

impl ConditionallyLoadAnalyticsUseCase {
    pub fn new(
        host: Arc<dyn AnalyticsHost>,
        notifier: Arc<dyn ExternalDestinationNotifier>,
        reloader: Arc<dyn PageReloader>,
    ) -> Self {
        Self {
            host,
            notifier,
            reloader,
        }
    }

    pub fn execute(&self, request: LoadRequest<'_>) -> Result<LoadOutcome, DomainError> {
        let preferences = request.preferences.filter(|p| !p.is_empty());

        let Some(preferences) = preferences else {
            return self.load_without_preferences(&request);
        };

        let mut integrations = Integrations::consent_filter();
        let mut anything_enabled = false;
        for destination in request.destinations {
            let enabled = preferences.is_enabled(&destination.id);
            anything_enabled |= enabled;
            integrations.insert(destination.id.clone(), enabled);
        }

        let client = self.host.client();

        // The snippet cannot be reconfigured in place; new preferences need a fresh page.
        if client.as_ref().is_some_and(|c| c.is_initialized()) {
            if request.should_reload {
                info!(
                    write_key = %request.write_key,
                    "Analytics already initialized, reloading page to apply preferences"
                );
                self.reloader.reload();
                return Ok(LoadOutcome::Reloaded);
            }
            debug!("Analytics already initialized, reload disabled");
            return Ok(LoadOutcome::ReloadSuppressed);
        }

        if !anything_enabled {
            debug!(
                destinations = request.destinations.len(),
                "All destinations disabled, analytics not loaded"
            );
            return Ok(LoadOutcome::NothingEnabled);
        }

        let client = client.ok_or(DomainError::AnalyticsClientMissing)?;
        let options = LoadOptions::new(integrations);
        client.load(request.write_key, Some(&options));

        info!(
            write_key = %request.write_key,
            enabled = options.integrations.enabled_count(),
            total = options.integrations.len(),
            "Analytics loaded with consent filter"
        );

        self.notifier
            .notify(&options.integrations.external_subset(request.external_destinations));

        Ok(LoadOutcome::Loaded {
            integrations: options.integrations,
        })
    }

    fn load_without_preferences(&self, request: &LoadRequest<'_>) -> Result<LoadOutcome, DomainError> {
        if request.consent_required {
            debug!("No preferences stored yet, waiting for consent");
            return Ok(LoadOutcome::AwaitingConsent);
        }

        let client = self.require_client()?;
        if client.is_initialized() {
            debug!("Analytics already initialized, nothing to do");
            return Ok(LoadOutcome::AlreadyLoaded);
        }

        client.load(request.write_key, None);
        info!(
            write_key = %request.write_key,
            "Consent not required, analytics loaded without filter"
        );

        self.notifier
            .notify(&Integrations::all_external(request.external_destinations));

        Ok(LoadOutcome::LoadedUnfiltered)
    }

    fn require_client(&self) -> Result<Arc<dyn AnalyticsClient>, DomainError> {
        self.host.client().ok_or(DomainError::AnalyticsClientMissing)
    }
}
