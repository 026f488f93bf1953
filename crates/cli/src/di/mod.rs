use consent_manager_application::use_cases::{ConditionallyLoadAnalyticsUseCase, FetchDestinationsUseCase};
use consent_manager_domain::Config;
use consent_manager_infrastructure::analytics::{AnalyticsSlot, RecordingAnalyticsClient};
use consent_manager_infrastructure::catalog::HttpDestinationCatalog;
use consent_manager_infrastructure::events::LoadExternalDestinationsEmitter;
use consent_manager_infrastructure::navigation::RecordingPageReloader;
use std::sync::Arc;

/// In-process stand-ins for the page the widget would run in.
pub struct PageAdapters {
    pub client: Arc<RecordingAnalyticsClient>,
    pub emitter: LoadExternalDestinationsEmitter,
    pub reloader: Arc<RecordingPageReloader>,
}

impl PageAdapters {
    pub fn new(initialized: bool) -> Self {
        let client = if initialized {
            RecordingAnalyticsClient::already_initialized()
        } else {
            RecordingAnalyticsClient::new()
        };

        Self {
            client: Arc::new(client),
            emitter: LoadExternalDestinationsEmitter::new(),
            reloader: Arc::new(RecordingPageReloader::new()),
        }
    }
}

pub struct UseCases {
    pub fetch_destinations: Arc<FetchDestinationsUseCase>,
    pub load_analytics: Arc<ConditionallyLoadAnalyticsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, page: &PageAdapters) -> anyhow::Result<Self> {
        let catalog = Arc::new(HttpDestinationCatalog::new(config.catalog.clone())?);
        let slot = Arc::new(AnalyticsSlot::with_client(page.client.clone()));

        Ok(Self {
            fetch_destinations: Arc::new(FetchDestinationsUseCase::new(catalog)),
            load_analytics: Arc::new(ConditionallyLoadAnalyticsUseCase::new(
                slot,
                Arc::new(page.emitter.clone()),
                page.reloader.clone(),
            )),
        })
    }
}
