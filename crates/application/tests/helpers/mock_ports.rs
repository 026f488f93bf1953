#![allow(dead_code)]

use async_trait::async_trait;
use consent_manager_application::ports::{
    AnalyticsClient, AnalyticsHost, DestinationCatalog, ExternalDestinationNotifier, PageReloader,
};
use consent_manager_domain::{CatalogDestination, DomainError, Integrations, LoadOptions};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct LoadCall {
    pub write_key: String,
    pub options: Option<LoadOptions>,
}

/// Behaves like the real snippet: the first `load` flips `initialized`.
#[derive(Default)]
pub struct MockAnalyticsClient {
    initialized: AtomicBool,
    loads: Mutex<Vec<LoadCall>>,
}

impl MockAnalyticsClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn initialized() -> Arc<Self> {
        let client = Self::default();
        client.initialized.store(true, Ordering::SeqCst);
        Arc::new(client)
    }

    pub fn loads(&self) -> Vec<LoadCall> {
        self.loads.lock().unwrap().clone()
    }

    pub fn load_count(&self) -> usize {
        self.loads.lock().unwrap().len()
    }
}

impl AnalyticsClient for MockAnalyticsClient {
    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::SeqCst)
    }

    fn load(&self, write_key: &str, options: Option<&LoadOptions>) {
        self.loads.lock().unwrap().push(LoadCall {
            write_key: write_key.to_string(),
            options: options.cloned(),
        });
        self.initialized.store(true, Ordering::SeqCst);
    }
}

pub struct MockAnalyticsHost {
    client: Option<Arc<MockAnalyticsClient>>,
}

impl MockAnalyticsHost {
    pub fn with_client(client: Arc<MockAnalyticsClient>) -> Arc<Self> {
        Arc::new(Self {
            client: Some(client),
        })
    }

    pub fn empty() -> Arc<Self> {
        Arc::new(Self { client: None })
    }
}

impl AnalyticsHost for MockAnalyticsHost {
    fn client(&self) -> Option<Arc<dyn AnalyticsClient>> {
        self.client
            .as_ref()
            .map(|c| Arc::clone(c) as Arc<dyn AnalyticsClient>)
    }
}

#[derive(Default)]
pub struct MockNotifier {
    notifications: Mutex<Vec<Integrations>>,
}

impl MockNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notifications(&self) -> Vec<Integrations> {
        self.notifications.lock().unwrap().clone()
    }
}

impl ExternalDestinationNotifier for MockNotifier {
    fn notify(&self, integrations: &Integrations) {
        self.notifications.lock().unwrap().push(integrations.clone());
    }
}

#[derive(Default)]
pub struct MockReloader {
    reloads: AtomicUsize,
}

impl MockReloader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl PageReloader for MockReloader {
    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone)]
enum CatalogResponse {
    Destinations(Vec<CatalogDestination>),
    Status(u16),
}

/// Serves canned responses per write key, optionally after a per-key delay.
#[derive(Default)]
pub struct MockDestinationCatalog {
    responses: Mutex<HashMap<String, CatalogResponse>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
}

impl MockDestinationCatalog {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_destinations(&self, write_key: &str, destinations: Vec<CatalogDestination>) {
        self.responses.lock().unwrap().insert(
            write_key.to_string(),
            CatalogResponse::Destinations(destinations),
        );
    }

    pub fn set_status(&self, write_key: &str, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .insert(write_key.to_string(), CatalogResponse::Status(status));
    }

    pub fn set_delay(&self, write_key: &str, delay: Duration) {
        self.delays
            .lock()
            .unwrap()
            .insert(write_key.to_string(), delay);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DestinationCatalog for MockDestinationCatalog {
    async fn fetch(&self, write_key: &str) -> Result<Vec<CatalogDestination>, DomainError> {
        self.calls.lock().unwrap().push(write_key.to_string());

        let delay = self.delays.lock().unwrap().get(write_key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let response = self.responses.lock().unwrap().get(write_key).cloned();
        match response {
            Some(CatalogResponse::Destinations(destinations)) => Ok(destinations),
            Some(CatalogResponse::Status(status)) => Err(DomainError::CatalogStatus {
                write_key: write_key.to_string(),
                status,
                reason: "Mock Failure".to_string(),
            }),
            None => Err(DomainError::CatalogStatus {
                write_key: write_key.to_string(),
                status: 404,
                reason: "Not Found".to_string(),
            }),
        }
    }
}

pub fn catalog_entry(creation_name: &str) -> CatalogDestination {
    CatalogDestination {
        id: Some(format!("id-{}", creation_name.to_lowercase())),
        name: creation_name.to_string(),
        creation_name: Some(creation_name.to_string()),
        description: String::new(),
        website: String::new(),
        category: "Analytics".to_string(),
    }
}
