use consent_manager_application::ports::{AnalyticsClient, AnalyticsHost};
use std::sync::{Arc, RwLock};

/// Holds the analytics client of the host environment, if one is installed.
#[derive(Default)]
pub struct AnalyticsSlot {
    client: RwLock<Option<Arc<dyn AnalyticsClient>>>,
}

impl AnalyticsSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_client(client: Arc<dyn AnalyticsClient>) -> Self {
        Self {
            client: RwLock::new(Some(client)),
        }
    }

    pub fn install(&self, client: Arc<dyn AnalyticsClient>) {
        let mut slot = self.client.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(client);
    }

    pub fn uninstall(&self) -> Option<Arc<dyn AnalyticsClient>> {
        self.client
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }

    pub fn is_installed(&self) -> bool {
        self.client
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl AnalyticsHost for AnalyticsSlot {
    fn client(&self) -> Option<Arc<dyn AnalyticsClient>> {
        self.client
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
