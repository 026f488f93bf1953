use consent_manager_application::ports::AnalyticsClient;
use consent_manager_domain::LoadOptions;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadCall {
    pub write_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<LoadOptions>,
}

/// Analytics client that records load calls instead of injecting a script.
///
/// Mirrors the snippet's lifecycle: the first `load` marks it initialized.
#[derive(Debug, Default)]
pub struct RecordingAnalyticsClient {
    initialized: AtomicBool,
    loads: Mutex<Vec<LoadCall>>,
}

impl RecordingAnalyticsClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client that behaves as if a previous page load already initialized it.
    pub fn already_initialized() -> Self {
        let client = Self::default();
        client.initialized.store(true, Ordering::Release);
        client
    }

    pub fn loads(&self) -> Vec<LoadCall> {
        self.loads.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl AnalyticsClient for RecordingAnalyticsClient {
    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    fn load(&self, write_key: &str, options: Option<&LoadOptions>) {
        info!(
            write_key = %write_key,
            filtered = options.is_some(),
            "Analytics load requested"
        );
        self.loads
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LoadCall {
                write_key: write_key.to_string(),
                options: options.cloned(),
            });
        self.initialized.store(true, Ordering::Release);
    }
}
