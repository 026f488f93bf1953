use consent_manager_application::ports::PageReloader;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Page reloader for environments without a document to navigate.
#[derive(Debug, Default)]
pub struct RecordingPageReloader {
    reloads: AtomicUsize,
}

impl RecordingPageReloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reload_count(&self) -> usize {
        self.reloads.load(Ordering::Relaxed)
    }
}

impl PageReloader for RecordingPageReloader {
    fn reload(&self) {
        let count = self.reloads.fetch_add(1, Ordering::Relaxed) + 1;
        info!(count, "Page reload requested");
    }
}
