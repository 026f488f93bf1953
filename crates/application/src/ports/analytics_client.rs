use consent_manager_domain::LoadOptions;
use std::sync::Arc;

/// Port for the analytics snippet running in the host page.
pub trait AnalyticsClient: Send + Sync {
    fn is_initialized(&self) -> bool;

    /// `options` of `None` loads every integration enabled in the project.
    fn load(&self, write_key: &str, options: Option<&LoadOptions>);
}

/// Port for the environment that may or may not have an analytics client installed.
pub trait AnalyticsHost: Send + Sync {
    fn client(&self) -> Option<Arc<dyn AnalyticsClient>>;
}
