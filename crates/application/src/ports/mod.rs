mod analytics_client;
mod destination_catalog;
mod external_destination_notifier;
mod page_reloader;

pub use analytics_client::{AnalyticsClient, AnalyticsHost};
pub use destination_catalog::DestinationCatalog;
pub use external_destination_notifier::ExternalDestinationNotifier;
pub use page_reloader::PageReloader;
