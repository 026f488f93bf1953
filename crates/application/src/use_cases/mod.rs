pub mod analytics;
pub mod destinations;

pub use analytics::{ConditionallyLoadAnalyticsUseCase, LoadRequest};
pub use destinations::FetchDestinationsUseCase;
