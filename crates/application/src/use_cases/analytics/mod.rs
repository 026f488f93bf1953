mod conditionally_load_analytics;

pub use conditionally_load_analytics::{ConditionallyLoadAnalyticsUseCase, LoadRequest};
