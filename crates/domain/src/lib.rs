//! Consent Manager Domain Layer
pub mod config;
pub mod destination;
pub mod errors;
pub mod integrations;
pub mod load_outcome;
pub mod preferences;

pub use config::{is_valid_write_key, CatalogConfig, CliOverrides, Config, ConfigError, ConsentConfig, LoggingConfig};
pub use destination::{normalize_destinations, CatalogDestination, Destination, PLACEHOLDER_DESTINATION_ID};
pub use errors::DomainError;
pub use integrations::{Integrations, LoadOptions, ALL_INTEGRATIONS_KEY, FIRST_PARTY_INTEGRATION};
pub use load_outcome::LoadOutcome;
pub use preferences::DestinationPreferences;
