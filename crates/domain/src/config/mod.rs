pub mod catalog;
pub mod consent;
pub mod errors;
pub mod logging;
pub mod root;

pub use catalog::CatalogConfig;
pub use consent::{is_valid_write_key, CloseBehavior, ConsentConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
