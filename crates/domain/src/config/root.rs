use serde::{Deserialize, Serialize};

use super::catalog::CatalogConfig;
use super::consent::ConsentConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "consent-manager.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/consent-manager/config.toml";

/// Main configuration structure for the consent manager
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Destination catalog endpoint
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Widget inputs and loader behavior
    #[serde(default)]
    pub consent: ConsentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. consent-manager.toml in current directory
    /// 3. /etc/consent-manager/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match Self::resolve_config_path(path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(write_key) = overrides.write_key {
            self.consent.write_key = write_key;
        }
        if !overrides.other_write_keys.is_empty() {
            self.consent.other_write_keys = overrides.other_write_keys;
        }
        if let Some(url) = overrides.catalog_url {
            self.catalog.base_url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate what the loader core needs; widget inputs are checked by
    /// [`ConsentConfig::validate_widget`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;
        self.consent.validate()?;
        Ok(())
    }

    /// File `load` reads for the given `--config` value, if any.
    pub fn resolve_config_path(path: Option<&str>) -> Option<String> {
        path.map(str::to_string).or_else(Self::get_config_path)
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub write_key: Option<String>,
    pub other_write_keys: Vec<String>,
    pub catalog_url: Option<String>,
    pub log_level: Option<String>,
}
