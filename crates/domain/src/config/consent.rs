use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::ConfigError;
use crate::destination::CatalogDestination;

/// What closing the banner without an explicit choice means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseBehavior {
    Accept,
    Deny,
    Dismiss,
}

impl CloseBehavior {
    pub const ALL: [CloseBehavior; 3] = [
        CloseBehavior::Accept,
        CloseBehavior::Deny,
        CloseBehavior::Dismiss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CloseBehavior::Accept => "accept",
            CloseBehavior::Deny => "deny",
            CloseBehavior::Dismiss => "dismiss",
        }
    }

    fn options() -> String {
        Self::ALL
            .iter()
            .map(CloseBehavior::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for CloseBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CloseBehavior {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| {
                ConfigError::Validation(format!(
                    "ConsentManager: closeBehavior should be one of {}",
                    Self::options()
                ))
            })
    }
}

/// Inputs of the consent widget and of the analytics loader decision
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsentConfig {
    /// CSS selector of the element the widget mounts into
    #[serde(default)]
    pub container: String,

    /// Primary project write key
    #[serde(default)]
    pub write_key: String,

    /// Additional projects whose destinations are listed alongside the primary one
    #[serde(default)]
    pub other_write_keys: Vec<String>,

    #[serde(default = "default_true")]
    pub require_consent: bool,

    /// Reload the page when preferences change after analytics was initialized
    #[serde(default = "default_true")]
    pub reload_on_change: bool,

    /// Accepts a boolean or the strings "true"/"false"
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub imply_consent_on_interaction: bool,

    #[serde(default)]
    pub close_behavior: Option<String>,

    #[serde(default)]
    pub cookie_domain: Option<String>,

    #[serde(default)]
    pub banner_content: String,

    #[serde(default)]
    pub banner_sub_content: Option<String>,

    #[serde(default)]
    pub banner_text_color: Option<String>,

    #[serde(default)]
    pub banner_background_color: Option<String>,

    #[serde(default)]
    pub preferences_dialog_title: Option<String>,

    #[serde(default)]
    pub preferences_dialog_content: String,

    #[serde(default)]
    pub cancel_dialog_title: Option<String>,

    #[serde(default)]
    pub cancel_dialog_content: String,

    /// Destinations loaded by the embedder itself rather than by the analytics snippet
    #[serde(default)]
    pub external_destinations: Vec<CatalogDestination>,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            container: String::new(),
            write_key: String::new(),
            other_write_keys: Vec::new(),
            require_consent: true,
            reload_on_change: true,
            imply_consent_on_interaction: false,
            close_behavior: None,
            cookie_domain: None,
            banner_content: String::new(),
            banner_sub_content: None,
            banner_text_color: None,
            banner_background_color: None,
            preferences_dialog_title: None,
            preferences_dialog_content: String::new(),
            cancel_dialog_title: None,
            cancel_dialog_content: String::new(),
            external_destinations: Vec::new(),
        }
    }
}

impl ConsentConfig {
    /// Primary write key first, then the others in configured order.
    pub fn write_keys(&self) -> Vec<String> {
        std::iter::once(&self.write_key)
            .chain(self.other_write_keys.iter())
            .filter(|k| !k.is_empty())
            .cloned()
            .collect()
    }

    pub fn close_behavior(&self) -> Result<Option<CloseBehavior>, ConfigError> {
        self.close_behavior
            .as_deref()
            .map(CloseBehavior::from_str)
            .transpose()
    }

    /// Checks what the loader and the fetcher need.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.write_key.is_empty() {
            return Err(required("writeKey"));
        }
        if self.other_write_keys.iter().any(|k| k.is_empty()) {
            return Err(ConfigError::Validation(
                "ConsentManager: otherWriteKeys cannot contain empty keys".to_string(),
            ));
        }
        if let Some(key) = self.write_keys().into_iter().find(|k| !is_valid_write_key(k)) {
            return Err(ConfigError::Validation(format!(
                "ConsentManager: write key '{}' contains characters other than letters, digits, '-' and '_'",
                key
            )));
        }
        Ok(())
    }

    /// Full check of the inputs the widget needs before it can render.
    pub fn validate_widget(&self) -> Result<(), ConfigError> {
        if self.container.is_empty() {
            return Err(required("container"));
        }
        self.validate()?;
        if self.banner_content.is_empty() {
            return Err(required("bannerContent"));
        }
        if self.preferences_dialog_content.is_empty() {
            return Err(required("preferencesDialogContent"));
        }
        if self.cancel_dialog_content.is_empty() {
            return Err(required("cancelDialogContent"));
        }
        self.close_behavior()?;
        Ok(())
    }
}

fn required(field: &str) -> ConfigError {
    ConfigError::Validation(format!("ConsentManager: {} is required", field))
}

/// Write keys end up as a URL path segment and must not alter the request target.
pub fn is_valid_write_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Text(String),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FlagValue::deserialize(deserializer)? {
        FlagValue::Bool(b) => b,
        FlagValue::Text(s) => s == "true",
    })
}
