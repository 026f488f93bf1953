use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-destination consent flags as stored by the consent UI.
///
/// Each entry is tri-state: `Some(true)`, `Some(false)` or `None` (stored as
/// JSON `null`). Lookups treat a missing key like `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DestinationPreferences(BTreeMap<String, Option<bool>>);

impl DestinationPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: impl Into<String>, enabled: Option<bool>) {
        self.0.insert(id.into(), enabled);
    }

    pub fn with(mut self, id: impl Into<String>, enabled: bool) -> Self {
        self.set(id, Some(enabled));
        self
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.0.get(id).copied().flatten()
    }

    /// Coerces the stored flag to a boolean; absent and unset both mean disabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id).unwrap_or(false)
    }

    pub fn any_enabled(&self) -> bool {
        self.0.values().any(|v| *v == Some(true))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for DestinationPreferences {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v)))
                .collect(),
        )
    }
}
