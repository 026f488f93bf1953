use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::destination::CatalogDestination;

/// Catch-all switch of the analytics loader.
pub const ALL_INTEGRATIONS_KEY: &str = "All";

/// First-party channel that is always delivered regardless of consent.
pub const FIRST_PARTY_INTEGRATION: &str = "Segment.io";

/// Integration id to enabled flag, as understood by the analytics loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Integrations(BTreeMap<String, bool>);

impl Integrations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter base for a consent-driven load: everything off except the
    /// first-party channel.
    pub fn consent_filter() -> Self {
        let mut integrations = Self::new();
        integrations.insert(ALL_INTEGRATIONS_KEY, false);
        integrations.insert(FIRST_PARTY_INTEGRATION, true);
        integrations
    }

    /// Every external destination switched on, keyed by its creation name.
    pub fn all_external(external_destinations: &[CatalogDestination]) -> Self {
        Self(
            external_destinations
                .iter()
                .filter_map(CatalogDestination::integration_name)
                .map(|name| (name.to_string(), true))
                .collect(),
        )
    }

    /// Entries whose key is the creation name of one of `external_destinations`.
    pub fn external_subset(&self, external_destinations: &[CatalogDestination]) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(id, _)| {
                    external_destinations
                        .iter()
                        .any(|d| d.integration_name() == Some(id.as_str()))
                })
                .map(|(id, enabled)| (id.clone(), *enabled))
                .collect(),
        )
    }

    pub fn insert(&mut self, id: impl Into<String>, enabled: bool) {
        self.0.insert(id.into(), enabled);
    }

    pub fn get(&self, id: &str) -> Option<bool> {
        self.0.get(id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn enabled_count(&self) -> usize {
        self.0.values().filter(|v| **v).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Integrations {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Second argument of the analytics `load` entry point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoadOptions {
    pub integrations: Integrations,
}

impl LoadOptions {
    pub fn new(integrations: Integrations) -> Self {
        Self { integrations }
    }
}
