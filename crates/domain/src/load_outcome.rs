use serde::Serialize;

use crate::integrations::Integrations;

/// What a load decision did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoadOutcome {
    /// No preferences yet and consent is required; nothing was touched.
    AwaitingConsent,
    /// No preferences and consent not required; loaded without a filter.
    LoadedUnfiltered,
    /// No preferences and the client was already running.
    AlreadyLoaded,
    /// Client already initialized with preferences present; page reload requested.
    Reloaded,
    /// Client already initialized and reloading was disabled by the caller.
    ReloadSuppressed,
    /// Loaded with a consent filter.
    Loaded { integrations: Integrations },
    /// Preferences present but every destination is disabled.
    NothingEnabled,
}

impl LoadOutcome {
    pub fn did_load(&self) -> bool {
        matches!(self, LoadOutcome::LoadedUnfiltered | LoadOutcome::Loaded { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoadOutcome::AwaitingConsent => "awaiting_consent",
            LoadOutcome::LoadedUnfiltered => "loaded_unfiltered",
            LoadOutcome::AlreadyLoaded => "already_loaded",
            LoadOutcome::Reloaded => "reloaded",
            LoadOutcome::ReloadSuppressed => "reload_suppressed",
            LoadOutcome::Loaded { .. } => "loaded",
            LoadOutcome::NothingEnabled => "nothing_enabled",
        }
    }
}
