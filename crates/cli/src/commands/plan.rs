use crate::di::{PageAdapters, UseCases};
use consent_manager_application::use_cases::LoadRequest;
use consent_manager_domain::{Config, DestinationPreferences, Integrations, LoadOutcome};
use consent_manager_infrastructure::analytics::LoadCall;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct PlanArgs {
    pub preferences: Option<PathBuf>,
    pub consent_required: Option<bool>,
    pub no_reload: bool,
}

#[derive(Serialize)]
struct PlanReport<'a> {
    #[serde(flatten)]
    outcome: &'a LoadOutcome,
    destinations: usize,
    loads: Vec<LoadCall>,
    notifications: Vec<Integrations>,
    reloads: usize,
}

fn read_preferences(path: &Path) -> anyhow::Result<DestinationPreferences> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read preferences {}: {}", path.display(), e))?;
    let preferences = serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Invalid preferences {}: {}", path.display(), e))?;
    Ok(preferences)
}

/// Dry-runs a load decision against in-process page adapters.
pub async fn plan(
    config: &Config,
    use_cases: &UseCases,
    page: &PageAdapters,
    args: PlanArgs,
) -> anyhow::Result<()> {
    let preferences = args.preferences.as_deref().map(read_preferences).transpose()?;
    let external = &config.consent.external_destinations;

    let destinations = use_cases
        .fetch_destinations
        .execute(&config.consent.write_keys(), external)
        .await?;

    let (subscription, mut notifications_rx) = page.emitter.subscribe_channel();

    let request = LoadRequest::new(&config.consent.write_key, &destinations)
        .with_preferences(preferences.as_ref())
        .with_external_destinations(external)
        .consent_required(args.consent_required.unwrap_or(config.consent.require_consent))
        .should_reload(config.consent.reload_on_change && !args.no_reload);

    let outcome = use_cases.load_analytics.execute(request)?;
    subscription.unsubscribe();

    let mut notifications = Vec::new();
    while let Ok(integrations) = notifications_rx.try_recv() {
        notifications.push(integrations);
    }

    info!(outcome = outcome.as_str(), "Load decision made");

    let report = PlanReport {
        outcome: &outcome,
        destinations: destinations.len(),
        loads: page.client.loads(),
        notifications,
        reloads: page.reloader.reload_count(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
