use crate::di::UseCases;
use consent_manager_domain::Config;
use tracing::info;

pub async fn fetch(config: &Config, use_cases: &UseCases) -> anyhow::Result<()> {
    let write_keys = config.consent.write_keys();
    info!(projects = write_keys.len(), catalog = %config.catalog.base_url, "Fetching destinations");

    let destinations = use_cases
        .fetch_destinations
        .execute(&write_keys, &config.consent.external_destinations)
        .await?;

    println!("{}", serde_json::to_string_pretty(&destinations)?);
    Ok(())
}
