use consent_manager_domain::Config;
use tracing::info;

pub fn check_config(config: &Config, config_path: Option<&str>) -> anyhow::Result<()> {
    config.validate()?;
    config.consent.validate_widget()?;

    let source = Config::resolve_config_path(config_path).unwrap_or_else(|| "defaults".to_string());
    info!(source = %source, "Configuration is valid");

    println!(
        "Configuration OK ({} project(s), {} external destination(s), close behavior: {})",
        config.consent.write_keys().len(),
        config.consent.external_destinations.len(),
        config
            .consent
            .close_behavior()?
            .map(|b| b.to_string())
            .unwrap_or_else(|| "default".to_string())
    );
    Ok(())
}
