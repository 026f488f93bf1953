use clap::{Parser, Subcommand};
use consent_manager_domain::CliOverrides;
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "consent-manager")]
#[command(version)]
#[command(about = "Consent manager - destination catalog and analytics load decisions")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Primary project write key
    #[arg(short = 'k', long, global = true)]
    write_key: Option<String>,

    /// Additional project write keys (repeatable)
    #[arg(long = "other-write-key", value_name = "KEY", global = true)]
    other_write_keys: Vec<String>,

    /// Destination catalog base URL
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch, merge and print the destination list
    Fetch,

    /// Dry-run the analytics load decision for a set of preferences
    Plan {
        /// JSON object of destination id to true/false/null
        #[arg(short = 'p', long, value_name = "FILE")]
        preferences: Option<PathBuf>,

        /// Pretend analytics was already initialized on this page
        #[arg(long)]
        initialized: bool,

        /// Never request a page reload
        #[arg(long)]
        no_reload: bool,

        /// Override consent.require_consent
        #[arg(long, value_name = "BOOL")]
        consent_required: Option<bool>,
    },

    /// Validate every widget input in the configuration
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        write_key: cli.write_key.clone(),
        other_write_keys: cli.other_write_keys.clone(),
        catalog_url: cli.catalog_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting consent-manager v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::CheckConfig => commands::check_config(&config, cli.config.as_deref()),
        Command::Fetch => {
            config.validate()?;
            let page = di::PageAdapters::new(false);
            let use_cases = di::UseCases::new(&config, &page)?;
            commands::fetch(&config, &use_cases).await
        }
        Command::Plan {
            preferences,
            initialized,
            no_reload,
            consent_required,
        } => {
            config.validate()?;
            let page = di::PageAdapters::new(initialized);
            let use_cases = di::UseCases::new(&config, &page)?;
            let args = commands::PlanArgs {
                preferences,
                consent_required,
                no_reload,
            };
            commands::plan(&config, &use_cases, &page, args).await
        }
    }
}
