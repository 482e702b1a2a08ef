use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::{
    config::{API_KEY_ENV_VAR, EstimateConfig, resolve_api_key},
    estimate::EstimateArgs,
    prompt::Prompter,
    settings::SettingsStore,
};

mod config;
mod estimate;
mod parsers;
mod prompt;
mod report;
mod settings;

#[derive(Parser)]
#[clap(author, version, about = "Estimates travel departure time using Google APIs", long_about = None)]
struct Cli {
    #[command(flatten)]
    estimate: EstimateArgs,

    /// Update saved settings
    #[arg(short, long)]
    update: bool,

    /// Settings file (default: ~/.travest-settings.json)
    #[arg(long)]
    settings: Option<PathBuf>,

    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", err);
    }

    let store = SettingsStore::new(match cli.settings {
        Some(path) => path,
        None => SettingsStore::default_path()?,
    });
    let mut prompter = Prompter::stdio();

    if cli.update {
        store.update(&mut prompter)?;
        return Ok(());
    }

    let api_key = resolve_api_key(
        cli.estimate.api_key.as_deref(),
        std::env::var(API_KEY_ENV_VAR).ok(),
        &store,
        &mut prompter,
    )?;

    let today = jiff::Zoned::now().date();
    let config = EstimateConfig::resolve(&cli.estimate, api_key, today, &mut prompter)?;

    estimate::run(config, cli.estimate.json).await
}
