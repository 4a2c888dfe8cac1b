use anyhow::{Context, anyhow};
use apod_core::{
    ApodLoader, Config, HttpFetch, PageData, RouteParams, config::DEFAULT_ENDPOINT,
};
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use std::time::Duration;

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "apod", version, about = "Astronomy Picture of the Day loader")]
pub struct Cli {
    /// Log level used when RUST_LOG is not set, e.g. "debug".
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the NASA API key and endpoint.
    Configure,

    /// Load today's picture and show it.
    Show {
        /// Print the page data as JSON instead of text.
        #[arg(long)]
        json: bool,

        /// Route parameter as KEY=VALUE; accepted and passed to the loader.
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Give up on the request after this many seconds.
        #[arg(long, value_name = "SECS", default_value_t = 30)]
        timeout: u64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { json, params, timeout } => {
                show(json, params.into_iter().collect(), Duration::from_secs(timeout)).await
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("NASA API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Get one at https://api.nasa.gov; leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;

    if !api_key.trim().is_empty() {
        config.set_api_key(api_key);
    }

    let endpoint = Text::new("APOD endpoint:")
        .with_default(config.endpoint())
        .prompt()
        .context("Failed to read endpoint")?;

    let endpoint = endpoint.trim();
    config.endpoint = (!endpoint.is_empty() && endpoint != DEFAULT_ENDPOINT)
        .then(|| endpoint.to_string());

    ApodLoader::from_config(&config)?;

    let path = config.save()?;
    tracing::info!(path = %path.display(), "configuration saved");
    println!("Configuration saved to {}", path.display());

    Ok(())
}

async fn show(json: bool, params: RouteParams, timeout: Duration) -> anyhow::Result<()> {
    let config = Config::load_with_env()?;
    let loader = ApodLoader::from_config(&config)?;
    let fetch = HttpFetch::with_timeout(timeout).context("Failed to build HTTP client")?;

    tracing::debug!(
        custom_key = config.has_api_key(),
        params = params.len(),
        "loading page data"
    );

    let data = loader
        .load(&fetch, &params)
        .await
        .context("Failed to load the Astronomy Picture of the Day")?;

    if json {
        println!("{}", render::render_json(&data)?);
    }

    match &data {
        PageData::Loaded { apod } => {
            if !json {
                println!("{}", render::render_apod(apod));
            }
            Ok(())
        }
        PageData::Failed { status, error } => Err(anyhow!(render::render_failure(*status, error))),
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty parameter name in '{raw}'"));
    }

    Ok((key.to_string(), value.to_string()))
}
