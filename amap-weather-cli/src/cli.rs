use amap_weather_core::{OutputFormat, WeatherClient, WeatherType};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Password, PasswordDisplayMode};
use tracing::info;

use crate::{config::Config, output};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "amap-weather", version, about = "AMap weather CLI")]
pub struct Cli {
    /// API key to use instead of the configured one.
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and request timeout.
    Configure,

    /// Show live weather for a city.
    Live {
        /// City name or adcode, e.g. "深圳" or "440300".
        city: String,
    },

    /// Show the forecast for a city.
    Forecast {
        city: String,
    },

    /// Print the raw API response.
    Query {
        city: String,

        /// Report type: base (live) or all (forecast).
        #[arg(long = "type", default_value = "base")]
        weather_type: WeatherType,

        /// Response format: json or xml.
        #[arg(long, default_value = "json")]
        format: OutputFormat,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let Cli { key, command, .. } = self;

        match command {
            Command::Configure => configure()?,
            Command::Live { city } => {
                let map = build_client(key)?.get_live_weather(&city).await?;
                let report = output::report_from_map(&map)?;
                for live in &report.lives {
                    print!("{}", output::format_live(live));
                }
            }
            Command::Forecast { city } => {
                let map = build_client(key)?.get_forecasts_weather(&city).await?;
                let report = output::report_from_map(&map)?;
                for forecast in &report.forecasts {
                    print!("{}", output::format_forecast(forecast));
                }
            }
            Command::Query { city, weather_type, format } => {
                let result = build_client(key)?.query(&city, weather_type, format).await?;
                println!("{}", output::format_raw(&result)?);
            }
        }

        Ok(())
    }
}

fn build_client(key: Option<String>) -> Result<WeatherClient> {
    let config = Config::load()?;
    let api_key = match key {
        Some(key) => key,
        None => config.api_key()?.to_owned(),
    };

    Ok(WeatherClient::with_options(api_key, config.transport_options())?)
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("AMap API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;
    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds:")
        .with_help_message("Leave empty to keep the HTTP client default")
        .prompt_skippable()
        .context("Failed to read timeout")?;

    config.api_key = Some(api_key.to_string());
    config.timeout_secs = timeout_secs;
    config.save()?;

    let path = Config::config_file_path()?;
    info!(path = %path.display(), "Saved configuration");
    println!("Saved configuration to {}", path.display());

    Ok(())
}
