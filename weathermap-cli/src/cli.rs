use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};
use tracing_subscriber::EnvFilter;
use weathermap_core::{
    Config, DecodeOptions, OpenWeatherClient, PlaceCatalog, Units, decode_with, fetch_snapshot,
};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathermap", version, about = "Current, hourly and daily weather for a city")]
pub struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key, default city and units.
    Configure,

    /// Show weather for a city.
    Show {
        /// City name; defaults to the configured city.
        city: Option<String>,

        /// Number of hourly entries to print.
        #[arg(long, default_value_t = 3)]
        hours: usize,

        /// Number of daily entries to print.
        #[arg(long, default_value_t = 7)]
        days: usize,

        /// Print the decoded snapshot as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Decode a One Call payload saved to a file.
    Decode {
        file: PathBuf,

        /// Reject unrecognized condition categories.
        #[arg(long)]
        strict: bool,

        /// Also check values against plausible ranges.
        #[arg(long)]
        validate: bool,

        #[arg(long)]
        json: bool,
    },

    /// List points of interest for a city.
    Places {
        /// City name; defaults to the configured city.
        city: Option<String>,

        /// Catalog file; defaults to `places_catalog` from config.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                city,
                hours,
                days,
                json,
            } => {
                let config = Config::load()?;
                let city = city.unwrap_or_else(|| config.default_city.clone());
                let client = OpenWeatherClient::from_config(&config)?;
                tracing::debug!(city = %city, units = %config.units, "showing weather");

                let snapshot = fetch_snapshot(&client, &client, &city).await?;

                if json {
                    println!("{}", output::render_json(&snapshot)?);
                } else {
                    print!(
                        "{}",
                        output::render_snapshot(&city, &snapshot, hours, days, config.units)
                    );
                }
                Ok(())
            }
            Command::Decode {
                file,
                strict,
                validate,
                json,
            } => {
                let raw = fs::read(&file)
                    .with_context(|| format!("Failed to read payload file: {}", file.display()))?;

                let options = if strict {
                    DecodeOptions::strict()
                } else {
                    DecodeOptions::default()
                };
                let snapshot = decode_with(&raw, &options)
                    .with_context(|| format!("Failed to decode {}", file.display()))?;

                if validate {
                    snapshot.validate()?;
                }

                if json {
                    println!("{}", output::render_json(&snapshot)?);
                } else {
                    let label = file.display().to_string();
                    print!(
                        "{}",
                        output::render_snapshot(&label, &snapshot, usize::MAX, usize::MAX, Units::Metric)
                    );
                }
                Ok(())
            }
            Command::Places { city, catalog } => {
                let config = Config::load()?;
                let city = city.unwrap_or_else(|| config.default_city.clone());
                let path = catalog.or(config.places_catalog).ok_or_else(|| {
                    anyhow!(
                        "No places catalog configured.\n\
                         Hint: pass --catalog <FILE> or set `places_catalog` in the config file."
                    )
                })?;

                let catalog = PlaceCatalog::load(&path)?;
                print!("{}", output::render_places(&city, &catalog.for_city(&city)));
                Ok(())
            }
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }

    config.default_city = inquire::Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;

    let start = Units::all()
        .iter()
        .position(|u| *u == config.units)
        .unwrap_or(0);
    config.units = inquire::Select::new("Units:", Units::all().to_vec())
        .with_starting_cursor(start)
        .prompt()
        .context("Failed to read units")?;

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}
