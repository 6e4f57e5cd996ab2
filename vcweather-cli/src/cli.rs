use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use log::info;
use vcweather_core::{
    Config, DailyRecord, FetchOutcome, QueryOptions, SkipReason, WeatherClient, WeatherResponse,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "vcweather", version, about = "Visual Crossing timeline weather CLI")]
pub struct Cli {
    /// API key to use instead of the configured one.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Print the full response as JSON instead of a summary.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and default unit group.
    Configure,

    /// Weather for a date range.
    History {
        /// Address, partial address or "lat,lon".
        location: String,
        /// First date, yyyy-MM-dd.
        from: String,
        /// Last date, yyyy-MM-dd.
        to: String,
        #[command(flatten)]
        options: RangeOptions,
    },

    /// Weather for a single day.
    Day {
        location: String,
        date: NaiveDate,
    },

    /// The default forecast window (usually 15 days).
    Forecast { location: String },
}

#[derive(Debug, Args)]
pub struct RangeOptions {
    /// Unit system: us, metric, uk or base.
    #[arg(long)]
    pub unit_group: Option<String>,

    /// Sections to include, e.g. "days,hours".
    #[arg(long)]
    pub include: Option<String>,

    /// Comma-separated elements to request.
    #[arg(long)]
    pub elements: Option<String>,
}

impl RangeOptions {
    fn is_empty(&self) -> bool {
        self.unit_group.is_none() && self.include.is_none() && self.elements.is_none()
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli {
            api_key,
            json,
            command,
        } = self;
        let mut config = Config::load()?;

        let mut client = WeatherClient::from_config(&config);
        if let Some(key) = api_key {
            client.set_api_key(key);
        }

        let outcome = match command {
            Command::Configure => return configure(&mut config),
            Command::History {
                location,
                from,
                to,
                options,
            } => {
                let default_units = config.unit_group.clone();
                if options.is_empty() && default_units.is_none() {
                    client.fetch_weather_data(&location, &from, &to).await?
                } else {
                    let options = QueryOptions {
                        unit_group: options.unit_group.or(default_units).unwrap_or_default(),
                        include: options.include.unwrap_or_default(),
                        elements: options.elements.unwrap_or_default(),
                    };
                    client
                        .fetch_weather_data_with_options(&location, &from, &to, options)
                        .await?
                }
            }
            Command::Day { location, date } => {
                client.fetch_weather_on(&location, &date.to_string()).await?
            }
            Command::Forecast { location } => client.fetch_forecast(&location).await?,
        };

        match outcome {
            FetchOutcome::Updated => {}
            FetchOutcome::Skipped(SkipReason::NoApiKey) => bail!(
                "No API key configured.\n\
                 Hint: run `vcweather configure` or pass --api-key."
            ),
            FetchOutcome::Skipped(SkipReason::Transport(err)) => {
                return Err(err).context("Weather request failed");
            }
        }

        let response = client
            .response()
            .context("Request succeeded but no response is held")?;

        if json {
            println!("{}", serde_json::to_string_pretty(response)?);
        } else {
            print_summary(response);
        }

        Ok(())
    }
}

fn configure(config: &mut Config) -> anyhow::Result<()> {
    let key = Password::new("Visual Crossing API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let units = Text::new("Default unit group (us, metric, uk, base):")
        .with_default(config.unit_group.as_deref().unwrap_or("us"))
        .prompt()
        .context("Failed to read unit group")?;

    config.set_api_key(key.trim().to_string());
    config.unit_group = Some(units.trim().to_string()).filter(|u| !u.is_empty());
    config.save()?;

    info!("Saved configuration to {}", Config::config_file_path()?.display());
    println!("Configuration saved.");
    Ok(())
}

fn print_summary(response: &WeatherResponse) {
    println!(
        "{} ({:.4}, {:.4}), timezone {} (UTC{:+})",
        response.resolved_address,
        response.latitude,
        response.longitude,
        response.timezone,
        response.tz_offset,
    );

    for day in &response.days {
        println!("  {}", day_line(day));
    }

    println!(
        "{} day(s), {} station(s), query cost {}",
        response.days.len(),
        response.stations.len(),
        response.query_cost,
    );
}

fn day_line(day: &DailyRecord) -> String {
    let mut line = format!(
        "{}  min {}  max {}",
        day.datetime.format("%a %Y-%m-%d"),
        measurement(day.temp_min),
        measurement(day.temp_max),
    );

    if !day.conditions.is_empty() {
        line.push_str("  ");
        line.push_str(&day.conditions);
    }
    if !day.events.is_empty() {
        line.push_str(&format!("  [{} event(s)]", day.events.len()));
    }

    line
}

fn measurement(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.1}")
    }
}
