use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use weather_trends::render::{charts, tables};
use weather_trends::{
    classify_by_slope, summarize, Config, ForecastReport, ForecastStats, HistoryStore,
    Observation, Provider, TemperatureSeries, Trend, TrendSummary, WeatherClient,
    WeatherTrendsError, RETENTION_HOURS,
};

const DEFAULT_LOCATION: &str = "London";

/// Fetch weather from WeatherAPI.com or OpenWeatherMap and chart temperature trends.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON config file. Defaults to ./config.json, then the user config dir.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured provider (weatherapi, openweather).
    #[arg(long, global = true)]
    provider: Option<Provider>,

    /// Print JSON instead of tables and charts.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Current conditions, a daily forecast and its temperature trend.
    Forecast {
        #[arg(default_value = DEFAULT_LOCATION)]
        location: String,
        /// Number of forecast days (1-14).
        #[arg(long)]
        days: Option<u8>,
    },
    /// Fetch the current temperature and add it to the local history.
    Record {
        #[arg(default_value = DEFAULT_LOCATION)]
        location: String,
    },
    /// Summarise the readings recorded in the last day.
    Analyze,
    /// Compare the current temperature of several locations.
    Compare {
        #[arg(required = true)]
        locations: Vec<String>,
    },
}

#[derive(Serialize)]
struct ForecastOutput<'a> {
    report: &'a ForecastReport,
    forecast: Option<ForecastStats>,
    hourly: TrendSummary,
    hourly_slope_trend: Trend,
}

#[derive(Serialize)]
struct AnalyzeOutput {
    summary: TrendSummary,
    slope_trend: Trend,
}

#[tokio::main]
async fn main() -> ExitCode {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(provider) = cli.provider {
        config.provider = provider;
    }

    match cli.command {
        Command::Forecast { location, days } => {
            if let Some(days) = days {
                config.days = days;
            }
            let config = config.validated()?;
            forecast(&config, &location, cli.json).await?
        }
        Command::Record { location } => record(&config, &location, cli.json).await?,
        Command::Analyze => analyze(&config, cli.json).await?,
        Command::Compare { locations } => compare(&config, &locations, cli.json).await?,
    }
    Ok(())
}

async fn forecast(config: &Config, location: &str, json: bool) -> Result<(), WeatherTrendsError> {
    let client = WeatherClient::from_config(config)?;
    let report = client.forecast(location, config.days).await?;
    let hourly = TemperatureSeries::new(report.hourly.clone());
    let hourly_summary = summarize(&hourly);
    let hourly_slope_trend = classify_by_slope(&hourly);
    let stats = ForecastStats::from_days(&report.days);

    if json {
        return print_json(&ForecastOutput {
            report: &report,
            forecast: stats,
            hourly: hourly_summary,
            hourly_slope_trend,
        });
    }

    println!("{}\n", tables::observation(&report.label(), &report.current));
    let Some(stats) = stats else {
        println!("No forecast days returned for {}", report.label());
        return Ok(());
    };
    println!(
        "📈 {}-Day Temperature Forecast for {}",
        report.days.len(),
        report.location
    );
    println!("{}\n", tables::forecast_table(&report.days));
    println!("{}\n", tables::forecast_stats(&stats));
    println!("{}\n", charts::column_chart(&report.days));
    println!("{}\n", charts::range_chart(&report.days));

    if !hourly.is_empty() {
        println!("Hourly outlook:");
        println!("{}", tables::summary(&hourly_summary));
        println!(
            "Regression trend: {} ({:+.2}°C/hour)",
            hourly_slope_trend, hourly_summary.slope
        );
    }
    Ok(())
}

async fn record(config: &Config, location: &str, json: bool) -> Result<(), WeatherTrendsError> {
    let client = WeatherClient::from_config(config)?;
    let observation = client.current(location).await?;
    let store = history_store(config)?;
    let kept = store.record(observation.sample(), Utc::now()).await?;
    info!(
        "{} readings kept in {}",
        kept.len(),
        store.path().display()
    );

    if json {
        return print_json(&observation);
    }
    println!("{}\n", tables::observation(&observation.location, &observation));
    println!(
        "Recorded to {} ({} readings in the last {} hours)",
        store.path().display(),
        kept.len(),
        RETENTION_HOURS
    );
    Ok(())
}

async fn analyze(config: &Config, json: bool) -> Result<(), WeatherTrendsError> {
    let store = history_store(config)?;
    let series = TemperatureSeries::new(store.load().await?);
    let summary = summarize(&series);
    let slope_trend = classify_by_slope(&series);

    if json {
        return print_json(&AnalyzeOutput {
            summary,
            slope_trend,
        });
    }
    if series.is_empty() {
        println!("No weather data available for analysis");
        return Ok(());
    }
    println!("{}", tables::summary(&summary));
    println!(
        "Regression trend: {} ({:+.2}°C/reading)\n",
        slope_trend, summary.slope
    );
    println!(
        "{}",
        tables::series_table(&series, tables::DEFAULT_TABLE_ROWS)
    );
    Ok(())
}

async fn compare(
    config: &Config,
    locations: &[String],
    json: bool,
) -> Result<(), WeatherTrendsError> {
    let client = WeatherClient::from_config(config)?;
    let mut observations: Vec<Observation> = Vec::with_capacity(locations.len());
    for location in locations {
        observations.push(client.current(location).await?);
    }

    if json {
        return print_json(&observations);
    }
    println!("{}", charts::comparison_chart(&observations));
    Ok(())
}

fn history_store(config: &Config) -> Result<HistoryStore, WeatherTrendsError> {
    match &config.history_file {
        Some(path) => Ok(HistoryStore::new(path)),
        None => Ok(HistoryStore::default_location()?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), WeatherTrendsError> {
    let text = serde_json::to_string_pretty(value).map_err(WeatherTrendsError::ReportEncode)?;
    println!("{text}");
    Ok(())
}
