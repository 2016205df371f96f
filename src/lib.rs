mod analysis;
mod client;
mod config;
mod error;
mod history;
pub mod render;
mod types;

pub use error::WeatherTrendsError;

pub use analysis::analyzer::{
    classify_by_endpoints, classify_by_slope, classify_slope, recommendation_for,
    regression_slope, round_to_tenth, summarize,
};
pub use analysis::forecast::{day_changes, DayChange, ForecastStats};
pub use analysis::thresholds::*;

pub use client::error::FetchError;
pub use client::openweather::OpenWeatherClient;
pub use client::weatherapi::{WeatherApiClient, DEFAULT_FORECAST_DAYS};
pub use client::WeatherClient;

pub use config::{Config, ConfigError, Provider, API_KEY_ENV};

pub use history::error::HistoryError;
pub use history::filter::{filter_recent, retention_window, RETENTION_HOURS};
pub use history::store::HistoryStore;

pub use types::forecast::{DailyForecast, ForecastReport, Observation};
pub use types::sample::{TemperatureSample, TemperatureSeries};
pub use types::trend::{Trend, TrendSummary};
