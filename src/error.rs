use crate::client::error::FetchError;
use crate::config::ConfigError;
use crate::history::error::HistoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherTrendsError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to encode report as JSON")]
    ReportEncode(#[source] serde_json::Error),
}
