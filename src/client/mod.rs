//! HTTP clients for the supported weather providers and the provider-agnostic
//! [`WeatherClient`] the command line drives.

pub mod error;
pub mod openweather;
pub mod weatherapi;

use crate::client::error::FetchError;
use crate::client::openweather::OpenWeatherClient;
use crate::client::weatherapi::WeatherApiClient;
use crate::config::{Config, Provider};
use crate::error::WeatherTrendsError;
use crate::types::forecast::{ForecastReport, Observation};
use chrono::{DateTime, Utc};
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Sends a GET request and decodes the JSON body.
///
/// `url` must not contain the query string; it is what ends up in logs and
/// errors, so the API key never leaks there.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, FetchError> {
    info!("Requesting {}", url);
    let response = http
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| FetchError::NetworkRequest(url.to_string(), e.without_url()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!("HTTP error for {}: {} {}", url, status, body);
        return Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(url.to_string(), e.without_url()))
}

pub(crate) fn timestamp_or_now(epoch_secs: Option<i64>) -> DateTime<Utc> {
    epoch_secs
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now)
}

/// A client for whichever provider the configuration selects.
///
/// # Examples
///
/// ```no_run
/// # use weather_trends::{Config, WeatherClient, WeatherTrendsError};
/// # #[tokio::main]
/// # async fn main() -> Result<(), WeatherTrendsError> {
/// let config = Config::load(None)?;
/// let client = WeatherClient::from_config(&config)?;
/// let observation = client.current("Berlin").await?;
/// println!("{}: {:.1}°C", observation.location, observation.temperature);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub enum WeatherClient {
    WeatherApi(WeatherApiClient),
    OpenWeather(OpenWeatherClient),
}

impl WeatherClient {
    /// Builds the HTTP client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no API key is set.
    pub fn from_config(config: &Config) -> Result<Self, WeatherTrendsError> {
        let api_key = config.require_api_key()?;
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(match config.provider {
            Provider::WeatherApi => {
                let client = WeatherApiClient::new(http, api_key);
                WeatherClient::WeatherApi(match &config.base_url {
                    Some(url) => client.with_base_url(url),
                    None => client,
                })
            }
            Provider::OpenWeather => {
                let client = OpenWeatherClient::new(http, api_key);
                WeatherClient::OpenWeather(match &config.base_url {
                    Some(url) => client.with_base_url(url),
                    None => client,
                })
            }
        })
    }

    pub fn provider(&self) -> Provider {
        match self {
            WeatherClient::WeatherApi(_) => Provider::WeatherApi,
            WeatherClient::OpenWeather(_) => Provider::OpenWeather,
        }
    }

    pub async fn current(&self, location: &str) -> Result<Observation, FetchError> {
        match self {
            WeatherClient::WeatherApi(client) => client.current(location).await,
            WeatherClient::OpenWeather(client) => client.current(location).await,
        }
    }

    /// Only WeatherAPI.com serves forecasts.
    pub async fn forecast(&self, location: &str, days: u8) -> Result<ForecastReport, FetchError> {
        match self {
            WeatherClient::WeatherApi(client) => {
                client.forecast().location(location).days(days).call().await
            }
            WeatherClient::OpenWeather(_) => Err(FetchError::UnsupportedProvider {
                provider: Provider::OpenWeather,
                operation: "forecasts",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: Provider) -> Config {
        Config {
            api_key: "secret".to_string(),
            provider,
            ..Config::default()
        }
    }

    #[test]
    fn test_from_config_picks_provider() -> Result<(), WeatherTrendsError> {
        let client = WeatherClient::from_config(&config(Provider::OpenWeather))?;
        assert_eq!(client.provider(), Provider::OpenWeather);
        let client = WeatherClient::from_config(&config(Provider::WeatherApi))?;
        assert_eq!(client.provider(), Provider::WeatherApi);
        Ok(())
    }

    #[test]
    fn test_from_config_requires_key() {
        let result = WeatherClient::from_config(&Config::default());
        assert!(matches!(
            result,
            Err(WeatherTrendsError::Config(
                crate::config::ConfigError::MissingApiKey
            ))
        ));
    }

    #[tokio::test]
    async fn test_openweather_has_no_forecast() -> Result<(), WeatherTrendsError> {
        let client = WeatherClient::from_config(&config(Provider::OpenWeather))?;
        let result = client.forecast("Paris", 3).await;
        assert!(matches!(
            result,
            Err(FetchError::UnsupportedProvider {
                provider: Provider::OpenWeather,
                ..
            })
        ));
        Ok(())
    }

    #[test]
    fn test_timestamp_or_now() {
        assert_eq!(timestamp_or_now(Some(0)).timestamp(), 0);
        let before = Utc::now();
        assert!(timestamp_or_now(None) >= before);
    }
}
