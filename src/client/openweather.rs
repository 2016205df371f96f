//! Client for the OpenWeatherMap current-weather endpoint.

use crate::client::error::FetchError;
use crate::client::{get_json, timestamp_or_now};
use crate::types::forecast::Observation;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";

#[derive(Debug, Deserialize)]
struct ApiMain {
    temp: f64,
    #[serde(default)]
    feels_like: Option<f64>,
    #[serde(default)]
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct ApiWind {
    /// Metres per second with `units=metric`.
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct ApiWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    name: String,
    #[serde(default)]
    dt: Option<i64>,
    main: ApiMain,
    #[serde(default)]
    wind: Option<ApiWind>,
    #[serde(default)]
    weather: Vec<ApiWeather>,
}

impl CurrentResponse {
    pub(crate) fn into_observation(self) -> Observation {
        Observation {
            location: self.name,
            observed_at: timestamp_or_now(self.dt),
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            humidity: self.main.humidity,
            wind_kph: self.wind.map(|w| w.speed * 3.6),
            condition: self.weather.into_iter().next().map(|w| w.description),
        }
    }
}

/// OpenWeatherMap client, always queried in metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub async fn current(&self, city: &str) -> Result<Observation, FetchError> {
        let url = format!("{}/weather", self.base_url);
        let response: CurrentResponse = get_json(
            &self.http,
            &url,
            &[
                ("q", city.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ],
        )
        .await?;
        Ok(response.into_observation())
    }
}
