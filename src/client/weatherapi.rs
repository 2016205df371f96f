//! Client for the WeatherAPI.com `current.json` and `forecast.json` endpoints.

use crate::client::error::FetchError;
use crate::client::{get_json, timestamp_or_now};
use crate::types::forecast::{DailyForecast, ForecastReport, Observation};
use crate::types::sample::TemperatureSample;
use bon::bon;
use chrono::{DateTime, NaiveDate};
use log::debug;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";
pub const DEFAULT_FORECAST_DAYS: u8 = 3;

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    #[serde(default)]
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    #[serde(default)]
    last_updated_epoch: Option<i64>,
    temp_c: f64,
    #[serde(default)]
    feelslike_c: Option<f64>,
    #[serde(default)]
    humidity: Option<u8>,
    #[serde(default)]
    wind_kph: Option<f64>,
    #[serde(default)]
    condition: Option<ApiCondition>,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    avgtemp_c: f64,
}

#[derive(Debug, Deserialize)]
struct ApiHour {
    time_epoch: i64,
    temp_c: f64,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: String,
    day: ApiDay,
    #[serde(default)]
    hour: Vec<ApiHour>,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    location: ApiLocation,
    current: ApiCurrent,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    location: ApiLocation,
    current: ApiCurrent,
    forecast: ApiForecast,
}

fn observation(location: &ApiLocation, current: ApiCurrent) -> Observation {
    Observation {
        location: location.name.clone(),
        observed_at: timestamp_or_now(current.last_updated_epoch),
        temperature: current.temp_c,
        feels_like: current.feelslike_c,
        humidity: current.humidity,
        wind_kph: current.wind_kph,
        condition: current.condition.map(|c| c.text),
    }
}

impl CurrentResponse {
    pub(crate) fn into_observation(self) -> Observation {
        observation(&self.location, self.current)
    }
}

impl ForecastResponse {
    pub(crate) fn into_report(self) -> Result<ForecastReport, FetchError> {
        let current = observation(&self.location, self.current);
        let mut days = Vec::with_capacity(self.forecast.forecastday.len());
        let mut hourly = Vec::new();

        for forecast_day in self.forecast.forecastday {
            let date = NaiveDate::parse_from_str(&forecast_day.date, "%Y-%m-%d").map_err(|_| {
                FetchError::InvalidField {
                    field: "forecastday.date",
                    value: forecast_day.date.clone(),
                }
            })?;
            for hour in forecast_day.hour {
                let timestamp = DateTime::from_timestamp(hour.time_epoch, 0).ok_or_else(|| {
                    FetchError::InvalidField {
                        field: "hour.time_epoch",
                        value: hour.time_epoch.to_string(),
                    }
                })?;
                hourly.push(
                    TemperatureSample::new(timestamp, hour.temp_c)
                        .with_location(&self.location.name),
                );
            }
            days.push(DailyForecast {
                date,
                max_temp: forecast_day.day.maxtemp_c,
                min_temp: forecast_day.day.mintemp_c,
                avg_temp: forecast_day.day.avgtemp_c,
            });
        }

        Ok(ForecastReport {
            location: self.location.name,
            country: self.location.country,
            current,
            days,
            hourly,
        })
    }
}

/// WeatherAPI.com client. Every request carries the static API key.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[bon]
impl WeatherApiClient {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Points the client at another host, e.g. a proxy or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetches the current conditions for `location` (city name, postcode or "lat,lon").
    pub async fn current(&self, location: &str) -> Result<Observation, FetchError> {
        let url = format!("{}/current.json", self.base_url);
        let response: CurrentResponse = get_json(
            &self.http,
            &url,
            &[
                ("key", self.api_key.clone()),
                ("q", location.to_string()),
                ("aqi", "no".to_string()),
            ],
        )
        .await?;
        Ok(response.into_observation())
    }

    /// Fetches current conditions and a daily/hourly forecast.
    ///
    /// # Arguments
    ///
    /// * `.location(&str)`: **Required.** Place to query.
    /// * `.days(u8)`: Optional. Number of forecast days, defaults to 3.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::HttpStatus`] for non-success responses (bad key,
    /// unknown location) and [`FetchError::Decode`] when the body is not the
    /// expected JSON.
    #[builder]
    pub async fn forecast(
        &self,
        location: &str,
        days: Option<u8>,
    ) -> Result<ForecastReport, FetchError> {
        let days = days.unwrap_or(DEFAULT_FORECAST_DAYS);
        let url = format!("{}/forecast.json", self.base_url);
        let response: ForecastResponse = get_json(
            &self.http,
            &url,
            &[
                ("key", self.api_key.clone()),
                ("q", location.to_string()),
                ("days", days.to_string()),
                ("aqi", "no".to_string()),
                ("alerts", "no".to_string()),
            ],
        )
        .await?;
        let report = response.into_report()?;
        debug!(
            "Forecast for {}: {} days, {} hourly samples",
            report.location,
            report.days.len(),
            report.hourly.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    const FORECAST_JSON: &str = r#"{
        "location": {"name": "London", "region": "City of London", "country": "United Kingdom"},
        "current": {
            "last_updated_epoch": 1751364000,
            "temp_c": 21.4,
            "feelslike_c": 21.0,
            "humidity": 56,
            "wind_kph": 13.3,
            "condition": {"text": "Partly cloudy", "code": 1003}
        },
        "forecast": {"forecastday": [
            {"date": "2025-07-01", "day": {"maxtemp_c": 24.1, "mintemp_c": 14.2, "avgtemp_c": 19.0},
             "hour": [
                {"time_epoch": 1751324400, "time": "2025-07-01 00:00", "temp_c": 15.1},
                {"time_epoch": 1751328000, "time": "2025-07-01 01:00", "temp_c": 14.6}
             ]},
            {"date": "2025-07-02", "day": {"maxtemp_c": 26.8, "mintemp_c": 15.0, "avgtemp_c": 20.7}}
        ]}
    }"#;

    #[test]
    fn test_forecast_maps_to_report() -> Result<(), Box<dyn std::error::Error>> {
        let response: ForecastResponse = serde_json::from_str(FORECAST_JSON)?;
        let report = response.into_report()?;

        assert_eq!(report.label(), "London, United Kingdom");
        assert_eq!(report.current.temperature, 21.4);
        assert_eq!(report.current.humidity, Some(56));
        assert_eq!(report.current.condition.as_deref(), Some("Partly cloudy"));
        assert_eq!(
            report.current.observed_at,
            Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap()
        );

        assert_eq!(report.days.len(), 2);
        assert_eq!(report.days[0].date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(report.days[1].max_temp, 26.8);
        assert_eq!(report.days[1].avg_temp, 20.7);

        assert_eq!(report.hourly.len(), 2);
        assert_eq!(report.hourly[1].value, 14.6);
        assert_eq!(report.hourly[1].location.as_deref(), Some("London"));
        Ok(())
    }

    #[test]
    fn test_bad_forecast_date_is_rejected() -> Result<(), serde_json::Error> {
        let json = FORECAST_JSON.replace("2025-07-02", "02/07/2025");
        let response: ForecastResponse = serde_json::from_str(&json)?;
        match response.into_report() {
            Err(FetchError::InvalidField { field, value }) => {
                assert_eq!(field, "forecastday.date");
                assert_eq!(value, "02/07/2025");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_current_with_sparse_fields() -> Result<(), serde_json::Error> {
        let json = r#"{"location": {"name": "Reykjavik"}, "current": {"temp_c": -4.5}}"#;
        let observation = serde_json::from_str::<CurrentResponse>(json)?.into_observation();
        assert_eq!(observation.location, "Reykjavik");
        assert_eq!(observation.temperature, -4.5);
        assert_eq!(observation.feels_like, None);
        assert_eq!(observation.condition, None);
        assert_eq!(observation.sample().location.as_deref(), Some("Reykjavik"));
        Ok(())
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = WeatherApiClient::new(Client::new(), "key").with_base_url("http://localhost:9/v1/");
        assert_eq!(client.base_url, "http://localhost:9/v1");
    }
}
