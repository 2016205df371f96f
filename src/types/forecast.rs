use crate::types::sample::TemperatureSample;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// One day of a forecast, temperatures in °C.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub max_temp: f64,
    pub min_temp: f64,
    pub avg_temp: f64,
}

/// Current conditions at a location, as reported by a provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub location: String,
    pub observed_at: DateTime<Utc>,
    pub temperature: f64,
    pub feels_like: Option<f64>,
    pub humidity: Option<u8>,
    pub wind_kph: Option<f64>,
    pub condition: Option<String>,
}

impl Observation {
    /// The observation as a temperature sample labelled with its location.
    pub fn sample(&self) -> TemperatureSample {
        TemperatureSample::new(self.observed_at, self.temperature).with_location(&self.location)
    }
}

/// Current conditions plus a multi-day forecast for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub location: String,
    pub country: String,
    pub current: Observation,
    pub days: Vec<DailyForecast>,
    /// Hourly forecast temperatures across all days, when the provider sends them.
    pub hourly: Vec<TemperatureSample>,
}

impl ForecastReport {
    /// "Name, Country", or just the name when the country is unknown.
    pub fn label(&self) -> String {
        if self.country.is_empty() {
            self.location.clone()
        } else {
            format!("{}, {}", self.location, self.country)
        }
    }
}
