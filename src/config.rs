//! Runtime configuration: API key, provider and a few tunables, read from a
//! JSON file and the `WEATHER_API_KEY` environment variable.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub const API_KEY_ENV: &str = "WEATHER_API_KEY";
const CONFIG_FILE_NAME: &str = "config.json";
const APP_DIR_NAME: &str = "weather-trends";
const MAX_FORECAST_DAYS: u8 = 14;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to parse config file '{0}'")]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("No API key found. Set WEATHER_API_KEY or add \"api_key\" to config.json")]
    MissingApiKey,

    #[error("Unknown provider '{0}', expected 'weatherapi' or 'openweather'")]
    UnknownProvider(String),

    #[error("Forecast days must be between 1 and 14, got {0}")]
    InvalidDays(u8),
}

/// Weather data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Provider {
    /// WeatherAPI.com, current conditions and forecasts.
    #[default]
    #[serde(rename = "weatherapi")]
    WeatherApi,
    /// OpenWeatherMap, current conditions only.
    #[serde(rename = "openweather")]
    OpenWeather,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::WeatherApi => "weatherapi",
            Provider::OpenWeather => "openweather",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a provider name, ignoring case.
///
/// # Examples
///
/// ```
/// use weather_trends::Provider;
///
/// assert_eq!("OpenWeather".parse::<Provider>().unwrap(), Provider::OpenWeather);
/// assert!("darksky".parse::<Provider>().is_err());
/// ```
impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weatherapi" => Ok(Provider::WeatherApi),
            "openweather" | "openweathermap" => Ok(Provider::OpenWeather),
            _ => Err(ConfigError::UnknownProvider(s.to_string())),
        }
    }
}

impl TryFrom<String> for Provider {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub provider: Provider,
    #[serde(default = "default_days")]
    pub days: u8,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Overrides the provider's API root.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Where recorded observations are kept; defaults to the user data dir.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

fn default_days() -> u8 {
    3
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            provider: Provider::default(),
            days: default_days(),
            timeout_secs: default_timeout_secs(),
            base_url: None,
            history_file: None,
        }
    }
}

impl Config {
    /// Loads the first config file found, then fills a missing API key from
    /// `WEATHER_API_KEY`.
    ///
    /// Search order: `explicit`, `./config.json`, `<config dir>/weather-trends/config.json`.
    /// With no file at all the defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load_first(&Self::candidates(explicit))?;
        config
            .with_env_api_key(std::env::var(API_KEY_ENV).ok())
            .validated()
    }

    fn candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(path) = explicit {
            candidates.push(path.to_path_buf());
        }
        candidates.push(PathBuf::from(CONFIG_FILE_NAME));
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
        }
        candidates
    }

    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// A key from the file wins; an empty key is filled from `env_value`.
    pub fn with_env_api_key(mut self, env_value: Option<String>) -> Self {
        if self.api_key.trim().is_empty() {
            if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
                self.api_key = key;
            }
        }
        self
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.days == 0 || self.days > MAX_FORECAST_DAYS {
            return Err(ConfigError::InvalidDays(self.days));
        }
        Ok(self)
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            Err(ConfigError::MissingApiKey)
        } else {
            Ok(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_file_exists() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let config = Config::load_first(&[dir.path().join("missing.json")])?;
        assert_eq!(config, Config::default());
        assert_eq!(config.days, 3);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.provider, Provider::WeatherApi);
        assert!(matches!(config.require_api_key(), Err(ConfigError::MissingApiKey)));
        Ok(())
    }

    #[test]
    fn test_first_existing_file_wins() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        fs::write(&second, r#"{"api_key": "second", "provider": "openweather", "days": 5}"#)?;

        let config = Config::load_first(&[first.clone(), second.clone()])?;
        assert_eq!(config.api_key, "second");
        assert_eq!(config.provider, Provider::OpenWeather);
        assert_eq!(config.days, 5);
        assert_eq!(config.timeout_secs, 10);

        fs::write(&first, r#"{"api_key": "first"}"#)?;
        let config = Config::load_first(&[first, second])?;
        assert_eq!(config.api_key, "first");
        assert_eq!(config.provider, Provider::WeatherApi);
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, "{ api_key: nope")?;
        assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse(p, _)) if p == path));
        Ok(())
    }

    #[test]
    fn test_env_key_only_fills_empty_key() {
        let config = Config::default().with_env_api_key(Some("from-env".to_string()));
        assert_eq!(config.require_api_key().ok(), Some("from-env"));

        let config = Config {
            api_key: "from-file".to_string(),
            ..Config::default()
        }
        .with_env_api_key(Some("from-env".to_string()));
        assert_eq!(config.api_key, "from-file");

        let config = Config::default().with_env_api_key(Some("   ".to_string()));
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_days_are_validated() {
        let config = Config {
            days: 0,
            ..Config::default()
        };
        assert!(matches!(config.validated(), Err(ConfigError::InvalidDays(0))));
        let config = Config {
            days: 14,
            ..Config::default()
        };
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_provider_parsing() {
        assert_eq!("weatherapi".parse::<Provider>().ok(), Some(Provider::WeatherApi));
        assert_eq!("OPENWEATHERMAP".parse::<Provider>().ok(), Some(Provider::OpenWeather));
        assert!(matches!(
            "accuweather".parse::<Provider>(),
            Err(ConfigError::UnknownProvider(name)) if name == "accuweather"
        ));
        assert_eq!(Provider::OpenWeather.to_string(), "openweather");
    }

    #[test]
    fn test_file_provider_ignores_case_and_accepts_alias() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        for name in ["OpenWeather", "openweathermap", "WEATHERAPI"] {
            fs::write(&path, format!(r#"{{"provider": "{name}"}}"#))?;
            let expected = name.parse::<Provider>()?;
            assert_eq!(Config::from_file(&path)?.provider, expected, "{name}");
        }

        fs::write(&path, r#"{"provider": "darksky"}"#)?;
        assert!(matches!(Config::from_file(&path), Err(ConfigError::Parse(..))));

        let written = serde_json::to_string(&Config {
            provider: Provider::OpenWeather,
            ..Config::default()
        })?;
        assert!(written.contains(r#""provider":"openweather""#), "{written}");
        Ok(())
    }
}
