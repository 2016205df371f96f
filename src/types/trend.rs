//! Output types of the trend analysis.

use serde::Serialize;
use std::fmt;

/// Direction of a temperature series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Warming,
    Cooling,
    Stable,
    /// Fewer than two samples, so no direction can be derived.
    InsufficientData,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Warming => "warming",
            Trend::Cooling => "cooling",
            Trend::Stable => "stable",
            Trend::InsufficientData => "insufficient-data",
        }
    }
}

/// Formats a `Trend` with its kebab-case label.
///
/// # Examples
///
/// ```
/// use weather_trends::Trend;
///
/// assert_eq!(Trend::InsufficientData.to_string(), "insufficient-data");
/// assert_eq!(format!("{}", Trend::Warming), "warming");
/// ```
impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive statistics of a [`crate::TemperatureSeries`].
///
/// `average`, `minimum`, `maximum` and `range` are rounded to one decimal.
/// `slope` keeps full precision. The default value is the summary of an
/// empty series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSummary {
    pub count: usize,
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub range: f64,
    pub slope: f64,
    pub classification: Trend,
    pub recommendation: String,
    /// Hours between the first and last sample; `None` below two samples.
    pub time_period_hours: Option<f64>,
}

impl Default for TrendSummary {
    fn default() -> Self {
        Self {
            count: 0,
            average: 0.0,
            minimum: 0.0,
            maximum: 0.0,
            range: 0.0,
            slope: 0.0,
            classification: Trend::InsufficientData,
            recommendation: String::new(),
            time_period_hours: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_serializes_kebab_case() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_string(&Trend::InsufficientData)?,
            "\"insufficient-data\""
        );
        assert_eq!(serde_json::to_string(&Trend::Cooling)?, "\"cooling\"");
        Ok(())
    }

    #[test]
    fn test_default_summary_is_zero_valued() {
        let summary = TrendSummary::default();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.range, 0.0);
        assert_eq!(summary.classification, Trend::InsufficientData);
        assert!(summary.recommendation.is_empty());
        assert_eq!(summary.time_period_hours, None);
    }
}
