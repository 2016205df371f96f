use crate::analysis::forecast::{day_changes, ForecastStats};
use crate::render::charts::temperature_emoji;
use crate::types::forecast::{DailyForecast, Observation};
use crate::types::sample::TemperatureSeries;
use crate::types::trend::TrendSummary;

/// Readings shown by [`series_table`] unless asked otherwise.
pub const DEFAULT_TABLE_ROWS: usize = 10;

/// The analysis block for a summary.
pub fn summary(summary: &TrendSummary) -> String {
    let period = match summary.time_period_hours {
        Some(hours) => format!("{hours:.1} hours"),
        None => "Single reading".to_string(),
    };
    [
        "=== WEATHER ANALYSIS ===".to_string(),
        format!("Data Points: {}", summary.count),
        format!("Time Period: {period}"),
        format!("Average Temperature: {:.1}°C", summary.average),
        format!(
            "Temperature Range: {:.1}°C (Min: {:.1}°C, Max: {:.1}°C)",
            summary.range, summary.minimum, summary.maximum
        ),
        format!("Trend: {}", summary.classification),
        format!("Recommendation: {}", summary.recommendation),
        "========================".to_string(),
    ]
    .join("\n")
}

/// Time and temperature of the first `limit` readings.
pub fn series_table(series: &TemperatureSeries, limit: usize) -> String {
    let mut lines = vec![
        "TEMPERATURE TREND CHART:".to_string(),
        "Time                | Temp (°C)".to_string(),
        "--------------------|-----------".to_string(),
    ];
    lines.extend(series.iter().take(limit).map(|sample| {
        format!(
            "{:<19} | {:>6.1}°C",
            sample.timestamp.format("%H:%M:%S").to_string(),
            sample.value
        )
    }));
    if series.len() > limit {
        lines.push(format!("... {} more readings", series.len() - limit));
    }
    lines.join("\n")
}

/// Current conditions for `label`.
pub fn observation(label: &str, observation: &Observation) -> String {
    let temperature = match observation.feels_like {
        Some(feels_like) => format!(
            "{:.1}°C (Feels like: {:.1}°C)",
            observation.temperature, feels_like
        ),
        None => format!("{:.1}°C", observation.temperature),
    };
    let mut lines = vec![
        format!("📍 Current Weather in {label}"),
        "====================================".to_string(),
        format!(
            "{}  Temperature: {}",
            temperature_emoji(observation.temperature),
            temperature
        ),
    ];
    if let Some(condition) = &observation.condition {
        lines.push(format!("☁️  Condition: {condition}"));
    }
    if let Some(humidity) = observation.humidity {
        lines.push(format!("💧 Humidity: {humidity}%"));
    }
    if let Some(wind) = observation.wind_kph {
        lines.push(format!("💨 Wind: {wind:.1} km/h"));
    }
    lines.join("\n")
}

/// One row per day with the day-over-day movement of the average.
pub fn forecast_table(days: &[DailyForecast]) -> String {
    let mut lines = vec![
        "Date     | Max Temp | Min Temp | Avg Temp | Trend".to_string(),
        "---------|----------|----------|----------|-------".to_string(),
    ];
    for (day, change) in days.iter().zip(day_changes(days)) {
        lines.push(format!(
            "{:<8} | {:>6.1}°C | {:>6.1}°C | {:>6.1}°C | {}",
            day.date.format("%b %d").to_string(),
            day.max_temp,
            day.min_temp,
            day.avg_temp,
            change.symbol()
        ));
    }
    lines.join("\n")
}

pub fn forecast_stats(stats: &ForecastStats) -> String {
    [
        "📊 Temperature Statistics:".to_string(),
        format!("Average High: {:.1}°C", stats.average_high),
        format!("Average Low: {:.1}°C", stats.average_low),
        format!("Overall Average: {:.1}°C", stats.overall_average),
        format!("Temperature Range: {:.1}°C", stats.range),
        format!("Highest Temp: {:.1}°C", stats.highest),
        format!("Lowest Temp: {:.1}°C", stats.lowest),
        format!("Trend: {} ({:+.2}°C/day)", stats.trend, stats.slope),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::summarize;
    use crate::types::sample::TemperatureSample;
    use chrono::{Duration, NaiveDate, TimeZone, Utc};

    fn hourly(values: &[f64]) -> TemperatureSeries {
        let start = Utc.with_ymd_and_hms(2025, 4, 3, 6, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| TemperatureSample::new(start + Duration::hours(i as i64), *v))
            .collect()
    }

    #[test]
    fn test_summary_block() {
        let text = summary(&summarize(&hourly(&[10.0, 11.0, 13.0])));
        assert!(text.contains("Data Points: 3"));
        assert!(text.contains("Time Period: 2.0 hours"));
        assert!(text.contains("Average Temperature: 11.3°C"));
        assert!(text.contains("Temperature Range: 3.0°C (Min: 10.0°C, Max: 13.0°C)"));
        assert!(text.contains("Trend: warming"));
        assert!(text.contains("Recommendation: Moderate temperature. Light jacket recommended."));
    }

    #[test]
    fn test_summary_single_reading() {
        let text = summary(&summarize(&hourly(&[-1.0])));
        assert!(text.contains("Time Period: Single reading"));
        assert!(text.contains("Trend: insufficient-data"));
    }

    #[test]
    fn test_series_table_limits_rows() {
        let values: Vec<f64> = (0..12).map(f64::from).collect();
        let text = series_table(&hourly(&values), DEFAULT_TABLE_ROWS);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 + 10 + 1);
        assert_eq!(lines[3], "06:00:00            |    0.0°C");
        assert_eq!(lines[13], "... 2 more readings");
    }

    #[test]
    fn test_forecast_table_rows() {
        let day = |d: u32, avg: f64| DailyForecast {
            date: NaiveDate::from_ymd_opt(2025, 7, d).unwrap(),
            max_temp: avg + 5.0,
            min_temp: avg - 5.0,
            avg_temp: avg,
        };
        let text = forecast_table(&[day(1, 18.0), day(2, 20.5), day(3, 19.0)]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "Jul 01   |   23.0°C |   13.0°C |   18.0°C | ➡️");
        assert!(lines[3].ends_with("📈"));
        assert!(lines[4].ends_with("📉"));
    }

    #[test]
    fn test_observation_block_skips_missing_fields() {
        let obs = Observation {
            location: "Nuuk".to_string(),
            observed_at: Utc::now(),
            temperature: -12.0,
            feels_like: None,
            humidity: Some(70),
            wind_kph: None,
            condition: None,
        };
        let text = observation("Nuuk, Greenland", &obs);
        assert!(text.starts_with("📍 Current Weather in Nuuk, Greenland"));
        assert!(text.contains("❄️  Temperature: -12.0°C"));
        assert!(text.contains("💧 Humidity: 70%"));
        assert!(!text.contains("Wind"));
        assert!(!text.contains("Feels like"));
    }
}
