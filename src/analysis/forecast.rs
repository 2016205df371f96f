use crate::analysis::analyzer::{classify_slope, regression_slope};
use crate::types::forecast::DailyForecast;
use crate::types::trend::Trend;
use serde::Serialize;

/// Aggregates over a multi-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastStats {
    pub days: usize,
    pub average_high: f64,
    pub average_low: f64,
    pub overall_average: f64,
    /// Highest of the daily highs.
    pub highest: f64,
    /// Lowest of the daily lows.
    pub lowest: f64,
    pub range: f64,
    /// Least-squares slope of the daily averages, per day.
    pub slope: f64,
    pub trend: Trend,
}

impl ForecastStats {
    /// Returns `None` for an empty forecast.
    pub fn from_days(days: &[DailyForecast]) -> Option<Self> {
        let first = days.first()?;
        let count = days.len() as f64;

        let mut highest = first.max_temp;
        let mut lowest = first.min_temp;
        let (mut total_high, mut total_low, mut total_avg) = (0.0, 0.0, 0.0);
        for day in days {
            total_high += day.max_temp;
            total_low += day.min_temp;
            total_avg += day.avg_temp;
            if day.max_temp > highest {
                highest = day.max_temp;
            }
            if day.min_temp < lowest {
                lowest = day.min_temp;
            }
        }

        let slope = regression_slope(days.iter().map(|d| d.avg_temp));
        Some(Self {
            days: days.len(),
            average_high: total_high / count,
            average_low: total_low / count,
            overall_average: total_avg / count,
            highest,
            lowest,
            range: highest - lowest,
            slope: slope.unwrap_or(0.0),
            trend: classify_slope(slope),
        })
    }
}

/// Movement of a day's average temperature relative to the day before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayChange {
    Rising,
    Falling,
    Steady,
}

impl DayChange {
    pub fn symbol(&self) -> &'static str {
        match self {
            DayChange::Rising => "📈",
            DayChange::Falling => "📉",
            DayChange::Steady => "➡️",
        }
    }
}

/// One entry per day; the first day has nothing to compare with and is steady.
pub fn day_changes(days: &[DailyForecast]) -> Vec<DayChange> {
    let mut changes = Vec::with_capacity(days.len());
    let mut previous: Option<f64> = None;
    for day in days {
        let change = match previous {
            Some(prev) if day.avg_temp > prev => DayChange::Rising,
            Some(prev) if day.avg_temp < prev => DayChange::Falling,
            _ => DayChange::Steady,
        };
        changes.push(change);
        previous = Some(day.avg_temp);
    }
    changes
}
