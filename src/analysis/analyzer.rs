use crate::analysis::thresholds::{
    ENDPOINT_DEADBAND, HOT_RECOMMENDATION, RECOMMENDATION_BANDS, SLOPE_STABLE_THRESHOLD,
};
use crate::types::sample::TemperatureSeries;
use crate::types::trend::{Trend, TrendSummary};

/// Computes the descriptive statistics of a series.
///
/// The classification uses [`classify_by_endpoints`]. An empty series yields
/// [`TrendSummary::default`].
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use weather_trends::{summarize, TemperatureSample, TemperatureSeries, Trend};
///
/// let start = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
/// let series: TemperatureSeries = [14.0, 15.5, 17.25]
///     .iter()
///     .enumerate()
///     .map(|(i, v)| TemperatureSample::new(start + Duration::hours(i as i64), *v))
///     .collect();
///
/// let summary = summarize(&series);
/// assert_eq!(summary.count, 3);
/// assert_eq!(summary.maximum, 17.3);
/// assert_eq!(summary.classification, Trend::Warming);
/// ```
pub fn summarize(series: &TemperatureSeries) -> TrendSummary {
    let Some(first) = series.first() else {
        return TrendSummary::default();
    };

    let mut minimum = first.value;
    let mut maximum = first.value;
    let mut sum = 0.0;
    for value in series.values() {
        sum += value;
        if value < minimum {
            minimum = value;
        }
        if value > maximum {
            maximum = value;
        }
    }
    let average = sum / series.len() as f64;

    let time_period_hours = match (series.first(), series.last()) {
        (Some(first), Some(last)) if series.len() >= 2 => {
            Some((last.timestamp - first.timestamp).num_seconds() as f64 / 3600.0)
        }
        _ => None,
    };

    let minimum = round_to_tenth(minimum);
    let maximum = round_to_tenth(maximum);

    TrendSummary {
        count: series.len(),
        average: round_to_tenth(average),
        minimum,
        maximum,
        // Taken from the rounded extremes so the displayed values add up.
        range: round_to_tenth(maximum - minimum),
        slope: regression_slope(series.values()).unwrap_or(0.0),
        classification: classify_by_endpoints(series),
        recommendation: recommendation_for(average).to_string(),
        time_period_hours,
    }
}

/// Compares the last sample with the first, with a ±0.5 °C deadband.
pub fn classify_by_endpoints(series: &TemperatureSeries) -> Trend {
    match (series.first(), series.last()) {
        (Some(first), Some(last)) if series.len() >= 2 => {
            if last.value > first.value + ENDPOINT_DEADBAND {
                Trend::Warming
            } else if last.value < first.value - ENDPOINT_DEADBAND {
                Trend::Cooling
            } else {
                Trend::Stable
            }
        }
        _ => Trend::InsufficientData,
    }
}

/// Classifies by the least-squares slope of temperature against sample index.
pub fn classify_by_slope(series: &TemperatureSeries) -> Trend {
    classify_slope(regression_slope(series.values()))
}

/// Maps a slope onto a trend; `None` means too few samples.
pub fn classify_slope(slope: Option<f64>) -> Trend {
    match slope {
        None => Trend::InsufficientData,
        Some(slope) if slope.abs() < SLOPE_STABLE_THRESHOLD => Trend::Stable,
        Some(slope) if slope > 0.0 => Trend::Warming,
        Some(_) => Trend::Cooling,
    }
}

/// Ordinary least-squares slope of `values` against their zero-based index.
///
/// Returns `None` for fewer than two values.
pub fn regression_slope<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (mut n, mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0usize, 0.0, 0.0, 0.0, 0.0);
    for (i, y) in values.into_iter().enumerate() {
        let x = i as f64;
        n += 1;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }
    if n < 2 {
        return None;
    }
    let n = n as f64;
    // Distinct indices keep the denominator positive for n >= 2.
    Some((n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x))
}

/// Clothing advice for an average temperature.
pub fn recommendation_for(average: f64) -> &'static str {
    RECOMMENDATION_BANDS
        .iter()
        .find(|(upper, _)| average < *upper)
        .map(|(_, text)| *text)
        .unwrap_or(HOT_RECOMMENDATION)
}

/// Rounds to one decimal place, halves away from zero. Never returns `-0.0`.
pub fn round_to_tenth(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
