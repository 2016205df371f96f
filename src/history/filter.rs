use crate::types::sample::TemperatureSample;
use chrono::{DateTime, Duration, Utc};

/// How long recorded observations are kept, in hours.
pub const RETENTION_HOURS: i64 = 24;

pub fn retention_window() -> Duration {
    Duration::hours(RETENTION_HOURS)
}

/// Keeps the samples taken strictly after `now - window`, in their original order.
pub fn filter_recent(
    samples: Vec<TemperatureSample>,
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<TemperatureSample> {
    let cutoff = now - window;
    samples
        .into_iter()
        .filter(|sample| sample.timestamp > cutoff)
        .collect()
}
