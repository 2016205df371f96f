use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single temperature observation in degrees Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TemperatureSample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self {
            timestamp,
            value,
            location: None,
        }
    }

    /// Attaches a free-text location label.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Temperature samples ordered by timestamp, oldest first.
///
/// The constructor sorts stably, so samples sharing a timestamp keep the
/// order they were given in. Duplicates are kept.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weather_trends::{TemperatureSample, TemperatureSeries};
///
/// let series = TemperatureSeries::new(vec![
///     TemperatureSample::new(Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap(), 4.0),
///     TemperatureSample::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(), 2.0),
/// ]);
/// assert_eq!(series.values().collect::<Vec<_>>(), vec![2.0, 4.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemperatureSeries {
    samples: Vec<TemperatureSample>,
}

impl TemperatureSeries {
    pub fn new(mut samples: Vec<TemperatureSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TemperatureSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TemperatureSample> {
        self.samples.last()
    }

    pub fn samples(&self) -> &[TemperatureSample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemperatureSample> {
        self.samples.iter()
    }

    /// Temperatures in series order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    pub fn into_samples(self) -> Vec<TemperatureSample> {
        self.samples
    }
}

impl FromIterator<TemperatureSample> for TemperatureSeries {
    fn from_iter<I: IntoIterator<Item = TemperatureSample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<TemperatureSample>> for TemperatureSeries {
    fn from(samples: Vec<TemperatureSample>) -> Self {
        Self::new(samples)
    }
}

impl<'a> IntoIterator for &'a TemperatureSeries {
    type Item = &'a TemperatureSample;
    type IntoIter = std::slice::Iter<'a, TemperatureSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
