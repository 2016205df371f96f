use crate::history::error::HistoryError;
use crate::history::filter::{filter_recent, retention_window};
use crate::types::sample::TemperatureSample;
use chrono::{DateTime, Utc};
use log::info;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::{fs, task};

const DATA_DIR_NAME: &str = "weather-trends";
const HISTORY_FILE_NAME: &str = "history.json";

/// Recorded observations, stored as a JSON array of samples.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store under the user's data directory, e.g.
    /// `~/.local/share/weather-trends/history.json` on Linux.
    pub fn default_location() -> Result<Self, HistoryError> {
        dirs::data_dir()
            .map(|dir| Self::new(dir.join(DATA_DIR_NAME).join(HISTORY_FILE_NAME)))
            .ok_or(HistoryError::DataDirResolution)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty history.
    pub async fn load(&self) -> Result<Vec<TemperatureSample>, HistoryError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(HistoryError::Read(self.path.clone(), e)),
        };
        serde_json::from_slice(&bytes).map_err(|e| HistoryError::Parse(self.path.clone(), e))
    }

    /// Replaces the file contents. The JSON goes to a temporary file in the
    /// same directory first and is renamed over the old file.
    pub async fn save(&self, samples: &[TemperatureSample]) -> Result<(), HistoryError> {
        let json = serde_json::to_vec_pretty(samples).map_err(HistoryError::Encode)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| HistoryError::Write(dir.clone(), e))?;

        let path = self.path.clone();
        task::spawn_blocking(move || {
            let mut temp_file =
                NamedTempFile::new_in(&dir).map_err(|e| HistoryError::Write(path.clone(), e))?;
            temp_file
                .write_all(&json)
                .and_then(|_| temp_file.flush())
                .map_err(|e| HistoryError::Write(path.clone(), e))?;
            temp_file
                .persist(&path)
                .map_err(|e| HistoryError::Write(path.clone(), e.error))?;
            Ok::<(), HistoryError>(())
        })
        .await??;

        info!("Saved {} samples to {}", samples.len(), self.path.display());
        Ok(())
    }

    /// Appends `sample`, drops everything older than the retention window
    /// relative to `now`, saves, and returns what was kept.
    pub async fn record(
        &self,
        sample: TemperatureSample,
        now: DateTime<Utc>,
    ) -> Result<Vec<TemperatureSample>, HistoryError> {
        let mut samples = self.load().await?;
        samples.push(sample);
        let kept = filter_recent(samples, now, retention_window());
        self.save(&kept).await?;
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_empty() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let store = HistoryStore::new(dir.path().join("nothing.json"));
        assert!(store.load().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_save_then_load() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let store = HistoryStore::new(dir.path().join("nested").join("history.json"));
        let at = Utc.with_ymd_and_hms(2025, 2, 14, 8, 30, 0).unwrap();
        let samples = vec![
            TemperatureSample::new(at, 3.5).with_location("Ghent"),
            TemperatureSample::new(at + Duration::hours(1), 4.0),
        ];

        store.save(&samples).await?;
        assert_eq!(store.load().await?, samples);

        let text = std::fs::read_to_string(store.path())?;
        assert!(text.starts_with('['));
        assert!(text.contains("\"location\": \"Ghent\""));
        Ok(())
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("history.json");
        std::fs::write(&path, "not json")?;
        let store = HistoryStore::new(&path);
        assert!(matches!(store.load().await, Err(HistoryError::Parse(p, _)) if p == path));
        Ok(())
    }

    #[tokio::test]
    async fn test_record_keeps_last_day() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let store = HistoryStore::new(dir.path().join("history.json"));
        let now = Utc.with_ymd_and_hms(2025, 2, 15, 12, 0, 0).unwrap();
        store
            .save(&[
                TemperatureSample::new(now - Duration::hours(36), -2.0),
                TemperatureSample::new(now - Duration::hours(2), 5.0),
            ])
            .await?;

        let kept = store.record(TemperatureSample::new(now, 6.5), now).await?;
        let values: Vec<f64> = kept.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![5.0, 6.5]);
        assert_eq!(store.load().await?, kept);
        Ok(())
    }
}
