//! Daily mood log storage.
//!
//! A single JSON file holding one record per calendar date; writing a
//! date that already has a record overwrites it. Read failures degrade to
//! an empty list so the ending flow never blocks on a corrupt file.

use log::error;
use moodmate_core_types::{Category, MoodLog};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const STORAGE_FILE: &str = "mood_diary_logs.json";
const APP_DIR: &str = "moodmate";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no platform data directory available")]
    NoDataDir,
    #[error("mood log io failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("mood log serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Last-write-wins store of daily mood records.
pub struct MoodLogStore {
    path: PathBuf,
}

impl MoodLogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory, creating it if needed.
    pub fn default_location() -> Result<Self, StorageError> {
        let dir = dirs::data_dir()
            .ok_or(StorageError::NoDataDir)?
            .join(APP_DIR);
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join(STORAGE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records, oldest first. A missing or unreadable file is an
    /// empty history, not an error.
    pub fn load_all(&self) -> Vec<MoodLog> {
        if !self.path.exists() {
            return Vec::new();
        }
        match fs::read_to_string(&self.path)
            .map_err(StorageError::from)
            .and_then(|data| serde_json::from_str(&data).map_err(StorageError::from))
        {
            Ok(logs) => logs,
            Err(e) => {
                error!("failed to read mood logs: {}", e);
                Vec::new()
            }
        }
    }

    /// Save today's record, replacing any existing record for today.
    pub fn save_daily(
        &self,
        mood: impl Into<String>,
        intensity: u8,
        note: impl Into<String>,
        event: Option<String>,
        category: Option<Category>,
    ) -> Result<MoodLog, StorageError> {
        let log = MoodLog {
            date: today(),
            mood: mood.into(),
            intensity,
            note: note.into(),
            event,
            category,
        };

        let mut logs = self.load_all();
        match logs.iter_mut().find(|existing| existing.date == log.date) {
            Some(existing) => *existing = log.clone(),
            None => logs.push(log.clone()),
        }
        self.write_all(&logs)?;
        Ok(log)
    }

    pub fn log_for_date(&self, date: &str) -> Option<MoodLog> {
        self.load_all().into_iter().find(|log| log.date == date)
    }

    pub fn delete_for_date(&self, date: &str) -> Result<(), StorageError> {
        let logs: Vec<MoodLog> = self
            .load_all()
            .into_iter()
            .filter(|log| log.date != date)
            .collect();
        self.write_all(&logs)
    }

    fn write_all(&self, logs: &[MoodLog]) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(logs)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> MoodLogStore {
        MoodLogStore::new(dir.path().join(STORAGE_FILE))
    }

    #[test]
    fn missing_file_reads_as_empty_history() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(store_in(&dir).load_all().is_empty());
    }

    #[test]
    fn save_then_reload_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let saved = store
            .save_daily("😰", 7, "迟到了", Some("迟到了".into()), Some(Category::Problem))
            .expect("saved");

        let logs = store.load_all();
        assert_eq!(logs, vec![saved.clone()]);
        assert_eq!(store.log_for_date(&saved.date), Some(saved));
    }

    #[test]
    fn same_day_write_overwrites_the_existing_record() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        store
            .save_daily("😰", 7, "first", None, None)
            .expect("saved");
        store
            .save_daily("😌", 3, "second", None, Some(Category::Ventilation))
            .expect("saved");

        let logs = store.load_all();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].note, "second");
        assert_eq!(logs[0].intensity, 3);
    }

    #[test]
    fn delete_removes_only_that_date() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let saved = store.save_daily("😊", 5, "fine", None, None).expect("saved");

        store.delete_for_date("1999-01-01").expect("deleted");
        assert_eq!(store.load_all().len(), 1);

        store.delete_for_date(&saved.date).expect("deleted");
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn corrupt_file_degrades_to_empty_history() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::write(store.path(), "not json").expect("written");
        assert!(store.load_all().is_empty());
    }
}
