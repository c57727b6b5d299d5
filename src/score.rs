use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Errors raised by high-score persistence.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("high score file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("high score file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value storage for the single persisted best score.
pub trait ScoreStore {
    /// Reads the stored high score, `Ok(0)` when none has been saved yet.
    fn load(&mut self) -> Result<u32, ScoreError>;

    /// Stores a new high score.
    fn save(&mut self, high_score: u32) -> Result<(), ScoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// High score kept in a small JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the per-user data directory.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(scores_path())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&mut self) -> Result<u32, ScoreError> {
        load_high_score_from_path(&self.path)
    }

    fn save(&mut self, high_score: u32) -> Result<(), ScoreError> {
        save_high_score_to_path(&self.path, high_score)
    }
}

/// Volatile store for tests and runs without a writable data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    high_score: Option<u32>,
    saves: usize,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `high_score`.
    #[must_use]
    pub fn with_high_score(high_score: u32) -> Self {
        Self {
            high_score: Some(high_score),
            saves: 0,
        }
    }

    #[must_use]
    pub fn stored(&self) -> Option<u32> {
        self.high_score
    }

    /// Number of successful `save` calls.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Result<u32, ScoreError> {
        Ok(self.high_score.unwrap_or(0))
    }

    fn save(&mut self, high_score: u32) -> Result<(), ScoreError> {
        self.high_score = Some(high_score);
        self.saves += 1;
        Ok(())
    }
}

fn load_high_score_from_path(path: &Path) -> Result<u32, ScoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str::<ScoreFile>(&raw)
        .map(|file| file.high_score)
        .map_err(|source| ScoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

fn save_high_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { high_score: score };
    let json = serde_json::to_string_pretty(&payload).map_err(|source| {
        ScoreError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{JsonScoreStore, MemoryScoreStore, ScoreError, ScoreStore};

    #[test]
    fn saved_score_is_loaded_back() {
        let path = unique_test_path("saved");
        let mut store = JsonScoreStore::new(&path);

        store.save(42).expect("score save should succeed");
        let loaded = store.load().expect("load should succeed");

        assert_eq!(loaded, 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let mut store = JsonScoreStore::new(&path);
        let loaded = store.load().expect("missing file should return Ok(0)");
        assert_eq!(loaded, 0);
    }

    #[test]
    fn malformed_score_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let mut store = JsonScoreStore::new(&path);
        assert!(
            matches!(store.load(), Err(ScoreError::Malformed { .. })),
            "malformed file should return Err"
        );

        cleanup_test_path(&path);
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryScoreStore::with_high_score(30);
        assert_eq!(store.load().expect("memory load never fails"), 30);

        store.save(40).expect("memory save never fails");
        assert_eq!(store.stored(), Some(40));
        assert_eq!(store.save_count(), 1);

        assert_eq!(MemoryScoreStore::new().load().expect("empty store"), 0);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
