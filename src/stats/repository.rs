use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{debug, warn};

use super::{upsert_entry, HighScoreEntry, StatsError};

pub trait LeaderboardRepository: Send + Sync {
    /// Current entries, best first. A store that has never been written is empty.
    fn load(&self) -> Result<Vec<HighScoreEntry>, StatsError>;

    /// Replaces the stored entries as a whole.
    fn save(&self, entries: &[HighScoreEntry]) -> Result<(), StatsError>;

    /// Reads once, merges `entry` by name, writes once.
    fn record(&self, entry: HighScoreEntry) -> Result<Vec<HighScoreEntry>, StatsError> {
        let mut entries = self.load()?;
        upsert_entry(&mut entries, entry);
        self.save(&entries)?;
        Ok(entries)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryLeaderboard {
    entries: RwLock<Vec<HighScoreEntry>>,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardRepository for InMemoryLeaderboard {
    fn load(&self) -> Result<Vec<HighScoreEntry>, StatsError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StatsError::Repository("leaderboard lock poisoned".to_string()))?;
        Ok(entries.clone())
    }

    fn save(&self, entries: &[HighScoreEntry]) -> Result<(), StatsError> {
        let mut guard = self
            .entries
            .write()
            .map_err(|_| StatsError::Repository("leaderboard lock poisoned".to_string()))?;
        *guard = entries.to_vec();
        Ok(())
    }
}

/// Leaderboard stored as a UTF-8 JSON array of entries.
#[derive(Debug, Clone)]
pub struct JsonFileLeaderboard {
    path: PathBuf,
}

impl JsonFileLeaderboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "leaderboard.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl LeaderboardRepository for JsonFileLeaderboard {
    fn load(&self) -> Result<Vec<HighScoreEntry>, StatsError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No leaderboard file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if data.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&data).map_err(|source| {
            warn!(path = %self.path.display(), error = %source, "Leaderboard file is corrupt");
            StatsError::Corrupt {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn save(&self, entries: &[HighScoreEntry]) -> Result<(), StatsError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let data = serde_json::to_string_pretty(entries)?;
        let temp = self.temp_path();
        fs::write(&temp, data)?;
        fs::rename(&temp, &self.path)?;

        debug!(path = %self.path.display(), entries = entries.len(), "Leaderboard saved");
        Ok(())
    }
}
