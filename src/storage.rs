use crate::app_dirs::AppDirs;
use crate::stats::GameStats;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const GAME_KEY: &str = "game";
pub const STATS_KEY: &str = "stats";

/// Swappable key-value persistence capability. The file-backed store is
/// the production implementation; tests inject the in-memory fake.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// One JSON file per key under the application state directory.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let dir = AppDirs::state_dir().unwrap_or_else(|| PathBuf::from("."));
        Self { dir }
    }

    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }
}

/// In-memory store for tests and practice sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    map: HashMap<String, String>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.map.remove(key);
        Ok(())
    }
}

/// Persisted session snapshot: the solution identifier plus every
/// submitted word, saved after each accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub solution: String,
    pub submitted_words: Vec<String>,
}

/// Absent or malformed payloads read as "no saved game"; they never
/// surface as errors.
pub fn load_saved_game(store: &dyn KvStore) -> Option<SavedGame> {
    let raw = store.get(GAME_KEY)?;
    serde_json::from_str(&raw).ok()
}

pub fn save_game(store: &mut dyn KvStore, saved: &SavedGame) -> io::Result<()> {
    let data = serde_json::to_string(saved).unwrap_or_default();
    store.set(GAME_KEY, &data)
}

/// Malformed statistics read as a zeroed record.
pub fn load_stats(store: &dyn KvStore) -> GameStats {
    store
        .get(STATS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save_stats(store: &mut dyn KvStore, stats: &GameStats) -> io::Result<()> {
    let data = serde_json::to_string_pretty(stats).unwrap_or_default();
    store.set(STATS_KEY, &data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_store_roundtrips_saved_game() {
        let dir = tempdir().unwrap();
        let mut store = FileKvStore::with_dir(dir.path());
        let saved = SavedGame {
            solution: "กระจก".to_string(),
            submitted_words: vec!["กระทบ".to_string()],
        };
        save_game(&mut store, &saved).unwrap();
        assert_eq!(load_saved_game(&store), Some(saved));
    }

    #[test]
    fn missing_file_reads_as_no_saved_game() {
        let dir = tempdir().unwrap();
        let store = FileKvStore::with_dir(dir.path());
        assert_eq!(load_saved_game(&store), None);
    }

    #[test]
    fn malformed_payload_reads_as_no_saved_game() {
        let mut store = MemoryKvStore::new();
        store.set(GAME_KEY, "{not json").unwrap();
        assert_eq!(load_saved_game(&store), None);
    }

    #[test]
    fn malformed_stats_read_as_zeroed_record() {
        let mut store = MemoryKvStore::new();
        store.set(STATS_KEY, "[]").unwrap();
        let stats = load_stats(&store);
        assert_eq!(stats, GameStats::default());
    }

    #[test]
    fn stats_roundtrip_through_file_store() {
        let dir = tempdir().unwrap();
        let mut store = FileKvStore::with_dir(dir.path());
        let mut stats = GameStats::default();
        stats.record_finished(crate::game::GameStatus::Won, 3);
        save_stats(&mut store, &stats).unwrap();
        assert_eq!(load_stats(&store), stats);
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = FileKvStore::with_dir(dir.path());
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);

        let mut mem = MemoryKvStore::new();
        mem.remove("absent").unwrap();
    }
}
