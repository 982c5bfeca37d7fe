//! # Progress Persistence
//!
//! Completion tracking plus the persisted trainer-mode flag, stored under
//! `~/.lectern/` (or a configured state dir).
//!
//! Layout:
//! - `completed.json` — JSON array of completed lesson id strings.
//! - `trainer-mode` — the literal string `true` or `false`.
//!
//! Writes use atomic rename (write `.tmp`, then `rename()`) for crash
//! safety. Everything here is best-effort: a failed write is logged and
//! swallowed, a missing or corrupt file reads as the default. Progress
//! is a learning aid, never a system of record.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

const COMPLETED_FILE: &str = "completed.json";
const TRAINER_MODE_FILE: &str = "trainer-mode";

/// Returns the default state dir `~/.lectern/`, creating it if needed.
pub fn state_dir() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".lectern");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Atomically write `contents` to `path` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// The set of completed lesson ids, tied to one state directory.
pub struct ProgressStore {
    dir: PathBuf,
    completed: HashSet<String>,
}

impl ProgressStore {
    /// Load completion state from `dir`. Missing or malformed data is
    /// treated as "no progress" — this never fails.
    pub fn load(dir: PathBuf) -> Self {
        let completed = match fs::read_to_string(dir.join(COMPLETED_FILE)) {
            Ok(json) => match serde_json::from_str::<Vec<String>>(&json) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    warn!("Ignoring malformed {}: {}", COMPLETED_FILE, e);
                    HashSet::new()
                }
            },
            Err(_) => HashSet::new(),
        };
        debug!("Loaded {} completed lessons from {}", completed.len(), dir.display());
        Self { dir, completed }
    }

    pub fn is_complete(&self, lesson_id: &str) -> bool {
        self.completed.contains(lesson_id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Flip membership of `lesson_id`: add if absent, remove if present.
    /// Toggling twice restores the original set.
    pub fn toggle(&mut self, lesson_id: &str) {
        if !self.completed.remove(lesson_id) {
            self.completed.insert(lesson_id.to_string());
        }
    }

    /// Write the completion set to disk. Failures are logged and swallowed.
    pub fn save(&self) {
        let mut ids: Vec<&str> = self.completed.iter().map(String::as_str).collect();
        ids.sort_unstable(); // stable file content for identical sets
        let json = match serde_json::to_string_pretty(&ids) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize completion set: {}", e);
                return;
            }
        };
        if let Err(e) = atomic_write(&self.dir.join(COMPLETED_FILE), &json) {
            warn!("Failed to save progress: {}", e);
        }
    }
}

/// Read the persisted trainer-mode flag. Anything but the literal string
/// `true` (including a missing file) reads as `false`.
pub fn load_trainer_mode(dir: &Path) -> bool {
    fs::read_to_string(dir.join(TRAINER_MODE_FILE))
        .map(|s| s.trim() == "true")
        .unwrap_or(false)
}

/// Persist the trainer-mode flag. Failures are logged and swallowed.
pub fn save_trainer_mode(dir: &Path, enabled: bool) {
    let value = if enabled { "true" } else { "false" };
    if let Err(e) = atomic_write(&dir.join(TRAINER_MODE_FILE), value) {
        warn!("Failed to save trainer mode: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = ProgressStore::load(tmp.path().to_path_buf());
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::load(tmp.path().to_path_buf());
        store.toggle("lesson-1-1");
        assert!(store.is_complete("lesson-1-1"));
        store.toggle("lesson-1-1");
        assert!(!store.is_complete("lesson-1-1"));
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::load(tmp.path().to_path_buf());
        store.toggle("a1");
        store.toggle("b1");
        store.save();

        let reloaded = ProgressStore::load(tmp.path().to_path_buf());
        assert!(reloaded.is_complete("a1"));
        assert!(reloaded.is_complete("b1"));
        assert!(!reloaded.is_complete("a2"));
    }

    #[test]
    fn test_corrupt_json_reads_as_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(COMPLETED_FILE), "{not json]").unwrap();
        let store = ProgressStore::load(tmp.path().to_path_buf());
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn test_wrong_json_shape_reads_as_empty() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(COMPLETED_FILE), r#"{"a1": true}"#).unwrap();
        let store = ProgressStore::load(tmp.path().to_path_buf());
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn test_completed_file_is_a_json_id_array() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::load(tmp.path().to_path_buf());
        store.toggle("b1");
        store.toggle("a1");
        store.save();

        let json = fs::read_to_string(tmp.path().join(COMPLETED_FILE)).unwrap();
        let ids: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(ids, vec!["a1", "b1"]);
    }

    #[test]
    fn test_trainer_mode_round_trips() {
        let tmp = TempDir::new().unwrap();
        assert!(!load_trainer_mode(tmp.path()));
        save_trainer_mode(tmp.path(), true);
        assert!(load_trainer_mode(tmp.path()));
        save_trainer_mode(tmp.path(), false);
        assert!(!load_trainer_mode(tmp.path()));
    }

    #[test]
    fn test_trainer_mode_garbage_reads_as_false() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(TRAINER_MODE_FILE), "maybe").unwrap();
        assert!(!load_trainer_mode(tmp.path()));
    }
}
