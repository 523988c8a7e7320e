//! The persistent slot
//!
//! One JSON file holds the entire serialized `AppState`. It is read once at
//! startup and rewritten in full after every mutation; there is no batching
//! and no versioning.

use crate::model::AppState;
use anyhow::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Handle to the on-disk state slot
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> StateStore {
        StateStore { path }
    }

    /// Store at the default slot, `$HOME/.planner-tui/state.json`
    pub fn at_default_slot() -> Result<StateStore> {
        let home = env::var("HOME")
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(StateStore::new(
            PathBuf::from(home).join(".planner-tui").join("state.json"),
        ))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Hydrate state from the slot
    ///
    /// An absent slot seeds the sample state and writes it immediately. A
    /// slot that exists but cannot be read or parsed falls back to the same
    /// sample state with a warning, leaving the file untouched until the
    /// next mutation overwrites it.
    pub fn load(&self) -> (AppState, Option<String>) {
        if !self.path.exists() {
            let state = AppState::seeded();
            let warning = self
                .save(&state)
                .err()
                .map(|e| format!("Could not write {}: {}", self.path.display(), e));
            return (state, warning);
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                return (
                    AppState::seeded(),
                    Some(format!(
                        "Could not read saved data ({}); starting from sample data",
                        e
                    )),
                );
            }
        };

        match serde_json::from_str(&contents) {
            Ok(state) => (state, None),
            Err(_) => (
                AppState::seeded(),
                Some("Saved data was unreadable; starting from sample data".to_string()),
            ),
        }
    }

    /// Serialize the full state and write it back synchronously
    pub fn save(&self, state: &AppState) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Remove the slot entirely (the "reset" action)
    pub fn reset(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> StateStore {
        StateStore::new(dir.path().join("state.json"))
    }

    #[test]
    fn test_absent_slot_seeds_and_writes() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let (state, warning) = store.load();

        assert!(warning.is_none());
        assert_eq!(state.tasks.len(), 2);
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut state = AppState::default();
        state.add_task("Order ice | Catering").unwrap();
        state.add_budget_item("Speakers", 120.0).unwrap();
        store.save(&state).unwrap();

        let (loaded, warning) = store.load();
        assert!(warning.is_none());
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_corrupt_slot_falls_back_to_sample_with_warning() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        let (state, warning) = store.load();

        assert!(warning.is_some());
        assert_eq!(state.tasks.len(), 2);
        // The corrupt file is left in place until the next save
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{not json");
    }

    #[test]
    fn test_reset_removes_slot() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&AppState::default()).unwrap();
        assert!(store.path().exists());

        store.reset().unwrap();
        assert!(!store.path().exists());

        // Resetting an already-absent slot is fine
        store.reset().unwrap();
    }
}
