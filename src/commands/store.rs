//! Persistence for user-defined commands.
//!
//! One JSON document holds the full custom-command list; writes are
//! last-writer-wins. The registry depends only on the [`CommandStore`] trait
//! so tests can inject an in-memory fake. External changes (another window or
//! process writing the file) surface through [`watch_store`]; the registry
//! reloads when notified, it never polls.

use std::fs;
use std::path::{Path, PathBuf};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::warn;

use super::types::CustomCommand;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("store watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Load/save contract for the custom-command list.
pub trait CommandStore: Send {
    fn load(&self) -> Result<Vec<CustomCommand>, StoreError>;
    fn save(&self, commands: &[CustomCommand]) -> Result<(), StoreError>;
}

/// File-backed store: a single JSON array of commands.
pub struct JsonCommandStore {
    path: PathBuf,
}

impl JsonCommandStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CommandStore for JsonCommandStore {
    /// Missing file means no custom commands yet.
    fn load(&self) -> Result<Vec<CustomCommand>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, commands: &[CustomCommand]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(commands)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Default location: `<config dir>/omnibar/commands.json`.
pub fn default_store_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("omnibar")
        .join("commands.json")
}

/// Keeps the file watcher alive; dropping it stops change notifications.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
}

/// Watch a store file and invoke `on_change` whenever another writer touches
/// it. The callback runs on the watcher's thread; hosts typically forward it
/// into their event loop and call `CommandRegistry::reload` there.
pub fn watch_store(
    path: &Path,
    on_change: impl Fn() + Send + 'static,
) -> Result<StoreWatcher, StoreError> {
    let mut watcher = notify::recommended_watcher(move |event: notify::Result<notify::Event>| {
        match event {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => on_change(),
            Ok(_) => {}
            Err(e) => warn!(error = %e, "command store watch error"),
        }
    })?;
    // Watch the parent so we still get events when the file is replaced
    // atomically (write-to-temp-then-rename).
    let target = path.parent().unwrap_or(path);
    fs::create_dir_all(target)?;
    watcher.watch(target, RecursiveMode::NonRecursive)?;
    Ok(StoreWatcher { _watcher: watcher })
}

/// In-memory store for tests and headless hosts. The failure toggle makes
/// storage-degradation paths testable.
#[derive(Default)]
pub struct MemoryCommandStore {
    commands: Mutex<Vec<CustomCommand>>,
    fail: Mutex<bool>,
}

impl MemoryCommandStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commands(commands: Vec<CustomCommand>) -> Self {
        Self {
            commands: Mutex::new(commands),
            fail: Mutex::new(false),
        }
    }

    /// Make subsequent load/save calls fail, simulating quota or io errors.
    pub fn set_fail(&self, fail: bool) {
        *self.fail.lock() = fail;
    }

    fn check(&self) -> Result<(), StoreError> {
        if *self.fail.lock() {
            Err(StoreError::Io(std::io::Error::other("simulated failure")))
        } else {
            Ok(())
        }
    }
}

impl CommandStore for MemoryCommandStore {
    fn load(&self) -> Result<Vec<CustomCommand>, StoreError> {
        self.check()?;
        Ok(self.commands.lock().clone())
    }

    fn save(&self, commands: &[CustomCommand]) -> Result<(), StoreError> {
        self.check()?;
        *self.commands.lock() = commands.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::types::{CommandCategory, CommandTarget};
    use tempfile::tempdir;

    fn sample() -> CustomCommand {
        CustomCommand {
            id: "id-1".into(),
            name: "Open POS".into(),
            category: CommandCategory::Navigation,
            shortcut: "ctrl+shift+x".into(),
            target: CommandTarget::GoPos,
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = JsonCommandStore::new("/nonexistent/omnibar/commands.json");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = JsonCommandStore::new(dir.path().join("commands.json"));

        store.save(&[sample()]).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, vec![sample()]);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let store = JsonCommandStore::new(dir.path().join("nested/deeper/commands.json"));
        store.save(&[sample()]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_panic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("commands.json");
        fs::write(&path, "{broken").unwrap();

        let store = JsonCommandStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn memory_store_failure_toggle() {
        let store = MemoryCommandStore::new();
        store.save(&[sample()]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);

        store.set_fail(true);
        assert!(store.load().is_err());
        assert!(store.save(&[]).is_err());

        store.set_fail(false);
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
