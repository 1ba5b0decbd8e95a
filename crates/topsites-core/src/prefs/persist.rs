//! Preferences persisted as JSON under the XDG state dir.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use anyhow::{Context, Result};

use crate::error::PrefsError;

use super::Prefs;

/// File-backed preference store. Every write rewrites the whole file.
#[derive(Debug)]
pub struct JsonFilePrefs {
    path: PathBuf,
    lists: RwLock<BTreeMap<String, Vec<String>>>,
}

impl JsonFilePrefs {
    /// Default path: `~/.local/state/topsites/prefs.json`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("topsites")?;
        Ok(xdg_dirs.get_state_home().join("topsites").join("prefs.json"))
    }

    /// Open the default store.
    pub fn open_default() -> Result<Self> {
        Self::open(&Self::default_path()?)
    }

    /// Open the store at `path`. A missing file is an empty store; a file that
    /// exists but cannot be parsed is an error so it is not silently clobbered.
    pub fn open(path: &Path) -> Result<Self> {
        let lists = match std::fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("parse prefs: {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e).with_context(|| format!("read prefs: {}", path.display())),
        };
        Ok(Self {
            path: path.to_path_buf(),
            lists: RwLock::new(lists),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, lists: &BTreeMap<String, Vec<String>>) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| PrefsError::CreateDir {
                path: parent.display().to_string(),
                err,
            })?;
        }
        let json = serde_json::to_string_pretty(lists)?;
        std::fs::write(&self.path, json).map_err(|err| PrefsError::Write {
            path: self.path.display().to_string(),
            err,
        })?;
        tracing::debug!(path = %self.path.display(), "saved prefs");
        Ok(())
    }
}

impl Prefs for JsonFilePrefs {
    fn string_list(&self, key: &str) -> Vec<String> {
        self.lists
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn set_string_list(&self, key: &str, values: Vec<String>) -> Result<(), PrefsError> {
        let mut lists = self.lists.write().unwrap_or_else(|e| e.into_inner());
        let mut staged = lists.clone();
        staged.insert(key.to_string(), values);
        self.save(&staged)?;
        *lists = staged;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        let mut lists = self.lists.write().unwrap_or_else(|e| e.into_inner());
        if !lists.contains_key(key) {
            return Ok(());
        }
        let mut staged = lists.clone();
        staged.remove(key);
        self.save(&staged)?;
        *lists = staged;
        Ok(())
    }
}
