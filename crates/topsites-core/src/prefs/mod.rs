//! Key/value preference stores.
//!
//! The core only needs string-list preferences (the removed-suggestion list).
//! [`MemoryPrefs`] is process-local; [`JsonFilePrefs`] persists to a JSON file
//! under the XDG state directory so removals survive restarts.

mod persist;

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::PrefsError;

pub use persist::JsonFilePrefs;

/// Preference key holding URLs of curated suggestions the user removed.
pub const DELETED_SUGGESTED_SITES_KEY: &str = "topSites.deletedSuggestedSites";

/// String-list preference store.
pub trait Prefs: Send + Sync {
    /// Stored list for `key`; empty when unset.
    fn string_list(&self, key: &str) -> Vec<String>;

    /// Replace the list stored under `key`.
    fn set_string_list(&self, key: &str, values: Vec<String>) -> Result<(), PrefsError>;

    /// Remove `key` entirely.
    fn remove(&self, key: &str) -> Result<(), PrefsError>;
}

/// In-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    lists: RwLock<HashMap<String, Vec<String>>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list<I, S>(key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefs = Self::new();
        prefs
            .lists
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), values.into_iter().map(Into::into).collect());
        prefs
    }
}

impl Prefs for MemoryPrefs {
    fn string_list(&self, key: &str) -> Vec<String> {
        self.lists
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn set_string_list(&self, key: &str, values: Vec<String>) -> Result<(), PrefsError> {
        self.lists
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), values);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PrefsError> {
        self.lists.write().unwrap_or_else(|e| e.into_inner()).remove(key);
        Ok(())
    }
}
