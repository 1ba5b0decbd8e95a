//! Bundled suggestion catalog, keyed by locale.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::site::Site;

/// Locale key used when a locale has no list of its own.
pub const DEFAULT_LOCALE: &str = "default";

const BUNDLED_CATALOG: &str = include_str!("../../data/suggested_sites.json");

/// Curated suggestion lists per locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    locales: HashMap<String, Vec<Site>>,
}

impl Catalog {
    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG).context("parse bundled suggestion catalog")
    }

    /// Load a catalog from a JSON file of the same shape as the bundled one.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog: {}", path.display()))?;
        Self::from_json(&data).with_context(|| format!("parse catalog: {}", path.display()))
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let locales: HashMap<String, Vec<Site>> = serde_json::from_str(data)?;
        if !locales.contains_key(DEFAULT_LOCALE) {
            anyhow::bail!("catalog has no \"{DEFAULT_LOCALE}\" list");
        }
        Ok(Self { locales })
    }

    /// Single-locale catalog.
    pub fn from_sites(sites: Vec<Site>) -> Self {
        let mut locales = HashMap::new();
        locales.insert(DEFAULT_LOCALE.to_string(), sites);
        Self { locales }
    }

    /// List for `locale`, trying the exact key, then the language part
    /// (`en_US` -> `en`), then the default list.
    pub fn sites_for(&self, locale: &str) -> &[Site] {
        let normalized = locale.replace('-', "_");
        let language = normalized.split('_').next().unwrap_or_default();
        self.locales
            .get(normalized.as_str())
            .or_else(|| self.locales.get(language))
            .or_else(|| self.locales.get(DEFAULT_LOCALE))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }
}
