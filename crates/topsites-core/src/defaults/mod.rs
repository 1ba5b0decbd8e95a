//! Curated default suggestions, minus the ones the user removed.

mod catalog;

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::PrefsError;
use crate::prefs::{Prefs, DELETED_SUGGESTED_SITES_KEY};
use crate::site::Site;

pub use catalog::{Catalog, DEFAULT_LOCALE};

/// `sites` without any entry whose URL is in `removal_list`, order preserved.
pub fn default_top_sites(sites: &[Site], removal_list: &HashSet<String>) -> Vec<Site> {
    sites
        .iter()
        .filter(|s| !removal_list.contains(&s.url))
        .cloned()
        .collect()
}

/// Serves the curated list for one locale, filtered by the persisted
/// removal list.
#[derive(Clone)]
pub struct DefaultSitesProvider {
    catalog: Arc<Catalog>,
    locale: String,
    prefs: Arc<dyn Prefs>,
}

impl DefaultSitesProvider {
    pub fn new(catalog: Arc<Catalog>, locale: impl Into<String>, prefs: Arc<dyn Prefs>) -> Self {
        Self {
            catalog,
            locale: locale.into(),
            prefs,
        }
    }

    /// Curated suggestions minus removed ones. Reads the removal list once.
    pub fn default_top_sites(&self) -> Vec<Site> {
        let removal: HashSet<String> = self
            .prefs
            .string_list(DELETED_SUGGESTED_SITES_KEY)
            .into_iter()
            .collect();
        default_top_sites(self.catalog.sites_for(&self.locale), &removal)
    }

    /// Hide a curated suggestion from now on. Removing the same URL twice is a no-op.
    pub fn remove_suggestion(&self, url: &str) -> Result<(), PrefsError> {
        let mut removed = self.prefs.string_list(DELETED_SUGGESTED_SITES_KEY);
        if removed.iter().any(|u| u == url) {
            return Ok(());
        }
        removed.push(url.to_string());
        self.prefs.set_string_list(DELETED_SUGGESTED_SITES_KEY, removed)?;
        tracing::info!(url, "removed default suggestion");
        Ok(())
    }

    /// Locale this provider serves.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Locales the catalog has lists for, sorted.
    pub fn available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.catalog.locales().map(str::to_string).collect();
        locales.sort();
        locales
    }

    /// Bring back every removed suggestion.
    pub fn restore_suggestions(&self) -> Result<(), PrefsError> {
        self.prefs.remove(DELETED_SUGGESTED_SITES_KEY)?;
        tracing::info!("restored default suggestions");
        Ok(())
    }
}

impl std::fmt::Debug for DefaultSitesProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultSitesProvider")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
