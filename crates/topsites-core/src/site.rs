//! Shortcut site values.

use serde::{Deserialize, Serialize};

/// One shortcut entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Bundled favicon asset; only curated catalog entries carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon_asset: Option<String>,
}

impl Site {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            favicon_asset: None,
        }
    }

    pub fn with_favicon_asset(mut self, asset: impl Into<String>) -> Self {
        self.favicon_asset = Some(asset.into());
        self
    }
}

/// A site in the aggregated list, tagged with where it stands.
///
/// Pinned entries always sort ahead of plain ones and are never dropped as
/// duplicates of each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "site", rename_all = "lowercase")]
pub enum TopSite {
    Plain(Site),
    Pinned(Site),
}

impl TopSite {
    pub fn site(&self) -> &Site {
        match self {
            TopSite::Plain(site) | TopSite::Pinned(site) => site,
        }
    }

    pub fn into_site(self) -> Site {
        match self {
            TopSite::Plain(site) | TopSite::Pinned(site) => site,
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, TopSite::Pinned(_))
    }

    pub fn url(&self) -> &str {
        &self.site().url
    }

    pub fn title(&self) -> &str {
        &self.site().title
    }
}

/// Device class used to bound the frecency query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFactor {
    /// Phones.
    #[default]
    Compact,
    /// Tablets and larger screens.
    Regular,
}

impl FormFactor {
    /// Maximum number of frecency entries requested for this form factor.
    pub fn max_items(self) -> usize {
        match self {
            FormFactor::Compact => 16,
            FormFactor::Regular => 32,
        }
    }
}
