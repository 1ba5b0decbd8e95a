//! Removal of history entries that came from sponsored-tile clicks.
//!
//! Visits that started from a sponsored tile should not feed back into the
//! organic shortcut ranking. Attribution itself is owned elsewhere; this
//! module only asks a [`ClickAttribution`] about each site.

use std::collections::HashSet;
use std::sync::Arc;

use url::Url;

use crate::site::Site;

/// Query parameter appended to sponsored-tile landing URLs.
pub const DEFAULT_SPONSORED_SEARCH_PARAM: &str = "mfadid=adm";

/// Answers whether a site was reached through a sponsored tile.
pub trait ClickAttribution: Send + Sync {
    fn is_sponsored(&self, site: &Site) -> bool;
}

/// Attribution by a marker `name=value` query parameter on the visited URL.
#[derive(Debug, Clone)]
pub struct SearchParamAttribution {
    name: String,
    value: String,
    raw: String,
}

impl SearchParamAttribution {
    /// `param` is `name=value`; a bare `name` matches any value.
    pub fn new(param: &str) -> Self {
        let (name, value) = param.split_once('=').unwrap_or((param, ""));
        Self {
            name: name.to_string(),
            value: value.to_string(),
            raw: param.to_string(),
        }
    }
}

impl Default for SearchParamAttribution {
    fn default() -> Self {
        Self::new(DEFAULT_SPONSORED_SEARCH_PARAM)
    }
}

impl ClickAttribution for SearchParamAttribution {
    fn is_sponsored(&self, site: &Site) -> bool {
        if self.name.is_empty() {
            return false;
        }
        match Url::parse(&site.url) {
            Ok(url) => url
                .query_pairs()
                .any(|(k, v)| k == self.name.as_str() && (self.value.is_empty() || v == self.value.as_str())),
            // Not a URL we can take apart; fall back to a plain substring match.
            Err(_) => site.url.contains(&self.raw),
        }
    }
}

/// Attribution from URLs recorded at sponsored-tile click time.
#[derive(Debug, Clone, Default)]
pub struct RecordedClicks {
    urls: HashSet<String>,
}

impl RecordedClicks {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }
}

impl ClickAttribution for RecordedClicks {
    fn is_sponsored(&self, site: &Site) -> bool {
        self.urls.contains(&site.url)
    }
}

/// Drops sponsored-attributed entries from a ranked list.
#[derive(Clone)]
pub struct SponsoredFilter {
    attribution: Arc<dyn ClickAttribution>,
}

impl SponsoredFilter {
    pub fn new(attribution: Arc<dyn ClickAttribution>) -> Self {
        Self { attribution }
    }

    /// Filter using the built-in marker parameter.
    pub fn with_search_param(param: &str) -> Self {
        Self::new(Arc::new(SearchParamAttribution::new(param)))
    }

    /// Returns `sites` minus sponsored entries, order preserved.
    pub fn filter_sponsored_sites(&self, sites: Vec<Site>) -> Vec<Site> {
        let before = sites.len();
        let kept: Vec<Site> = sites
            .into_iter()
            .filter(|s| !self.attribution.is_sponsored(s))
            .collect();
        if kept.len() != before {
            tracing::debug!(dropped = before - kept.len(), "filtered sponsored history entries");
        }
        kept
    }
}

impl Default for SponsoredFilter {
    fn default() -> Self {
        Self::new(Arc::new(SearchParamAttribution::default()))
    }
}

impl std::fmt::Debug for SponsoredFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SponsoredFilter").finish_non_exhaustive()
    }
}
