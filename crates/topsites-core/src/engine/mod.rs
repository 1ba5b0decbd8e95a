//! Top sites aggregation.
//!
//! [`TopSitesEngine`] fetches frecency history and pinned sites concurrently,
//! waits for both, strips sponsored history, and merges the result with the
//! curated defaults (see [`merge_top_sites`]). Source failures only ever shrink
//! the result; the aggregation itself cannot fail.

mod enrich;
mod fetch;
mod merge;

use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::config::TopSitesConfig;
use crate::defaults::{Catalog, DefaultSitesProvider};
use crate::normalize::UnparsableUrlPolicy;
use crate::prefs::Prefs;
use crate::site::TopSite;
use crate::source::HistorySource;
use crate::sponsored::SponsoredFilter;

pub use merge::merge_top_sites;

/// Aggregates the shortcut list. Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct TopSitesEngine {
    history: Arc<dyn HistorySource>,
    defaults: DefaultSitesProvider,
    sponsored: SponsoredFilter,
    unparsable_urls: UnparsableUrlPolicy,
}

impl TopSitesEngine {
    pub fn new(
        history: Arc<dyn HistorySource>,
        defaults: DefaultSitesProvider,
        sponsored: SponsoredFilter,
    ) -> Self {
        Self {
            history,
            defaults,
            sponsored,
            unparsable_urls: UnparsableUrlPolicy::default(),
        }
    }

    /// Build an engine from config: catalog (bundled or `catalog_path`),
    /// locale, sponsored marker parameter and unparsable-URL policy.
    pub fn from_config(
        cfg: &TopSitesConfig,
        history: Arc<dyn HistorySource>,
        prefs: Arc<dyn Prefs>,
    ) -> Result<Self> {
        let catalog = match &cfg.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::bundled()?,
        };
        let defaults = DefaultSitesProvider::new(Arc::new(catalog), cfg.locale(), prefs);
        let sponsored = SponsoredFilter::with_search_param(&cfg.sponsored_search_param);
        Ok(Self::new(history, defaults, sponsored).with_unparsable_url_policy(cfg.unparsable_urls))
    }

    pub fn with_unparsable_url_policy(mut self, policy: UnparsableUrlPolicy) -> Self {
        self.unparsable_urls = policy;
        self
    }

    pub fn defaults(&self) -> &DefaultSitesProvider {
        &self.defaults
    }

    /// Aggregate the shortcut list, asking history for at most `max_items`
    /// frecency entries.
    pub async fn top_sites(&self, max_items: usize) -> Vec<TopSite> {
        let (frecency, pinned) = fetch::fetch_sources(Arc::clone(&self.history), max_items).await;

        let frecency = self.sponsored.filter_sponsored_sites(frecency);
        let defaults = self.defaults.default_top_sites();
        let pinned_count = pinned.len();

        let sites = merge_top_sites(frecency, pinned, &defaults, self.unparsable_urls);
        tracing::debug!(
            max_items,
            pinned = pinned_count,
            defaults = defaults.len(),
            total = sites.len(),
            "aggregated top sites"
        );
        sites
    }

    /// Aggregate in a background task and hand the list to `continuation`.
    ///
    /// Must be called from within a Tokio runtime. There is no cancellation;
    /// callers that lose interest drop the result.
    pub fn get_top_sites<F>(&self, max_items: usize, continuation: F) -> JoinHandle<()>
    where
        F: FnOnce(Vec<TopSite>) + Send + 'static,
    {
        let engine = self.clone();
        tokio::spawn(async move {
            let sites = engine.top_sites(max_items).await;
            continuation(sites);
        })
    }
}

impl std::fmt::Debug for TopSitesEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopSitesEngine")
            .field("defaults", &self.defaults)
            .field("sponsored", &self.sponsored)
            .field("unparsable_urls", &self.unparsable_urls)
            .finish_non_exhaustive()
    }
}
