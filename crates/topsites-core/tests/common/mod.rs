//! Test sources and helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use topsites_core::defaults::{Catalog, DefaultSitesProvider, DEFAULT_LOCALE};
use topsites_core::error::SourceError;
use topsites_core::prefs::{MemoryPrefs, Prefs};
use topsites_core::site::Site;
use topsites_core::source::HistorySource;

pub fn site(url: &str, title: &str) -> Site {
    Site::new(url, title)
}

pub fn defaults_provider(sites: Vec<Site>) -> DefaultSitesProvider {
    defaults_provider_with_prefs(sites, Arc::new(MemoryPrefs::new()))
}

pub fn defaults_provider_with_prefs(sites: Vec<Site>, prefs: Arc<dyn Prefs>) -> DefaultSitesProvider {
    DefaultSitesProvider::new(Arc::new(Catalog::from_sites(sites)), DEFAULT_LOCALE, prefs)
}

/// Records the `limit` every frecency call receives.
#[derive(Default)]
pub struct RecordingHistory {
    pub frecency: Vec<Site>,
    pub pinned: Vec<Site>,
    last_limit: AtomicUsize,
    calls: AtomicUsize,
}

impl RecordingHistory {
    pub fn new(frecency: Vec<Site>, pinned: Vec<Site>) -> Self {
        Self {
            frecency,
            pinned,
            ..Self::default()
        }
    }

    pub fn last_limit(&self) -> usize {
        self.last_limit.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistorySource for RecordingHistory {
    async fn frecency_ranked(&self, limit: usize) -> Result<Vec<Site>, SourceError> {
        self.last_limit.store(limit, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.frecency.iter().take(limit).cloned().collect())
    }

    async fn pinned(&self) -> Result<Vec<Site>, SourceError> {
        Ok(self.pinned.clone())
    }
}

/// Each query sleeps before answering; used to check the join waits for both.
pub struct SlowHistory {
    pub frecency: Vec<Site>,
    pub pinned: Vec<Site>,
    pub frecency_delay: Duration,
    pub pinned_delay: Duration,
}

#[async_trait]
impl HistorySource for SlowHistory {
    async fn frecency_ranked(&self, limit: usize) -> Result<Vec<Site>, SourceError> {
        tokio::time::sleep(self.frecency_delay).await;
        Ok(self.frecency.iter().take(limit).cloned().collect())
    }

    async fn pinned(&self) -> Result<Vec<Site>, SourceError> {
        tokio::time::sleep(self.pinned_delay).await;
        Ok(self.pinned.clone())
    }
}

/// The pinned query panics inside its task.
pub struct PanickingPinned {
    pub frecency: Vec<Site>,
}

#[async_trait]
impl HistorySource for PanickingPinned {
    async fn frecency_ranked(&self, limit: usize) -> Result<Vec<Site>, SourceError> {
        Ok(self.frecency.iter().take(limit).cloned().collect())
    }

    async fn pinned(&self) -> Result<Vec<Site>, SourceError> {
        panic!("pinned store crashed");
    }
}
