//! Fixed in-memory source.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::site::Site;

use super::HistorySource;

/// Serves fixed lists. Either list can be replaced by a failure.
#[derive(Debug, Clone)]
pub struct StaticHistory {
    frecency: Option<Vec<Site>>,
    pinned: Option<Vec<Site>>,
}

impl StaticHistory {
    pub fn new(frecency: Vec<Site>, pinned: Vec<Site>) -> Self {
        Self {
            frecency: Some(frecency),
            pinned: Some(pinned),
        }
    }

    /// Make the frecency query fail.
    pub fn failing_frecency(mut self) -> Self {
        self.frecency = None;
        self
    }

    /// Make the pinned query fail.
    pub fn failing_pinned(mut self) -> Self {
        self.pinned = None;
        self
    }
}

impl Default for StaticHistory {
    /// Both queries succeed with nothing.
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[async_trait]
impl HistorySource for StaticHistory {
    async fn frecency_ranked(&self, limit: usize) -> Result<Vec<Site>, SourceError> {
        match &self.frecency {
            Some(sites) => Ok(sites.iter().take(limit).cloned().collect()),
            None => Err(SourceError::unavailable("frecency", "source configured to fail")),
        }
    }

    async fn pinned(&self) -> Result<Vec<Site>, SourceError> {
        self.pinned
            .clone()
            .ok_or_else(|| SourceError::unavailable("pinned", "source configured to fail"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn frecency_is_truncated_to_limit() {
        let sites: Vec<Site> = (0..5).map(|i| Site::new(format!("https://s{i}.test/"), "")).collect();
        let source = StaticHistory::new(sites, Vec::new());
        let got = source.frecency_ranked(3).await.unwrap();
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].url, "https://s0.test/");
    }

    #[tokio::test]
    async fn failures_are_per_query() {
        let source = StaticHistory::new(Vec::new(), vec![Site::new("https://p.test/", "")]).failing_frecency();
        assert!(source.frecency_ranked(16).await.is_err());
        assert_eq!(source.pinned().await.unwrap().len(), 1);
    }
}
