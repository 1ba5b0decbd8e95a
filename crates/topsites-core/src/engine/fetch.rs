//! Concurrent fetch of both history queries behind a single join.

use std::sync::Arc;

use tokio::task::JoinError;

use crate::error::SourceError;
use crate::site::Site;
use crate::source::HistorySource;

/// Runs the frecency and pinned queries as separate tasks and waits for both.
/// A failed query (error or panicked task) yields an empty list.
pub(super) async fn fetch_sources(
    history: Arc<dyn HistorySource>,
    max_items: usize,
) -> (Vec<Site>, Vec<Site>) {
    let frecency_task = tokio::spawn({
        let history = Arc::clone(&history);
        async move { history.frecency_ranked(max_items).await }
    });
    let pinned_task = tokio::spawn(async move { history.pinned().await });

    let (frecency, pinned) = tokio::join!(frecency_task, pinned_task);
    (settle("frecency", frecency), settle("pinned", pinned))
}

fn settle(source: &'static str, joined: Result<Result<Vec<Site>, SourceError>, JoinError>) -> Vec<Site> {
    match joined {
        Ok(Ok(sites)) => {
            tracing::debug!(source, count = sites.len(), "site source returned");
            sites
        }
        Ok(Err(e)) => {
            tracing::warn!(source, "site source failed, using empty list: {}", e);
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(source, "site source task did not complete, using empty list: {}", e);
            Vec::new()
        }
    }
}
