//! Asynchronous site sources.
//!
//! The history store that ranks sites by frecency and keeps the pinned list is
//! owned elsewhere; the engine only consumes [`HistorySource`]. Two adapters
//! live here: [`StaticHistory`] for fixed lists and [`SnapshotHistory`] for a
//! JSON snapshot on disk.

mod memory;
mod snapshot;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::site::Site;

pub use memory::StaticHistory;
pub use snapshot::{HistorySnapshot, SnapshotHistory};

/// History-backed site queries.
#[async_trait]
pub trait HistorySource: Send + Sync {
    /// Up to `limit` sites ranked by frecency, most relevant first.
    async fn frecency_ranked(&self, limit: usize) -> Result<Vec<Site>, SourceError>;

    /// Sites the user pinned, in pin order.
    async fn pinned(&self) -> Result<Vec<Site>, SourceError>;
}
