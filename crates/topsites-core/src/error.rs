//! Error types shared across the core.
//!
//! Source failures are typed so the engine can log what went wrong before
//! degrading the source to an empty list. Nothing here is ever surfaced from
//! the aggregation call itself.

use thiserror::Error;

/// A site source could not deliver its list (`SourceUnavailable`).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The backing store reported a failure.
    #[error("{source_name} unavailable: {reason}")]
    Unavailable {
        source_name: &'static str,
        reason: String,
    },
    /// Reading a snapshot file failed.
    #[error("read {path}: {err}")]
    Io {
        path: String,
        #[source]
        err: std::io::Error,
    },
    /// A snapshot file was not valid JSON for the expected shape.
    #[error("parse {path}: {err}")]
    Parse {
        path: String,
        #[source]
        err: serde_json::Error,
    },
}

impl SourceError {
    pub fn unavailable(source_name: &'static str, reason: impl Into<String>) -> Self {
        SourceError::Unavailable {
            source_name,
            reason: reason.into(),
        }
    }
}

/// Failure writing to a preference store.
#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("create dir {path}: {err}")]
    CreateDir {
        path: String,
        #[source]
        err: std::io::Error,
    },
    #[error("write prefs {path}: {err}")]
    Write {
        path: String,
        #[source]
        err: std::io::Error,
    },
    #[error("serialize prefs: {0}")]
    Serialize(#[from] serde_json::Error),
}
