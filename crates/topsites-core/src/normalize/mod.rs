//! URL identity for deduplication.
//!
//! Sites are compared on their normalized host rather than the full URL, so
//! `https://m.youtube.com/feed` and `https://youtube.com/` are the same
//! shortcut. The display string is the host with its public suffix dropped
//! and is what curated titles are matched against.

mod display;
mod host;

pub use display::{public_suffix, short_display_string};
pub use host::{normalized_host, site_key, SiteKey, UnparsableUrlPolicy};
