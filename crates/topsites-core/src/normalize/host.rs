//! Normalized host and equivalence key.

use serde::{Deserialize, Serialize};
use url::{Host, Url};

/// Leading labels treated as presentation variants of the same site.
const STRIPPED_PREFIXES: &[&str] = &["www", "mobile", "m"];

/// How URLs that have no host are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnparsableUrlPolicy {
    /// Key on the raw URL string, so distinct unparsable URLs stay distinct.
    #[default]
    Distinct,
    /// All unparsable URLs share the empty key (legacy behaviour).
    Collide,
}

/// Equivalence key for a site URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SiteKey {
    Host(String),
    Unparsed(String),
}

impl SiteKey {
    pub fn as_str(&self) -> &str {
        match self {
            SiteKey::Host(h) | SiteKey::Unparsed(h) => h,
        }
    }
}

/// Host of `url` with one conventional leading label (`www.`, `mobile.`,
/// `m.`) removed. `None` when the URL does not parse or has no host.
///
/// IP hosts are returned unchanged.
pub fn normalized_host(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    match parsed.host()? {
        Host::Domain(domain) => {
            let domain = domain.trim_end_matches('.').to_ascii_lowercase();
            if domain.is_empty() {
                return None;
            }
            Some(strip_prefix_label(&domain).to_string())
        }
        Host::Ipv4(addr) => Some(addr.to_string()),
        Host::Ipv6(addr) => Some(format!("[{addr}]")),
    }
}

fn strip_prefix_label(domain: &str) -> &str {
    if let Some((first, rest)) = domain.split_once('.') {
        if !rest.is_empty() && STRIPPED_PREFIXES.contains(&first) {
            return rest;
        }
    }
    domain
}

/// Equivalence key for `url` under the given unparsable-URL policy.
pub fn site_key(url: &str, policy: UnparsableUrlPolicy) -> SiteKey {
    match normalized_host(url) {
        Some(host) => SiteKey::Host(host),
        None => match policy {
            UnparsableUrlPolicy::Distinct => SiteKey::Unparsed(url.to_string()),
            UnparsableUrlPolicy::Collide => SiteKey::Unparsed(String::new()),
        },
    }
}
