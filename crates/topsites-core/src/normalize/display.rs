//! Short display form of a site's domain.

use super::normalized_host;

/// Two-label public suffixes common enough to matter for shortcut titles.
const MULTI_LABEL_SUFFIXES: &[&str] = &[
    "ac.uk", "co.uk", "gov.uk", "org.uk", "me.uk", "ltd.uk", "plc.uk",
    "com.au", "net.au", "org.au", "edu.au", "gov.au",
    "co.nz", "org.nz", "net.nz",
    "co.jp", "ne.jp", "or.jp", "ac.jp",
    "co.kr", "or.kr",
    "com.br", "net.br", "org.br",
    "com.cn", "net.cn", "org.cn", "gov.cn",
    "com.hk", "com.tw", "com.sg", "com.my",
    "co.in", "net.in", "org.in",
    "co.za", "com.mx", "com.ar", "com.tr", "co.il", "com.ua",
];

/// Public suffix of a host: a known two-label suffix, otherwise the last
/// label. `None` for single-label and IP hosts.
pub fn public_suffix(host: &str) -> Option<&str> {
    if host.starts_with('[') || host.parse::<std::net::Ipv4Addr>().is_ok() {
        return None;
    }
    let (_, last) = host.rsplit_once('.')?;
    if last.is_empty() {
        return None;
    }
    let two = MULTI_LABEL_SUFFIXES
        .iter()
        .find(|s| host.ends_with(*s) && host.len() > s.len() && host.as_bytes()[host.len() - s.len() - 1] == b'.');
    Some(match two {
        Some(s) => &host[host.len() - s.len()..],
        None => last,
    })
}

/// Normalized host with its public suffix removed: `m.youtube.com` gives
/// `youtube`, `www.bbc.co.uk` gives `bbc`.
///
/// Hosts without a recognisable suffix are returned as normalized; URLs that
/// do not parse are returned unchanged.
pub fn short_display_string(url: &str) -> String {
    let Some(host) = normalized_host(url) else {
        return url.to_string();
    };
    match public_suffix(&host) {
        Some(suffix) => host[..host.len() - suffix.len() - 1].to_string(),
        None => host,
    }
}
