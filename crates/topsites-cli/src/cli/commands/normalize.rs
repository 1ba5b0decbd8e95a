//! `topsites normalize <url>` – show how a URL is keyed for dedup.

use anyhow::Result;
use topsites_core::normalize::{short_display_string, site_key, SiteKey, UnparsableUrlPolicy};

pub fn run_normalize(url: &str, policy: UnparsableUrlPolicy) -> Result<()> {
    println!("key:     {}", describe_key(&site_key(url, policy)));
    println!("display: {}", short_display_string(url));
    Ok(())
}

fn describe_key(key: &SiteKey) -> String {
    match key {
        SiteKey::Host(host) => format!("host {host}"),
        SiteKey::Unparsed(raw) => format!("unparsed {raw:?}"),
    }
}
