//! Swap plain entries for curated ones that carry bundled favicons.

use std::collections::HashMap;

use crate::normalize::{short_display_string, site_key, SiteKey, UnparsableUrlPolicy};
use crate::site::{Site, TopSite};

/// Replace each plain entry whose display domain equals a curated title
/// (case-insensitively) with that curated entry. Pinned entries are left
/// alone. A replacement is skipped when the curated entry's host is already
/// held by another entry, so no two plain entries ever share a host.
pub(super) fn prefer_curated(
    sites: Vec<TopSite>,
    defaults: &[Site],
    policy: UnparsableUrlPolicy,
) -> Vec<TopSite> {
    if defaults.is_empty() {
        return sites;
    }

    let mut claimed: HashMap<SiteKey, usize> = HashMap::new();
    for s in &sites {
        *claimed.entry(site_key(s.url(), policy)).or_default() += 1;
    }

    let mut out = Vec::with_capacity(sites.len());
    for entry in sites {
        let site = match entry {
            TopSite::Pinned(_) => {
                out.push(entry);
                continue;
            }
            TopSite::Plain(site) => site,
        };

        let domain = short_display_string(&site.url);
        let curated = (!domain.is_empty())
            .then(|| defaults.iter().find(|d| d.title.to_lowercase() == domain))
            .flatten();
        let Some(curated) = curated.filter(|c| **c != site) else {
            out.push(TopSite::Plain(site));
            continue;
        };

        let own = site_key(&site.url, policy);
        let replacement = site_key(&curated.url, policy);
        if replacement != own {
            if claimed.contains_key(&replacement) {
                tracing::debug!(url = %site.url, curated = %curated.url, "curated host already listed; keeping entry");
                out.push(TopSite::Plain(site));
                continue;
            }
            release(&mut claimed, own);
            claimed.insert(replacement, 1);
        }
        out.push(TopSite::Plain(curated.clone()));
    }
    out
}

fn release(claimed: &mut HashMap<SiteKey, usize>, key: SiteKey) {
    if let Some(count) = claimed.get_mut(&key) {
        *count -= 1;
        if *count == 0 {
            claimed.remove(&key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_defaults_is_identity() {
        let sites = vec![TopSite::Plain(Site::new("https://a.test/", "A"))];
        assert_eq!(prefer_curated(sites.clone(), &[], UnparsableUrlPolicy::Distinct), sites);
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let curated = Site::new("https://www.amazon.com/", "AMAZON").with_favicon_asset("amz");
        let out = prefer_curated(
            vec![TopSite::Plain(Site::new("https://amazon.com/dp/1", "Some product"))],
            std::slice::from_ref(&curated),
            UnparsableUrlPolicy::Distinct,
        );
        assert_eq!(out, vec![TopSite::Plain(curated)]);
    }

    #[test]
    fn replacement_to_free_host_moves_claim() {
        // wikipedia.de displays as "wikipedia"; the curated wikipedia.org host is free.
        let curated = Site::new("https://www.wikipedia.org/", "Wikipedia");
        let out = prefer_curated(
            vec![
                TopSite::Plain(Site::new("https://wikipedia.de/", "de")),
                TopSite::Plain(Site::new("https://wikipedia.fr/", "fr")),
            ],
            std::slice::from_ref(&curated),
            UnparsableUrlPolicy::Distinct,
        );
        // The first takes the curated host; the second would duplicate it.
        assert_eq!(
            out,
            vec![
                TopSite::Plain(curated),
                TopSite::Plain(Site::new("https://wikipedia.fr/", "fr")),
            ]
        );
    }

    #[test]
    fn empty_domain_never_matches_untitled_curated_entry() {
        let out = prefer_curated(
            vec![TopSite::Plain(Site::new("", "blank"))],
            &[Site::new("https://x.test/", "")],
            UnparsableUrlPolicy::Distinct,
        );
        assert_eq!(out[0].title(), "blank");
    }
}
