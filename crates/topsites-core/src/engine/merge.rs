//! Merge of frecency, pinned and curated lists into the final order.

use std::collections::HashSet;

use crate::normalize::{site_key, UnparsableUrlPolicy};
use crate::site::{Site, TopSite};

use super::enrich::prefer_curated;

/// Keep the first entry for every key, in iteration order.
fn union_by_key<I>(items: I, policy: UnparsableUrlPolicy) -> Vec<TopSite>
where
    I: IntoIterator<Item = TopSite>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|s| seen.insert(site_key(s.url(), policy)))
        .collect()
}

/// Combine already-fetched lists into the shortcut list.
///
/// `frecency` must already be free of sponsored entries. Pinned sites come
/// first, all of them, in pin order. Then history entries deduplicated by
/// normalized host, then curated entries whose host is not already present.
/// Plain entries sharing a host with any pinned entry are dropped. Finally
/// plain entries whose display domain names a curated site are swapped for
/// that curated entry.
pub fn merge_top_sites(
    frecency: Vec<Site>,
    pinned: Vec<Site>,
    defaults: &[Site],
    policy: UnparsableUrlPolicy,
) -> Vec<TopSite> {
    let pinned: Vec<TopSite> = pinned.into_iter().map(TopSite::Pinned).collect();

    let merged = union_by_key(
        frecency
            .into_iter()
            .chain(defaults.iter().cloned())
            .map(TopSite::Plain),
        policy,
    );

    // Pinned entries take part in the union only to claim their hosts; they
    // are re-added wholesale below so pin-pin collisions survive.
    let duplicate_free: Vec<TopSite> = union_by_key(pinned.iter().cloned().chain(merged), policy)
        .into_iter()
        .filter(|s| !s.is_pinned())
        .collect();

    let mut all = pinned;
    all.extend(duplicate_free);

    prefer_curated(all, defaults, policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(url: &str, title: &str) -> Site {
        Site::new(url, title)
    }

    fn merge(frecency: Vec<Site>, pinned: Vec<Site>, defaults: &[Site]) -> Vec<TopSite> {
        merge_top_sites(frecency, pinned, defaults, UnparsableUrlPolicy::Distinct)
    }

    fn urls(sites: &[TopSite]) -> Vec<&str> {
        sites.iter().map(TopSite::url).collect()
    }

    #[test]
    fn history_order_then_curated() {
        let out = merge(
            vec![site("https://b.test/", "B"), site("https://a.test/", "A")],
            vec![],
            &[site("https://c.test/", "C"), site("https://www.a.test/", "A2")],
        );
        assert_eq!(urls(&out), ["https://b.test/", "https://a.test/", "https://c.test/"]);
        assert!(out.iter().all(|s| !s.is_pinned()));
    }

    #[test]
    fn history_duplicates_keep_first() {
        let out = merge(
            vec![
                site("https://www.a.test/one", "first"),
                site("https://a.test/two", "second"),
                site("https://m.a.test/three", "third"),
            ],
            vec![],
            &[],
        );
        assert_eq!(out, vec![TopSite::Plain(site("https://www.a.test/one", "first"))]);
    }

    #[test]
    fn pinned_first_and_claims_host() {
        let out = merge(
            vec![site("https://example.com", ""), site("https://other.test/", "")],
            vec![site("https://example.com", "")],
            &[],
        );
        assert_eq!(
            out,
            vec![
                TopSite::Pinned(site("https://example.com", "")),
                TopSite::Plain(site("https://other.test/", "")),
            ]
        );
    }

    #[test]
    fn pinned_collisions_are_all_kept() {
        let out = merge(
            vec![],
            vec![
                site("https://www.news.test/a", "A"),
                site("https://news.test/b", "B"),
                site("https://m.news.test/c", "C"),
            ],
            &[site("https://news.test/", "News")],
        );
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(TopSite::is_pinned));
        assert_eq!(
            out.iter().map(TopSite::title).collect::<Vec<_>>(),
            ["A", "B", "C"]
        );
    }

    #[test]
    fn curated_entry_dropped_when_pinned_holds_host() {
        let out = merge(
            vec![],
            vec![site("https://www.wikipedia.org/wiki/Main", "My wiki")],
            &[site("https://wikipedia.org/", "Wikipedia")],
        );
        assert_eq!(out, vec![TopSite::Pinned(site("https://www.wikipedia.org/wiki/Main", "My wiki"))]);
    }

    #[test]
    fn curated_presentation_replaces_history_entry() {
        let youtube = site("https://youtube.com", "YouTube").with_favicon_asset("yt");
        let out = merge(
            vec![site("https://m.youtube.com", "YouTube Mobile")],
            vec![],
            &[youtube.clone()],
        );
        assert_eq!(out, vec![TopSite::Plain(youtube)]);
    }

    #[test]
    fn pinned_entries_are_not_enriched() {
        let pinned = site("https://m.youtube.com", "my tube");
        let out = merge(
            vec![],
            vec![pinned.clone()],
            &[site("https://youtube.com", "YouTube")],
        );
        assert_eq!(out, vec![TopSite::Pinned(pinned)]);
    }

    #[test]
    fn enrichment_never_creates_duplicate_hosts() {
        // youtube.de displays as "youtube" too, but youtube.com is already in the list.
        let out = merge(
            vec![site("https://youtube.com/", "YT"), site("https://youtube.de/", "YT de")],
            vec![],
            &[site("https://m.youtube.com/", "YouTube")],
        );
        assert_eq!(
            urls(&out),
            ["https://m.youtube.com/", "https://youtube.de/"]
        );
    }

    #[test]
    fn enrichment_does_not_collide_with_pinned_host() {
        let out = merge(
            vec![site("https://youtube.de/", "YT de")],
            vec![site("https://youtube.com/", "pinned")],
            &[site("https://youtube.com/", "YouTube")],
        );
        assert_eq!(
            out,
            vec![
                TopSite::Pinned(site("https://youtube.com/", "pinned")),
                TopSite::Plain(site("https://youtube.de/", "YT de")),
            ]
        );
    }

    #[test]
    fn already_deduplicated_input_is_unchanged() {
        let input = vec![
            site("https://a.test/", "A"),
            site("https://b.test/", "B"),
            site("https://c.test/", "C"),
        ];
        let once = merge(input.clone(), vec![], &[]);
        let again = merge(once.iter().map(|s| s.site().clone()).collect(), vec![], &[]);
        assert_eq!(once, again);
        assert_eq!(once, input.into_iter().map(TopSite::Plain).collect::<Vec<_>>());
    }

    #[test]
    fn unparsable_urls_under_each_policy() {
        let frecency = vec![site("not a url", "x"), site("also bad", "y")];
        let distinct = merge_top_sites(frecency.clone(), vec![], &[], UnparsableUrlPolicy::Distinct);
        assert_eq!(distinct.len(), 2);
        let collide = merge_top_sites(frecency, vec![], &[], UnparsableUrlPolicy::Collide);
        assert_eq!(collide.len(), 1);
        assert_eq!(collide[0].title(), "x");
    }

    #[test]
    fn everything_empty_is_empty() {
        assert!(merge(vec![], vec![], &[]).is_empty());
    }
}
