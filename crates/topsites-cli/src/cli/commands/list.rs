//! `topsites list` – aggregate and print the shortcut list.

use anyhow::Result;
use topsites_core::engine::TopSitesEngine;
use topsites_core::site::TopSite;

pub async fn run_list(engine: &TopSitesEngine, max_items: usize) -> Result<()> {
    let sites = engine.top_sites(max_items).await;
    if sites.is_empty() {
        println!("No top sites.");
        return Ok(());
    }
    println!("{:<4} {:<4} {:<28} {}", "#", "PIN", "TITLE", "URL");
    for (i, s) in sites.iter().enumerate() {
        println!("{}", format_row(i + 1, s));
    }
    Ok(())
}

fn format_row(rank: usize, site: &TopSite) -> String {
    let pin = if site.is_pinned() { "*" } else { "" };
    let title = if site.title().is_empty() { "-" } else { site.title() };
    format!("{:<4} {:<4} {:<28} {}", rank, pin, title, site.url())
}
