//! `topsites suggestions`, `remove-suggestion`, `restore-suggestions`.

use anyhow::Result;
use topsites_core::engine::TopSitesEngine;

pub fn run_suggestions(engine: &TopSitesEngine) -> Result<()> {
    let defaults = engine.defaults();
    println!(
        "Locale: {} (catalog: {})",
        defaults.locale(),
        defaults.available_locales().join(", ")
    );
    let sites = defaults.default_top_sites();
    if sites.is_empty() {
        println!("No suggestions (all removed).");
    } else {
        for s in sites {
            println!("{:<20} {}", s.title, s.url);
        }
    }
    Ok(())
}

pub fn run_remove_suggestion(engine: &TopSitesEngine, url: &str) -> Result<()> {
    let known = engine.defaults().default_top_sites().iter().any(|s| s.url == url);
    if !known {
        tracing::warn!(url, "not a current suggestion; recording removal anyway");
    }
    engine.defaults().remove_suggestion(url)?;
    println!("Removed suggestion {url}");
    Ok(())
}

pub fn run_restore_suggestions(engine: &TopSitesEngine) -> Result<()> {
    engine.defaults().restore_suggestions()?;
    println!("Restored all suggestions");
    Ok(())
}
