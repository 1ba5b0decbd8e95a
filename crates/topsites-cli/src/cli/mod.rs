//! CLI for the top sites engine.

mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use topsites_core::config;
use topsites_core::engine::TopSitesEngine;
use topsites_core::prefs::JsonFilePrefs;
use topsites_core::source::SnapshotHistory;

use commands::{run_list, run_normalize, run_remove_suggestion, run_restore_suggestions, run_suggestions};

/// Top-level CLI for the top sites engine.
#[derive(Debug, Parser)]
#[command(name = "topsites")]
#[command(about = "Top sites: merged shortcut list from history, pins and curated suggestions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Aggregate and print the shortcut list.
    List {
        /// History snapshot JSON (`{"frecency": [...], "pinned": [...]}`). Defaults to the state dir.
        #[arg(long, value_name = "PATH")]
        snapshot: Option<PathBuf>,
        /// Maximum frecency entries to request (default: from config / form factor).
        #[arg(long, value_name = "N")]
        max: Option<usize>,
    },

    /// Show curated suggestions that have not been removed.
    Suggestions,

    /// Stop suggesting a curated site.
    RemoveSuggestion {
        /// Exact URL of the curated entry.
        url: String,
    },

    /// Bring back all removed suggestions.
    RestoreSuggestions,

    /// Show the dedup key and display domain for a URL.
    Normalize {
        /// URL to inspect.
        url: String,
    },
}

/// `history.json` next to the prefs file in the state dir.
fn default_snapshot_path() -> Result<PathBuf> {
    let prefs_path = JsonFilePrefs::default_path()?;
    Ok(prefs_path.with_file_name("history.json"))
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        if let CliCommand::Normalize { url } = &cli.command {
            return run_normalize(url, cfg.unparsable_urls);
        }

        let snapshot = match &cli.command {
            CliCommand::List { snapshot: Some(path), .. } => path.clone(),
            _ => default_snapshot_path()?,
        };
        let prefs = Arc::new(JsonFilePrefs::open_default()?);
        let history = SnapshotHistory::new(snapshot);
        tracing::debug!(
            prefs = %prefs.path().display(),
            snapshot = %history.path().display(),
            "opened stores"
        );
        let engine = TopSitesEngine::from_config(&cfg, Arc::new(history), prefs)?;

        match cli.command {
            CliCommand::List { max, .. } => run_list(&engine, max.unwrap_or_else(|| cfg.max_items())).await?,
            CliCommand::Suggestions => run_suggestions(&engine)?,
            CliCommand::RemoveSuggestion { url } => run_remove_suggestion(&engine, &url)?,
            CliCommand::RestoreSuggestions => run_restore_suggestions(&engine)?,
            CliCommand::Normalize { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
