use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::defaults::DEFAULT_LOCALE;
use crate::normalize::UnparsableUrlPolicy;
use crate::site::FormFactor;
use crate::sponsored::DEFAULT_SPONSORED_SEARCH_PARAM;

/// Global configuration loaded from `~/.config/topsites/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopSitesConfig {
    /// Device class; decides how many frecency entries are requested (16 or 32).
    pub form_factor: FormFactor,
    /// Explicit frecency bound overriding the form-factor default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    /// Locale used to pick the curated suggestion list (e.g. "zh_CN").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Query parameter marking history entries that came from sponsored tiles.
    pub sponsored_search_param: String,
    /// Optional JSON catalog replacing the bundled suggestions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// How URLs without a host are keyed: "distinct" (default) or "collide".
    pub unparsable_urls: UnparsableUrlPolicy,
}

impl Default for TopSitesConfig {
    fn default() -> Self {
        Self {
            form_factor: FormFactor::Compact,
            max_items: None,
            locale: None,
            sponsored_search_param: DEFAULT_SPONSORED_SEARCH_PARAM.to_string(),
            catalog_path: None,
            unparsable_urls: UnparsableUrlPolicy::Distinct,
        }
    }
}

impl TopSitesConfig {
    /// Frecency bound: `max_items` if set, otherwise the form-factor default.
    pub fn max_items(&self) -> usize {
        self.max_items.unwrap_or_else(|| self.form_factor.max_items())
    }

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("topsites")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TopSitesConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TopSitesConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: TopSitesConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
