use std::fs;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_yaml::Deserializer;

/// Sources scanned when the config file doesn't override them. Only a
/// handful of blogs are worth polling for this niche.
pub const DEFAULT_BLOGS: &[&str] = &[
    "The Flight Deal",
    "Travel-Dealz",
    "One Mile at a Time",
];

/// Optional overrides loaded from `$XDG_CONFIG_HOME/hk-deals/config.yaml`.
/// Everything has a working default, so a missing file is fine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Replaces the default scan list.
    pub blogs: Option<Vec<String>>,
    /// Extra keyword patterns, same treatment as --keywords.
    pub keywords: Option<Vec<String>>,
    /// Name or path of the blogwatcher binary.
    pub blogwatcher_bin: Option<String>,
}

impl Config {
    pub fn load() -> Result<Config> {
        let found = xdg::BaseDirectories::with_prefix("hk-deals").find_config_file("config.yaml");

        let Some(path) = found else {
            return Ok(Config::default());
        };

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let deserialized = Deserializer::from_str(&raw);
        serde_path_to_error::deserialize(deserialized).map_err(|e| {
            anyhow!(
                "Invalid YAML in {} at `{}`: {}",
                path.display(),
                e.path(),
                e.inner()
            )
        })
    }

    pub fn blogs_to_scan(&self) -> Vec<String> {
        match &self.blogs {
            Some(blogs) => blogs.clone(),
            None => DEFAULT_BLOGS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
