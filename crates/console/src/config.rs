use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mark the squares the selected piece can reach.
    pub show_targets: bool,
    pub save_journal: bool,
    pub journal_dir: PathBuf,
    /// Chess glyphs instead of letters.
    pub unicode: bool,
    /// Record previews in the journal too.
    pub verbose_journal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_targets: true,
            save_journal: false,
            journal_dir: PathBuf::from("logs"),
            unicode: true,
            verbose_journal: false,
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("failed to parse config {}", path.display()))
    }

    fn parse(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
