// Configuration Loader

use std::path::Path;

use anyhow::{Context, Result};

use crate::types::Config;

/// Parse a configuration document.
pub fn parse(content: &str) -> Result<Config> {
  toml::from_str(content).context("invalid configuration document")
}

/// Load configuration from a file.
pub fn load(path: &Path) -> Result<Config> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("failed to read configuration from {}", path.display()))?;
  parse(&content)
}

/// Load configuration from a file when given, built-in defaults otherwise.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
  match path {
    Some(path) => load(path),
    None => Ok(Config::default()),
  }
}
