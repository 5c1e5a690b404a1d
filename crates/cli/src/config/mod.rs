// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillsift.toml` configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::pattern::{MatchOptions, RegexMode};

pub mod defaults;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "match")]
    pub matching: MatchConfig,

    pub taxonomy: TaxonomyConfig,

    pub batch: BatchConfig,
}

/// Matching options, mirrored into [`MatchOptions`] at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub case_sensitive: bool,

    /// How aliases are interpreted: "auto" | "literal" | "regex".
    pub regex_mode: RegexMode,

    pub boundary_anchoring: bool,

    /// Categories with fewer hits than this are dropped from results.
    pub min_hits: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            regex_mode: RegexMode::Auto,
            boundary_anchoring: true,
            min_hits: defaults::matching::MIN_HITS,
        }
    }
}

impl MatchConfig {
    pub fn options(&self) -> MatchOptions {
        MatchOptions {
            case_sensitive: self.case_sensitive,
            regex_mode: self.regex_mode,
            boundary_anchoring: self.boundary_anchoring,
        }
    }
}

/// Taxonomy source selection.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Taxonomy file (JSON or YAML), resolved relative to the config file.
    /// The embedded taxonomy is used when unset.
    pub path: Option<PathBuf>,
}

/// Settings for `classify --dir` walks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Glob patterns for files to classify.
    pub include: Vec<String>,

    /// Glob patterns to skip.
    pub exclude: Vec<String>,

    /// Maximum directory depth to traverse.
    pub max_depth: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            include: defaults::batch::include(),
            exclude: Vec::new(),
            max_depth: defaults::batch::MAX_DEPTH,
        }
    }
}

const KNOWN_TABLES: &[&str] = &["match", "taxonomy", "batch"];

/// Load configuration from `path`.
///
/// Unknown top-level keys are warnings, not errors, so configs written for
/// newer versions still load.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: toml::Value = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let toml::Value::Table(table) = &value {
        for key in table.keys() {
            if !KNOWN_TABLES.contains(&key.as_str()) {
                tracing::warn!("{}: unknown config key `{}`", path.display(), key);
            }
        }
    }

    value.try_into().map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
