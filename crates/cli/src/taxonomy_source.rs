// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Taxonomy source resolution for commands.
//!
//! Precedence: `--taxonomy` flag, then `[taxonomy].path` from config
//! (relative to the config file), then the embedded taxonomy. File I/O
//! happens here, outside the pure loader.

use std::borrow::Cow;
use std::path::Path;

use anyhow::Context;

use skillsift::config::Config;
use skillsift::taxonomy::{Taxonomy, builtin};

pub fn resolve(
    cli_path: Option<&Path>,
    config: &Config,
    config_dir: Option<&Path>,
) -> anyhow::Result<Cow<'static, Taxonomy>> {
    if let Some(path) = cli_path {
        return Ok(Cow::Owned(load_file(path)?));
    }

    if let Some(path) = &config.taxonomy.path {
        let resolved = match config_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.clone(),
        };
        return Ok(Cow::Owned(load_file(&resolved)?));
    }

    Ok(Cow::Borrowed(builtin::taxonomy()))
}

fn load_file(path: &Path) -> anyhow::Result<Taxonomy> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let taxonomy = if is_yaml {
        Taxonomy::from_yaml_str(&raw)
    } else {
        Taxonomy::from_json_str(&raw)
    };
    taxonomy.with_context(|| format!("invalid taxonomy in {}", path.display()))
}
