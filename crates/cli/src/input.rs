// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input gathering for the classify command.
//!
//! Inputs come from inline text arguments, explicit files, a directory
//! walk, or stdin when nothing else is given. Explicit files fail hard;
//! walked files are skipped with a warning when unreadable or not UTF-8.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::config::BatchConfig;

/// Where one classification input came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Inline text argument (1-based position).
    Text(usize),
    File(PathBuf),
    Stdin,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Text(n) => write!(f, "text#{n}"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => f.write_str("stdin"),
        }
    }
}

/// One document to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub source: InputSource,
    pub text: String,
}

/// Resolve classify inputs in a stable order: inline text, files, walked
/// directory, then stdin as the fallback when nothing was given.
pub fn gather(
    text_args: &[String],
    files: &[PathBuf],
    dir: Option<&Path>,
    batch: &BatchConfig,
) -> anyhow::Result<Vec<Input>> {
    let mut inputs = Vec::new();

    for (i, text) in text_args.iter().enumerate() {
        inputs.push(Input {
            source: InputSource::Text(i + 1),
            text: text.clone(),
        });
    }

    for path in files {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        inputs.push(Input {
            source: InputSource::File(path.clone()),
            text,
        });
    }

    if let Some(dir) = dir {
        inputs.extend(walk_dir(dir, batch)?);
    }

    if inputs.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        inputs.push(Input { source: InputSource::Stdin, text });
    }

    Ok(inputs)
}

fn walk_dir(dir: &Path, batch: &BatchConfig) -> anyhow::Result<Vec<Input>> {
    let include = build_globs(&batch.include).context("invalid batch.include pattern")?;
    let exclude = build_globs(&batch.exclude).context("invalid batch.exclude pattern")?;

    let mut files: Vec<(PathBuf, String)> = Vec::new();
    let walker = WalkBuilder::new(dir).max_depth(Some(batch.max_depth)).build();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("walk error under {}: {}", dir.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        if !include.is_match(relative) || exclude.is_match(relative) {
            continue;
        }

        match std::fs::read_to_string(entry.path()) {
            Ok(text) => files.push((entry.path().to_path_buf(), text)),
            Err(err) => {
                tracing::warn!("skipping {}: {}", entry.path().display(), err);
            }
        }
    }

    // Walk order is platform-dependent; sort for deterministic output.
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files
        .into_iter()
        .map(|(path, text)| Input { source: InputSource::File(path), text })
        .collect())
}

fn build_globs(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    builder.build()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
