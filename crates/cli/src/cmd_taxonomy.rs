// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillsift taxonomy` command implementation.
//!
//! Lists leaf categories and aliases, and doubles as validation: loading
//! and compiling surface any structural or pattern error with the
//! offending path, exiting nonzero.

use std::path::Path;

use serde_json::json;

use skillsift::cli::{Cli, OutputFormat, TaxonomyArgs};
use skillsift::config::{self, Config};
use skillsift::discovery;
use skillsift::error::ExitCode;
use skillsift::pattern::PatternIndex;
use skillsift::taxonomy::LeafEntry;

/// Run the `skillsift taxonomy` command.
pub fn run(cli: &Cli, args: &TaxonomyArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let (config, config_dir) = match &cli.config {
        Some(path) => (config::load(path)?, path.parent().map(Path::to_path_buf)),
        None => match discovery::find_config(&cwd) {
            Some(path) => {
                let dir = path.parent().map(Path::to_path_buf);
                (config::load(&path)?, dir)
            }
            None => (Config::default(), None),
        },
    };

    let taxonomy =
        crate::taxonomy_source::resolve(args.taxonomy.as_deref(), &config, config_dir.as_deref())?;
    // Compiling validates every alias pattern, not just the tree shape.
    let index = PatternIndex::compile(&taxonomy, &config.matching.options())?;

    let prefix = args.category.as_deref();
    let leaves: Vec<&LeafEntry> = taxonomy
        .leaves()
        .iter()
        .filter(|leaf| prefix.is_none_or(|p| leaf.path.to_string().starts_with(p)))
        .collect();

    match args.output {
        OutputFormat::Json => print_json(&leaves, args.aliases)?,
        OutputFormat::Text => print_text(&leaves, args.aliases, prefix.is_none(), &index),
    }

    Ok(ExitCode::Success)
}

fn print_text(leaves: &[&LeafEntry], aliases: bool, unfiltered: bool, index: &PatternIndex) {
    for leaf in leaves {
        if aliases {
            println!("{}", leaf.path);
            for alias in &leaf.aliases {
                println!("  {alias}");
            }
        } else {
            println!("{}: {} aliases", leaf.path, leaf.aliases.len());
        }
    }

    let alias_entries: usize = leaves.iter().map(|leaf| leaf.aliases.len()).sum();
    println!();
    if unfiltered {
        println!(
            "{} categories, {} alias entries, {} unique aliases",
            leaves.len(),
            alias_entries,
            index.aliases().len()
        );
    } else {
        println!("{} categories, {} alias entries", leaves.len(), alias_entries);
    }
}

fn print_json(leaves: &[&LeafEntry], aliases: bool) -> anyhow::Result<()> {
    let categories: Vec<serde_json::Value> = leaves
        .iter()
        .map(|leaf| {
            if aliases {
                json!({
                    "path": leaf.path.to_string(),
                    "aliases": leaf.aliases,
                })
            } else {
                json!({
                    "path": leaf.path.to_string(),
                    "alias_count": leaf.aliases.len(),
                })
            }
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({ "categories": categories }))?
    );
    Ok(())
}
