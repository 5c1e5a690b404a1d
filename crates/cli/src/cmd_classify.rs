// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillsift classify` command implementation.
//!
//! Loads the taxonomy, compiles the pattern index once, then classifies
//! every input independently. Inputs are embarrassingly parallel: the
//! index is immutable, so batch classification fans out with rayon.

use std::path::Path;

use rayon::prelude::*;

use skillsift::aggregate;
use skillsift::cli::{Cli, ClassifyArgs, OutputFormat};
use skillsift::color::resolve_color;
use skillsift::config::{self, Config};
use skillsift::discovery;
use skillsift::error::ExitCode;
use skillsift::input::{self, Input};
use skillsift::pattern::PatternIndex;
use skillsift::report::{ClassifyReport, InputResult, MatchRecord, TextFormatter, formatter};

/// Run the `skillsift classify` command.
pub fn run(cli: &Cli, args: &ClassifyArgs) -> anyhow::Result<ExitCode> {
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
    let options = config.matching.options();
    let index = PatternIndex::compile(&taxonomy, &options)?;
    let min_hits = args.min_hits.unwrap_or(config.matching.min_hits);

    tracing::debug!(
        aliases = index.aliases().len(),
        leaves = taxonomy.leaf_count(),
        "compiled pattern index"
    );

    let inputs = input::gather(&args.text, &args.files, args.dir.as_deref(), &config.batch)?;
    let results: Vec<InputResult> = inputs
        .par_iter()
        .map(|input| classify_input(input, &index, min_hits))
        .collect();
    let matched = results.iter().any(|result| !result.categories.is_empty());

    let report = ClassifyReport {
        inputs: &results,
        presence: args.presence,
        show_matches: args.matches,
    };

    match args.output {
        OutputFormat::Json => println!("{}", formatter(args.output).format(&report)?),
        OutputFormat::Text => {
            let choice = resolve_color(args.color, args.no_color);
            let stdout = termcolor::StandardStream::stdout(choice);
            let mut out = stdout.lock();
            TextFormatter.write(&mut out, &report)?;
        }
    }

    Ok(if matched { ExitCode::Success } else { ExitCode::NoMatches })
}

fn classify_input(input: &Input, index: &PatternIndex, min_hits: usize) -> InputResult {
    let hits = index.scan(&input.text);
    let categories = aggregate::tally(index, &hits, min_hits);

    let matches = hits
        .iter()
        .map(|hit| {
            let alias = index.alias(hit.alias);
            MatchRecord {
                alias: alias.text().to_string(),
                start: hit.start,
                end: hit.end,
                categories: alias.categories().iter().map(ToString::to_string).collect(),
            }
        })
        .collect();

    InputResult {
        source: input.source.to_string(),
        categories,
        matches,
    }
}
