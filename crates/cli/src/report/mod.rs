// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Classification report output.

use crate::aggregate::CategoryHit;
use crate::cli::OutputFormat;

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// One alias occurrence, resolved for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub alias: String,
    pub start: usize,
    pub end: usize,
    pub categories: Vec<String>,
}

/// Classification outcome for a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputResult {
    /// Display label of the input source (path, `stdin`, `text#N`).
    pub source: String,
    pub categories: Vec<CategoryHit>,
    pub matches: Vec<MatchRecord>,
}

/// A full classification report plus its rendering options.
pub struct ClassifyReport<'a> {
    pub inputs: &'a [InputResult],
    /// Render category presence only, without counts.
    pub presence: bool,
    /// Include per-hit provenance in text output (JSON always carries it).
    pub show_matches: bool,
}

/// Renders a classification report in one output format.
pub trait ReportFormatter {
    fn format(&self, report: &ClassifyReport) -> anyhow::Result<String>;
}

/// Formatter for the requested output format.
pub fn formatter(output: OutputFormat) -> Box<dyn ReportFormatter> {
    match output {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
