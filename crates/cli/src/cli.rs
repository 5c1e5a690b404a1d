//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;

/// Classify free-text skill mentions into a normalized category taxonomy
#[derive(Parser)]
#[command(name = "skillsift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SKILLSIFT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify text, files, or a directory of documents
    Classify(ClassifyArgs),
    /// Inspect and validate the taxonomy
    Taxonomy(TaxonomyArgs),
    /// Initialize skillsift configuration
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Text to classify (reads stdin when no input is given)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Classify the contents of a file (repeatable)
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Classify matching files under a directory
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Use a taxonomy file (JSON or YAML) instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub taxonomy: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Show individual alias matches with their spans
    #[arg(long)]
    pub matches: bool,

    /// Report category presence instead of hit counts
    #[arg(long)]
    pub presence: bool,

    /// Drop categories with fewer than N hits (overrides config)
    #[arg(long, value_name = "N")]
    pub min_hits: Option<usize>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

#[derive(clap::Args)]
pub struct TaxonomyArgs {
    /// Inspect a taxonomy file (JSON or YAML) instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub taxonomy: Option<PathBuf>,

    /// List every alias under each category
    #[arg(long)]
    pub aliases: bool,

    /// Only show categories whose path starts with this prefix
    #[arg(long, value_name = "PREFIX")]
    pub category: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
