// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled alias patterns and the scan loop.
//!
//! `PatternIndex::compile` flattens a taxonomy into a per-alias index: each
//! unique alias string maps to every leaf category that lists it (aliases
//! are cross-listed on purpose, e.g. "oauth" credits both BACKEND.AUTH and
//! SECURITY.IDENTITY). `scan` is a total function over any input text.

use std::collections::{BTreeMap, BTreeSet};

use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::taxonomy::{CategoryPath, Taxonomy};

/// Errors raised while compiling alias patterns.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Identifies the offending alias and its category path so the
    /// taxonomy can be corrected.
    #[error("invalid regex alias `{alias}` under `{path}`: {source}")]
    Regex {
        alias: String,
        path: String,
        source: regex::Error,
    },

    #[error("failed to build literal alias automaton: {0}")]
    Automaton(#[from] aho_corasick::BuildError),
}

/// How alias strings are interpreted during compilation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegexMode {
    /// Aliases containing a backslash compile as regex, the rest as
    /// literals. The source taxonomy carries no explicit flag, so the
    /// escape character is the detection rule.
    #[default]
    Auto,
    /// Every alias is a plain literal.
    Literal,
    /// Every alias is a regex.
    Regex,
}

/// Matching options, fixed at compile time and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    pub case_sensitive: bool,
    pub regex_mode: RegexMode,
    /// Require word boundaries on alias edges that end in word characters,
    /// so "java" never matches inside "javascript".
    pub boundary_anchoring: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            regex_mode: RegexMode::Auto,
            boundary_anchoring: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasKind {
    Literal,
    Regex,
}

/// One unique alias with the set of leaf categories that list it.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasEntry {
    text: String,
    kind: AliasKind,
    categories: Vec<CategoryPath>,
}

impl AliasEntry {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> AliasKind {
        self.kind
    }

    /// Sorted, deduplicated leaf paths this alias resolves to.
    pub fn categories(&self) -> &[CategoryPath] {
        &self.categories
    }
}

/// One occurrence of an alias in the scanned text.
///
/// `start`/`end` are byte offsets into the input. Transient per call;
/// resolve `alias` against the index for provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchHit {
    pub start: usize,
    pub end: usize,
    /// Index into [`PatternIndex::aliases`].
    pub alias: usize,
}

/// Immutable compiled index over every alias in a taxonomy.
#[derive(Debug)]
pub struct PatternIndex {
    aliases: Vec<AliasEntry>,
    literals: Option<AhoCorasick>,
    /// Automaton pattern id → index into `aliases`.
    literal_ids: Vec<usize>,
    regexes: Vec<(usize, Regex)>,
    options: MatchOptions,
}

impl PatternIndex {
    /// Compile every alias in `taxonomy` under the given options.
    pub fn compile(taxonomy: &Taxonomy, options: &MatchOptions) -> Result<Self, PatternError> {
        // Alias → set of leaf paths, in deterministic order.
        let mut by_alias: BTreeMap<&str, BTreeSet<&CategoryPath>> = BTreeMap::new();
        for leaf in taxonomy.leaves() {
            for alias in &leaf.aliases {
                by_alias.entry(alias.as_str()).or_default().insert(&leaf.path);
            }
        }

        let mut aliases = Vec::with_capacity(by_alias.len());
        let mut literal_patterns = Vec::new();
        let mut literal_ids = Vec::new();
        let mut regexes = Vec::new();

        for (text, paths) in by_alias {
            let kind = match options.regex_mode {
                RegexMode::Auto if text.contains('\\') => AliasKind::Regex,
                RegexMode::Auto | RegexMode::Literal => AliasKind::Literal,
                RegexMode::Regex => AliasKind::Regex,
            };
            let id = aliases.len();
            let categories: Vec<CategoryPath> = paths.iter().map(|p| (*p).clone()).collect();

            match kind {
                AliasKind::Literal => {
                    literal_patterns.push(text.to_string());
                    literal_ids.push(id);
                }
                AliasKind::Regex => {
                    let regex =
                        build_regex(text, options).map_err(|source| PatternError::Regex {
                            alias: text.to_string(),
                            path: categories
                                .first()
                                .map(ToString::to_string)
                                .unwrap_or_default(),
                            source,
                        })?;
                    regexes.push((id, regex));
                }
            }

            aliases.push(AliasEntry {
                text: text.to_string(),
                kind,
                categories,
            });
        }

        let literals = if literal_patterns.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .ascii_case_insensitive(!options.case_sensitive)
                    .build(&literal_patterns)?,
            )
        };

        Ok(Self {
            aliases,
            literals,
            literal_ids,
            regexes,
            options: options.clone(),
        })
    }

    /// Every unique alias in the index, sorted by alias text.
    pub fn aliases(&self) -> &[AliasEntry] {
        &self.aliases
    }

    pub fn alias(&self, id: usize) -> &AliasEntry {
        &self.aliases[id]
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Scan `text` against every compiled pattern and return all hits.
    ///
    /// Hits are sorted by ascending span, then alias, so identical inputs
    /// always produce identical output. Overlapping hits from different
    /// aliases are all retained; the same alias at the same span is
    /// deduplicated. There is no error path: any text, including the empty
    /// string or non-ASCII, yields a (possibly empty) hit list.
    pub fn scan(&self, text: &str) -> Vec<MatchHit> {
        let mut hits = Vec::new();

        if let Some(automaton) = &self.literals {
            for m in automaton.find_overlapping_iter(text) {
                let alias = self.literal_ids[m.pattern().as_usize()];
                if self.options.boundary_anchoring
                    && !respects_boundaries(text, m.start(), m.end(), self.aliases[alias].text())
                {
                    continue;
                }
                hits.push(MatchHit { start: m.start(), end: m.end(), alias });
            }
        }

        for (alias, regex) in &self.regexes {
            for m in regex.find_iter(text) {
                hits.push(MatchHit { start: m.start(), end: m.end(), alias: *alias });
            }
        }

        hits.sort_unstable_by_key(|hit| (hit.start, hit.end, hit.alias));
        hits.dedup();
        hits
    }
}

/// Wrap a regex alias with case folding and boundary anchors.
///
/// An anchor is only emitted on a side whose edge character is a word
/// character: `\b` after a trailing `\+` would invert its meaning and the
/// pattern could never match.
fn build_regex(pattern: &str, options: &MatchOptions) -> Result<Regex, regex::Error> {
    let mut source = String::with_capacity(pattern.len() + 12);
    if !options.case_sensitive {
        source.push_str("(?i)");
    }
    if options.boundary_anchoring && first_literal_char(pattern).is_some_and(is_word_char) {
        source.push_str(r"\b");
    }
    source.push_str("(?:");
    source.push_str(pattern);
    source.push(')');
    if options.boundary_anchoring && last_literal_char(pattern).is_some_and(is_word_char) {
        source.push_str(r"\b");
    }
    Regex::new(&source)
}

/// First character the pattern can match, looking through one escape.
fn first_literal_char(pattern: &str) -> Option<char> {
    let mut chars = pattern.chars();
    match chars.next()? {
        '\\' => chars.next(),
        c => Some(c),
    }
}

/// Last character the pattern can match, tracking escape state from the
/// start so a trailing `\+` is seen as `+`.
fn last_literal_char(pattern: &str) -> Option<char> {
    let mut chars = pattern.chars();
    let mut last = None;
    while let Some(c) = chars.next() {
        last = if c == '\\' { chars.next() } else { Some(c) };
    }
    last
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Word-boundary check for literal automaton hits.
///
/// A side is only constrained when the alias edge is a word character, so
/// "x++" anchors on the left but matches regardless of what follows the
/// final `+`. Match offsets fall on ASCII alias bytes, so slicing at
/// `start`/`end` is always valid UTF-8.
fn respects_boundaries(text: &str, start: usize, end: usize, alias: &str) -> bool {
    let first_is_word = alias.chars().next().is_some_and(is_word_char);
    let last_is_word = alias.chars().next_back().is_some_and(is_word_char);

    let left_ok =
        !first_is_word || text[..start].chars().next_back().is_none_or(|c| !is_word_char(c));
    let right_ok =
        !last_is_word || text[end..].chars().next().is_none_or(|c| !is_word_char(c));

    left_ok && right_ok
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
