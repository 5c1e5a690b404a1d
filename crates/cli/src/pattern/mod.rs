// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alias pattern compilation and text scanning.
//!
//! Matching hierarchy:
//! - Literal aliases: one aho-corasick automaton, overlapping matches
//! - Regex aliases (backslash-escaped metacharacters): regex crate

pub mod matcher;

pub use matcher::{
    AliasEntry, AliasKind, MatchHit, MatchOptions, PatternError, PatternIndex, RegexMode,
};
