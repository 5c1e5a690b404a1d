// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Embedded default taxonomy.
//!
//! The curated skill hierarchy ships inside the binary so `skillsift` works
//! with no external files. Parsed once on first use, then shared read-only
//! for the process lifetime.

use std::sync::OnceLock;

use super::Taxonomy;

static TAXONOMY_JSON: &str = include_str!("../../data/taxonomy.json");

/// The built-in skill taxonomy.
#[allow(clippy::expect_used)]
pub fn taxonomy() -> &'static Taxonomy {
    static BUILTIN: OnceLock<Taxonomy> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        Taxonomy::from_json_str(TAXONOMY_JSON).expect("embedded taxonomy.json is well-formed")
    })
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
