// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hit aggregation: raw match hits → per-category counts.

use std::collections::HashMap;

use crate::pattern::{MatchHit, PatternIndex};
use crate::taxonomy::CategoryPath;

/// Aggregated count for one leaf category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryHit {
    pub path: CategoryPath,
    pub count: usize,
}

/// Group hits by leaf category and count occurrences.
///
/// An alias listed under multiple leaves credits all of them; the
/// ambiguity is intentional taxonomy cross-listing and is never resolved
/// to a single winner. Output is sorted by descending count, ties broken
/// by lexical path order. Categories with fewer than `min_hits` hits are
/// dropped.
pub fn tally(index: &PatternIndex, hits: &[MatchHit], min_hits: usize) -> Vec<CategoryHit> {
    let mut counts: HashMap<&CategoryPath, usize> = HashMap::new();
    for hit in hits {
        for path in index.alias(hit.alias).categories() {
            *counts.entry(path).or_default() += 1;
        }
    }

    let mut out: Vec<CategoryHit> = counts
        .into_iter()
        .filter(|(_, count)| *count >= min_hits)
        .map(|(path, count)| CategoryHit { path: path.clone(), count })
        .collect();
    out.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.path.cmp(&b.path)));
    out
}

/// Scan and tally in one call.
pub fn classify_text(text: &str, index: &PatternIndex, min_hits: usize) -> Vec<CategoryHit> {
    tally(index, &index.scan(text), min_hits)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
