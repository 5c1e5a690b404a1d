// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Taxonomy model and loader.
//!
//! The taxonomy is a nested mapping (domain → group → … → leaf) whose leaf
//! values are ordered lists of alias strings. Depth varies between branches;
//! a node is a leaf exactly when its value is a sequence, so loading is a
//! recursive descent with no fixed-depth assumption.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

pub mod builtin;

/// Structural violations found while loading a taxonomy source.
///
/// Loading is all-or-nothing: no partial tree is returned.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("taxonomy root must be a mapping of category names")]
    RootNotMapping,

    /// Covers both an empty branch (`{}`) and an empty alias list (`[]`).
    #[error("category `{path}` is empty")]
    EmptyCategory { path: String },

    #[error("category `{path}` must hold nested categories or a list of alias strings, found {found}")]
    InvalidNode { path: String, found: &'static str },

    #[error("alias list under `{path}` contains a non-string entry")]
    NonStringAlias { path: String },

    #[error("failed to parse taxonomy source: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse taxonomy source: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Full path of a leaf category, e.g. `TECHNICAL.BACKEND.AUTH`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryPath {
    segments: Vec<String>,
}

impl CategoryPath {
    fn root() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { segments: segments.into_iter().map(Into::into).collect() }
    }

    fn child(&self, segment: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend(self.segments.iter().cloned());
        segments.push(segment.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Terminal segment, the most specific classification label.
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// A node in the taxonomy tree: either nested categories or an alias list.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Branch(BTreeMap<String, Node>),
    Leaf(Vec<String>),
}

/// One leaf category with its full path and as-authored alias list.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafEntry {
    pub path: CategoryPath,
    pub aliases: Vec<String>,
}

/// An immutable, loaded taxonomy.
///
/// Holds the tree as parsed plus a flattened leaf list in path order. Built
/// once at startup and shared read-only across classification calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Taxonomy {
    root: BTreeMap<String, Node>,
    leaves: Vec<LeafEntry>,
}

impl Taxonomy {
    /// Load a taxonomy from a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, TaxonomyError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Load a taxonomy from a YAML document.
    ///
    /// YAML sources go through the same generic value descent as JSON, so
    /// the structural contract is identical.
    pub fn from_yaml_str(source: &str) -> Result<Self, TaxonomyError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(&value)
    }

    /// Build a taxonomy from an already-parsed generic value.
    pub fn from_value(value: &Value) -> Result<Self, TaxonomyError> {
        let Value::Object(map) = value else {
            return Err(TaxonomyError::RootNotMapping);
        };
        if map.is_empty() {
            return Err(TaxonomyError::RootNotMapping);
        }

        let mut leaves = Vec::new();
        let mut root = BTreeMap::new();
        for (name, child) in map {
            let path = CategoryPath::root().child(name);
            root.insert(name.clone(), descend(&path, child, &mut leaves)?);
        }
        leaves.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(Self { root, leaves })
    }

    pub fn root(&self) -> &BTreeMap<String, Node> {
        &self.root
    }

    /// Flattened leaf categories, sorted by path.
    pub fn leaves(&self) -> &[LeafEntry] {
        &self.leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }

    /// Total alias entries across all leaves (cross-listed aliases counted
    /// once per leaf that lists them).
    pub fn alias_count(&self) -> usize {
        self.leaves.iter().map(|leaf| leaf.aliases.len()).sum()
    }
}

fn descend(
    path: &CategoryPath,
    value: &Value,
    leaves: &mut Vec<LeafEntry>,
) -> Result<Node, TaxonomyError> {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                return Err(TaxonomyError::EmptyCategory { path: path.to_string() });
            }
            let mut children = BTreeMap::new();
            for (name, child) in map {
                let child_path = path.child(name);
                children.insert(name.clone(), descend(&child_path, child, leaves)?);
            }
            Ok(Node::Branch(children))
        }
        Value::Array(items) => {
            if items.is_empty() {
                return Err(TaxonomyError::EmptyCategory { path: path.to_string() });
            }
            let mut aliases = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(alias) => aliases.push(alias.clone()),
                    _ => {
                        return Err(TaxonomyError::NonStringAlias { path: path.to_string() });
                    }
                }
            }
            leaves.push(LeafEntry { path: path.clone(), aliases: aliases.clone() });
            Ok(Node::Leaf(aliases))
        }
        other => Err(TaxonomyError::InvalidNode {
            path: path.to_string(),
            found: value_kind(other),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a single string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
