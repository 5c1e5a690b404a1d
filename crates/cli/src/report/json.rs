// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde_json::json;

use super::{ClassifyReport, ReportFormatter};

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ClassifyReport) -> anyhow::Result<String> {
        let inputs: Vec<serde_json::Value> = report
            .inputs
            .iter()
            .map(|input| {
                let categories: Vec<serde_json::Value> = input
                    .categories
                    .iter()
                    .map(|hit| {
                        json!({
                            "path": hit.path.to_string(),
                            "count": hit.count,
                        })
                    })
                    .collect();

                let matches: Vec<serde_json::Value> = input
                    .matches
                    .iter()
                    .map(|m| {
                        json!({
                            "alias": m.alias,
                            "start": m.start,
                            "end": m.end,
                            "categories": m.categories,
                        })
                    })
                    .collect();

                json!({
                    "source": input.source,
                    "categories": categories,
                    "matches": matches,
                })
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json!({ "inputs": inputs }))?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
