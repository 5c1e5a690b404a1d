// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use termcolor::WriteColor;

use crate::color::scheme;

use super::{ClassifyReport, ReportFormatter};

/// Text format report formatter.
pub struct TextFormatter;

impl TextFormatter {
    /// Write the report with color support.
    pub fn write(
        &self,
        out: &mut dyn WriteColor,
        report: &ClassifyReport,
    ) -> anyhow::Result<()> {
        for (i, input) in report.inputs.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }

            out.set_color(&scheme::source())?;
            write!(out, "{}", input.source)?;
            out.reset()?;
            writeln!(out)?;

            if input.categories.is_empty() {
                out.set_color(&scheme::muted())?;
                writeln!(out, "  (no matches)")?;
                out.reset()?;
                continue;
            }

            for hit in &input.categories {
                write!(out, "  ")?;
                out.set_color(&scheme::category())?;
                write!(out, "{}", hit.path)?;
                out.reset()?;
                if !report.presence {
                    write!(out, ": ")?;
                    out.set_color(&scheme::count())?;
                    write!(out, "{}", hit.count)?;
                    out.reset()?;
                }
                writeln!(out)?;
            }

            if report.show_matches && !input.matches.is_empty() {
                writeln!(out, "  matches:")?;
                for m in &input.matches {
                    write!(out, "    ")?;
                    out.set_color(&scheme::alias())?;
                    write!(out, "{}", m.alias)?;
                    out.reset()?;
                    writeln!(out, " [{}..{}] {}", m.start, m.end, m.categories.join(", "))?;
                }
            }
        }
        Ok(())
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ClassifyReport) -> anyhow::Result<String> {
        let mut buffer = termcolor::Buffer::no_color();
        self.write(&mut buffer, report)?;
        Ok(String::from_utf8(buffer.into_inner())?)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
