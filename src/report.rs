//! Report rendering.
//!
//! Formats [`AnalysisReport`]s either as the human-readable text report or
//! as JSON. Section headings are coloured via `colored`, which honours
//! `NO_COLOR`/`CLICOLOR` and can be switched off globally.

use crate::constants::{
    COLUMN_SECTION_TITLE, NO_NUMERIC_COLUMNS, REPORT_TITLE, STATS_SECTION_TITLE, STATS_SEPARATOR,
};
use crate::error::Result;
use crate::models::{AnalysisReport, ColumnStats};
use colored::*;
use std::fmt;

/// Text rendering of one report, usable anywhere a `Display` is accepted
pub struct TextReport<'a> {
    report: &'a AnalysisReport,
    precision: usize,
}

impl<'a> TextReport<'a> {
    pub fn new(report: &'a AnalysisReport, precision: usize) -> Self {
        Self { report, precision }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_report(f, self.report, self.precision)
    }
}

/// Render the text report with `precision` decimal places
pub fn render_text(report: &AnalysisReport, precision: usize) -> String {
    TextReport::new(report, precision).to_string()
}

fn write_report(
    out: &mut impl fmt::Write,
    report: &AnalysisReport,
    precision: usize,
) -> fmt::Result {
    writeln!(out, "{}", REPORT_TITLE.bright_green().bold())?;
    writeln!(
        out,
        "Dataset: {} rows, {} columns",
        report.row_count, report.column_count
    )?;
    writeln!(out)?;

    writeln!(out, "{}", COLUMN_SECTION_TITLE.bright_yellow())?;
    for column in &report.columns {
        writeln!(out, " {}: {}", column.name, column.column_type)?;
    }
    writeln!(out)?;

    if report.statistics.is_empty() {
        return writeln!(out, "{}", NO_NUMERIC_COLUMNS);
    }

    writeln!(out, "{}", STATS_SECTION_TITLE.bright_yellow())?;
    writeln!(out, "{}", STATS_SEPARATOR)?;
    for stats in &report.statistics {
        write_column_stats(out, stats, precision)?;
    }
    Ok(())
}

fn write_column_stats(
    out: &mut impl fmt::Write,
    stats: &ColumnStats,
    precision: usize,
) -> fmt::Result {
    writeln!(out, "\n{}:", stats.name.bright_cyan())?;
    writeln!(out, "  Count:     {}", stats.count)?;
    writeln!(out, "  Sum:       {:.*}", precision, stats.sum)?;
    writeln!(out, "  Mean:      {:.*}", precision, stats.mean)?;
    writeln!(out, "  Median:    {:.*}", precision, stats.median)?;
    writeln!(out, "  Std Dev:   {:.*}", precision, stats.std_dev)?;
    writeln!(out, "  Min:       {:.*}", precision, stats.min)?;
    writeln!(out, "  Max:       {:.*}", precision, stats.max)
}

/// Render reports as pretty JSON.
///
/// A single report becomes an object, several become an array.
pub fn render_json(reports: &[AnalysisReport]) -> Result<String> {
    let json = match reports {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(json)
}
