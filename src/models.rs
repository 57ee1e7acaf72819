//! Core data structures for CSV analysis.
//!
//! Defines the in-memory table, the per-column type classification,
//! statistics records and the report/summary types produced by a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Header plus rows of raw string fields.
///
/// Rows may be shorter (or longer) than the header. A cell past the end of a
/// row is treated as blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Build a table from string slices, mostly useful in tests
    pub fn from_records(header: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            header: header.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    /// Logical column count, defined by the header
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows (header excluded)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Raw cell at `(row, column)`, `None` when the row is too short
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|fields| fields.get(column))
            .map(String::as_str)
    }

    pub fn column_name(&self, column: usize) -> Option<&str> {
        self.header.get(column).map(String::as_str)
    }
}

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Numeric,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Numeric => write!(f, "Numeric"),
            ColumnType::Text => write!(f, "Text"),
        }
    }
}

/// Per-column numeric/text decision, indexed by column position.
///
/// Empty when the table had no data rows; unclassified columns report as
/// not numeric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnClassification {
    types: Vec<ColumnType>,
}

impl ColumnClassification {
    pub fn new(types: Vec<ColumnType>) -> Self {
        Self { types }
    }

    pub fn column_type(&self, column: usize) -> Option<ColumnType> {
        self.types.get(column).copied()
    }

    pub fn is_numeric(&self, column: usize) -> bool {
        self.column_type(column) == Some(ColumnType::Numeric)
    }

    /// Indices of numeric columns in header order
    pub fn numeric_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.types
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == ColumnType::Numeric)
            .map(|(i, _)| i)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Descriptive statistics for one numeric column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStats {
    pub name: String,
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Column name with its inferred type, as listed in reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: ColumnType,
}

/// Complete analysis of one table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: PathBuf,
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnInfo>,
    pub statistics: Vec<ColumnStats>,
    pub generated_at: DateTime<Utc>,
}

/// Outcome counters for a multi-file run
#[derive(Debug, Default)]
pub struct AnalysisSummary {
    pub files_analyzed: usize,
    pub files_failed: usize,
    pub total_rows: usize,
    pub processing_time_ms: u128,
}
