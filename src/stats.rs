//! Descriptive statistics for numeric columns.
//!
//! Values are extracted from every row of a column (not just the inference
//! sample); blank and unparsable cells are skipped. The helpers below are
//! pure functions over a value slice.

use crate::models::{ColumnClassification, ColumnStats, Table};
use crate::schema::parse_numeric;
use tracing::debug;

/// Parsed values of `column` across all rows, in row order.
///
/// Rows that are too short, blank, or not numeric at `column` are skipped.
pub fn extract_numeric_values(table: &Table, column: usize) -> Vec<f64> {
    table
        .rows
        .iter()
        .filter_map(|row| row.get(column))
        .filter_map(|cell| parse_numeric(cell))
        .collect()
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean, `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// Median of a sorted copy; the input order is left untouched.
///
/// Even-length input averages the two middle values. Returns `0.0` for an
/// empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Sample standard deviation (n - 1 denominator) around `mean`.
///
/// A single value has no spread and yields `0.0`, as does an empty slice.
pub fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let squared_deviations: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    let variance = squared_deviations / (values.len() - 1) as f64;
    variance.sqrt()
}

pub fn min(values: &[f64]) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |acc, &v| if v < acc { v } else { acc }))
}

pub fn max(values: &[f64]) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold(first, |acc, &v| if v > acc { v } else { acc }))
}

impl ColumnStats {
    /// Compute statistics for a named value set; `None` if it is empty
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Option<Self> {
        let min = min(values)?;
        let max = max(values)?;

        let sum = sum(values);
        let mean = sum / values.len() as f64;

        Some(Self {
            name: name.into(),
            count: values.len(),
            sum,
            mean,
            median: median(values),
            std_dev: sample_std_dev(values, mean),
            min,
            max,
        })
    }
}

/// Statistics for every numeric column with at least one value, in header order.
///
/// Text columns, unclassified columns and numeric columns whose cells are
/// all blank or unparsable are omitted rather than reported as zeros.
pub fn compute_statistics(table: &Table, classification: &ColumnClassification) -> Vec<ColumnStats> {
    let mut stats = Vec::new();

    for column in classification.numeric_columns() {
        let Some(name) = table.column_name(column) else {
            continue;
        };

        let values = extract_numeric_values(table, column);
        match ColumnStats::from_values(name, &values) {
            Some(column_stats) => stats.push(column_stats),
            None => debug!("Column '{}' has no numeric values, skipping statistics", name),
        }
    }

    stats
}
