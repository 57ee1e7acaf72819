//! Column type inference.
//!
//! Classifies every column of a [`Table`] as numeric or text by parsing a
//! bounded number of leading rows. Only the first `sample_rows` rows are
//! inspected, so a non-numeric value further down a column goes unnoticed;
//! the cap keeps inference cheap on large tables and makes the result
//! reproducible for a given cap.

use crate::models::{ColumnClassification, ColumnType, Table};
use tracing::{debug, trace};

/// Parse a raw cell as a number.
///
/// Surrounding whitespace is ignored. Returns `None` for blank cells, for
/// anything the standard `f64` parser rejects, and for finite literals that
/// overflow to infinity (`1e400`). Explicit `inf`/`infinity`/`nan` spellings
/// are accepted.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let value = cell.trim();
    if value.is_empty() {
        return None;
    }
    let parsed = value.parse::<f64>().ok()?;
    if parsed.is_infinite() && !is_infinity_literal(value) {
        return None;
    }
    Some(parsed)
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Whether a cell is empty after trimming
fn is_blank(cell: &str) -> bool {
    cell.trim().is_empty()
}

/// Infer the type of every header column from the first `sample_rows` rows.
///
/// A table without data rows produces an empty classification. A column
/// whose sampled cells are all blank (or absent) is numeric.
pub fn infer_column_types(table: &Table, sample_rows: usize) -> ColumnClassification {
    if table.rows.is_empty() {
        debug!("No data rows, skipping column type inference");
        return ColumnClassification::default();
    }

    let check_rows = table.row_count().min(sample_rows);
    let types = (0..table.column_count())
        .map(|column| infer_column_type(table, column, check_rows))
        .collect::<Vec<_>>();

    debug!(
        "Inferred {} numeric of {} columns from {} sampled rows",
        types.iter().filter(|t| **t == ColumnType::Numeric).count(),
        types.len(),
        check_rows
    );

    ColumnClassification::new(types)
}

fn infer_column_type(table: &Table, column: usize, check_rows: usize) -> ColumnType {
    for row in 0..check_rows {
        let Some(cell) = table.cell(row, column) else {
            continue;
        };
        if is_blank(cell) {
            continue;
        }
        if parse_numeric(cell).is_none() {
            trace!(
                "Column {} is text: row {} value {:?} is not numeric",
                column, row, cell
            );
            return ColumnType::Text;
        }
    }
    ColumnType::Numeric
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SAMPLE_ROWS;

    #[test]
    fn test_parse_numeric_accepts_standard_notation() {
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric("  -3.5 "), Some(-3.5));
        assert_eq!(parse_numeric("+7"), Some(7.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("2.5E-1"), Some(0.25));
        assert_eq!(parse_numeric(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_numeric_rejects_blank_and_text() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("   "), None);
        assert_eq!(parse_numeric("abc"), None);
        assert_eq!(parse_numeric("1,000"), None);
        assert_eq!(parse_numeric("$5"), None);
    }

    #[test]
    fn test_parse_numeric_rejects_out_of_range_literals() {
        assert_eq!(parse_numeric("1e400"), None);
        assert_eq!(parse_numeric("-1e400"), None);
        assert_eq!(parse_numeric("1.7e308"), Some(1.7e308));
    }

    #[test]
    fn test_parse_numeric_special_spellings() {
        assert_eq!(parse_numeric("inf"), Some(f64::INFINITY));
        assert_eq!(parse_numeric("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_numeric("+INF"), Some(f64::INFINITY));
        assert!(parse_numeric("NaN").is_some_and(f64::is_nan));
    }

    #[test]
    fn test_out_of_range_value_makes_column_text() {
        let table = Table::from_records(&["x"], &[&["1"], &["1e400"], &["3"]]);
        let classification = infer_column_types(&table, DEFAULT_SAMPLE_ROWS);
        assert_eq!(classification.column_type(0), Some(ColumnType::Text));
    }

    #[test]
    fn test_all_numeric_column_is_numeric() {
        let table = Table::from_records(&["x"], &[&["1"], &["2.5"], &["-3"]]);
        let classification = infer_column_types(&table, DEFAULT_SAMPLE_ROWS);
        assert_eq!(classification.column_type(0), Some(ColumnType::Numeric));
    }

    #[test]
    fn test_text_value_disqualifies_column() {
        let table = Table::from_records(&["x"], &[&["abc"], &["5"], &["7"]]);
        let classification = infer_column_types(&table, DEFAULT_SAMPLE_ROWS);
        assert_eq!(classification.column_type(0), Some(ColumnType::Text));
    }

    #[test]
    fn test_blank_cells_do_not_disqualify() {
        let table = Table::from_records(&["x", "y"], &[&["", "a"], &["  ", "b"], &["4", "c"]]);
        let classification = infer_column_types(&table, DEFAULT_SAMPLE_ROWS);
        assert!(classification.is_numeric(0));
        assert!(!classification.is_numeric(1));
    }

    #[test]
    fn test_all_blank_column_is_numeric() {
        let table = Table::from_records(&["name", "empty"], &[&["a", ""], &["b", " "], &["c"]]);
        let classification = infer_column_types(&table, DEFAULT_SAMPLE_ROWS);
        assert!(classification.is_numeric(1));
    }

    #[test]
    fn test_ragged_rows_are_tolerated() {
        let table = Table::from_records(&["a", "b", "c"], &[&["1"], &["2", "3"], &[]]);
        let classification = infer_column_types(&table, DEFAULT_SAMPLE_ROWS);
        assert_eq!(classification.len(), 3);
        assert!(classification.is_numeric(0));
        assert!(classification.is_numeric(1));
        assert!(classification.is_numeric(2));
    }

    #[test]
    fn test_empty_table_has_no_classification() {
        let table = Table::from_records(&["a", "b"], &[]);
        let classification = infer_column_types(&table, DEFAULT_SAMPLE_ROWS);
        assert!(classification.is_empty());
        assert!(!classification.is_numeric(0));
    }

    #[test]
    fn test_sample_cap_is_respected() {
        let mut rows: Vec<Vec<&str>> = (0..10).map(|_| vec!["1"]).collect();
        rows.push(vec!["not a number"]);
        let row_refs: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        let table = Table::from_records(&["x"], &row_refs);

        // Row 11 is outside the default sample
        let classification = infer_column_types(&table, DEFAULT_SAMPLE_ROWS);
        assert!(classification.is_numeric(0));

        // A wider sample catches it
        let classification = infer_column_types(&table, 11);
        assert!(!classification.is_numeric(0));
    }

    #[test]
    fn test_inference_is_deterministic() {
        let table = Table::from_records(&["a", "b"], &[&["1", "x"], &["2", "3"]]);
        assert_eq!(
            infer_column_types(&table, DEFAULT_SAMPLE_ROWS),
            infer_column_types(&table, DEFAULT_SAMPLE_ROWS)
        );
    }
}
