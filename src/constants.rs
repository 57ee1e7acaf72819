//! Application constants for the CSV analyzer
//!
//! Default values, report layout strings and the bundled sample dataset.

// =============================================================================
// Type Inference
// =============================================================================

/// Number of leading data rows inspected when deciding whether a column is numeric
pub const DEFAULT_SAMPLE_ROWS: usize = 10;

// =============================================================================
// Parsing and Input Discovery
// =============================================================================

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// File extension picked up when scanning directories
pub const CSV_EXTENSION: &str = "csv";

/// Argument that requests the bundled sample dataset instead of a file
pub const SAMPLE_KEYWORD: &str = "sample";

/// Default file name the sample dataset is written to
pub const SAMPLE_DATA_FILENAME: &str = "sample_data.csv";

// =============================================================================
// Reporting
// =============================================================================

/// Decimal places used for floating-point statistics in text reports
pub const DEFAULT_PRECISION: usize = 3;

/// Upper bound accepted for `--precision`
pub const MAX_PRECISION: usize = 15;

pub const REPORT_TITLE: &str = "=== CSV Analysis Report ===";
pub const COLUMN_SECTION_TITLE: &str = "Column Information";
pub const STATS_SECTION_TITLE: &str = "Statistical Analysis (Numeric Columns):";
pub const STATS_SEPARATOR: &str = "----------------------------------------";
pub const NO_NUMERIC_COLUMNS: &str = "No Numeric Column Found for Statistical Analysis.";

// =============================================================================
// Sample Data
// =============================================================================

/// Sales dataset written by `csv-analyzer sample`. First row is the header.
pub const SAMPLE_DATA: &[&[&str]] = &[
    &["Product", "Price", "Quantity", "Revenue", "Category", "Rating"],
    &["Laptop", "999.99", "15", "14999.85", "Electronics", "4.5"],
    &["Mouse", "25.50", "45", "1147.50", "Electronics", "4.2"],
    &["Keyboard", "75.00", "30", "2250.00", "Electronics", "4.7"],
    &["Monitor", "299.99", "12", "3599.88", "Electronics", "4.4"],
    &["Desk Chair", "199.50", "8", "1596.00", "Furniture", "4.1"],
    &["Notebook", "5.99", "100", "599.00", "Stationery", "4.0"],
    &["Pen Set", "12.99", "75", "974.25", "Stationery", "4.3"],
    &["Coffee Mug", "8.50", "60", "510.00", "Kitchen", "4.6"],
    &["Water Bottle", "15.99", "40", "639.60", "Kitchen", "4.4"],
    &["Backpack", "45.00", "25", "1125.00", "Accessories", "4.8"],
];
