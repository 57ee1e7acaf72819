//! CSV Analyzer Library
//!
//! Infers which columns of a delimited data file are numeric and computes
//! descriptive statistics (count, sum, mean, median, sample standard
//! deviation, min, max) for them.
//!
//! The library provides:
//! - Bounded-sample column type inference ([`schema`])
//! - Value extraction and statistics over numeric columns ([`stats`])
//! - CSV loading that tolerates ragged rows ([`loader`])
//! - Text and JSON report rendering ([`report`])
//! - Concurrent multi-file analysis ([`processor`])
//!
//! ```
//! use csv_analyzer::{ColumnClassification, Table};
//! use csv_analyzer::schema::infer_column_types;
//! use csv_analyzer::stats::compute_statistics;
//!
//! let table = Table::from_records(&["item", "price"], &[&["tea", "2.5"], &["cake", "3.5"]]);
//! let classification: ColumnClassification = infer_column_types(&table, 10);
//! let stats = compute_statistics(&table, &classification);
//!
//! assert_eq!(stats.len(), 1);
//! assert_eq!(stats[0].name, "price");
//! assert_eq!(stats[0].mean, 3.0);
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod processor;
pub mod report;
pub mod sample;
pub mod schema;
pub mod stats;

// Re-export commonly used types
pub use config::{AnalyzerConfig, OutputFormat};
pub use error::{AnalyzerError, Result};
pub use models::{AnalysisReport, ColumnClassification, ColumnStats, ColumnType, Table};
pub use processor::CsvAnalyzer;
