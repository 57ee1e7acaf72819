//! Configuration management and validation.
//!
//! Holds the tunable parameters of an analysis run: the inference sample
//! cap, the field delimiter, report formatting and file-level concurrency.

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_PRECISION, DEFAULT_SAMPLE_ROWS, MAX_PRECISION};
use crate::error::{AnalyzerError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text report
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Global configuration for an analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Leading data rows inspected per column during type inference
    pub sample_rows: usize,

    /// Field delimiter byte
    pub delimiter: u8,

    /// Decimal places for floating-point statistics in text reports
    pub precision: usize,

    /// Maximum number of files loaded and analyzed concurrently
    pub max_concurrent_files: usize,

    /// Output format for the rendered report
    pub output_format: OutputFormat,

    /// Show a progress bar while analyzing multiple files
    pub show_progress: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_rows: DEFAULT_SAMPLE_ROWS,
            delimiter: DEFAULT_DELIMITER,
            precision: DEFAULT_PRECISION,
            max_concurrent_files: num_cpus::get(),
            output_format: OutputFormat::Text,
            show_progress: true,
        }
    }
}

impl AnalyzerConfig {
    /// Set the inference sample cap
    pub fn with_sample_rows(mut self, sample_rows: usize) -> Self {
        self.sample_rows = sample_rows;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set report precision
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set maximum concurrent files
    pub fn with_max_concurrent_files(mut self, max_files: usize) -> Self {
        self.max_concurrent_files = max_files;
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Disable the progress bar
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Validate configuration before an analysis run
    pub fn validate(&self) -> Result<()> {
        if self.sample_rows == 0 {
            return Err(AnalyzerError::configuration(
                "sample_rows must be at least 1",
            ));
        }

        if self.precision > MAX_PRECISION {
            return Err(AnalyzerError::configuration(format!(
                "precision must not exceed {} (got {})",
                MAX_PRECISION, self.precision
            )));
        }

        if self.max_concurrent_files == 0 {
            return Err(AnalyzerError::configuration(
                "max_concurrent_files must be at least 1",
            ));
        }

        if self.delimiter == b'"' || self.delimiter == b'\n' || self.delimiter == b'\r' {
            return Err(AnalyzerError::configuration(format!(
                "delimiter {:?} cannot be used as a field separator",
                self.delimiter as char
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
