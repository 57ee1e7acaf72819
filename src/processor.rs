//! Analysis pipeline.
//!
//! Loads each input table, classifies its columns and computes statistics
//! for the numeric ones. A single table is analyzed synchronously; several
//! files are loaded concurrently with bounded parallelism and their results
//! returned in input order.

pub mod discovery;

#[cfg(test)]
mod tests;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::loader::load_table_async;
use crate::models::{AnalysisReport, AnalysisSummary, ColumnInfo, ColumnType, Table};
use crate::schema::infer_column_types;
use crate::stats::compute_statistics;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

/// Result of analyzing one input file
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<AnalysisReport>,
}

/// Column typing and statistics over loaded tables
#[derive(Debug, Clone)]
pub struct CsvAnalyzer {
    config: AnalyzerConfig,
}

impl CsvAnalyzer {
    /// Create an analyzer, rejecting invalid configuration up front
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze an in-memory table
    pub fn analyze_table(&self, source: &Path, table: &Table) -> AnalysisReport {
        let classification = infer_column_types(table, self.config.sample_rows);

        let columns = table
            .header
            .iter()
            .enumerate()
            .map(|(index, name)| ColumnInfo {
                name: name.clone(),
                column_type: if classification.is_numeric(index) {
                    ColumnType::Numeric
                } else {
                    ColumnType::Text
                },
            })
            .collect();

        let statistics = compute_statistics(table, &classification);
        debug!(
            "{}: statistics for {} numeric columns",
            source.display(),
            statistics.len()
        );

        AnalysisReport {
            source: source.to_path_buf(),
            row_count: table.row_count(),
            column_count: table.column_count(),
            columns,
            statistics,
            generated_at: Utc::now(),
        }
    }

    /// Load and analyze a single file
    pub async fn analyze_file(&self, path: &Path) -> Result<AnalysisReport> {
        let table = load_table_async(path, self.config.delimiter).await?;
        Ok(self.analyze_table(path, &table))
    }

    /// Analyze several files concurrently, preserving input order.
    ///
    /// Per-file failures are logged and returned in their outcome; they do
    /// not stop the remaining files.
    pub async fn analyze_files(&self, paths: &[PathBuf]) -> (Vec<FileOutcome>, AnalysisSummary) {
        let start_time = Instant::now();
        let concurrent_limit = self.config.max_concurrent_files.min(paths.len()).max(1);
        debug!(
            "Analyzing {} files with concurrency {}",
            paths.len(),
            concurrent_limit
        );

        let pb = self.progress_bar(paths.len());

        let outcomes: Vec<FileOutcome> = stream::iter(paths)
            .map(|path| {
                let pb = pb.clone();
                async move {
                    if let Some(file_name) = path.file_name() {
                        pb.set_message(format!("Analyzing: {}", file_name.to_string_lossy()));
                    }
                    let result = self.analyze_file(path).await;
                    pb.inc(1);

                    if let Err(e) = &result {
                        error!("Failed to analyze {}: {:#}", path.display(), e);
                    }
                    FileOutcome {
                        path: path.clone(),
                        result,
                    }
                }
            })
            .buffered(concurrent_limit)
            .collect()
            .await;

        pb.finish_and_clear();

        let mut summary = AnalysisSummary::default();
        for outcome in &outcomes {
            match &outcome.result {
                Ok(report) => {
                    summary.files_analyzed += 1;
                    summary.total_rows += report.row_count;
                }
                Err(_) => summary.files_failed += 1,
            }
        }
        summary.processing_time_ms = start_time.elapsed().as_millis();

        info!(
            "Analyzed {} files ({} failed, {} rows) in {}ms",
            summary.files_analyzed,
            summary.files_failed,
            summary.total_rows,
            summary.processing_time_ms
        );

        (outcomes, summary)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress || len < 2 {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }
}
