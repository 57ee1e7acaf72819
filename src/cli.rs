//! Command-line interface components.
//!
//! Argument parsing, logging setup and the top-level command runner that
//! ties input discovery, analysis and report rendering together.

use crate::config::{AnalyzerConfig, OutputFormat};
use crate::constants::{DEFAULT_PRECISION, DEFAULT_SAMPLE_ROWS, SAMPLE_DATA_FILENAME, SAMPLE_KEYWORD};
use crate::processor::CsvAnalyzer;
use crate::processor::discovery::discover_inputs;
use crate::report::{TextReport, render_json};
use crate::sample::write_sample_data;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug, Clone)]
#[command(name = "csv-analyzer")]
#[command(about = "Infer column types in CSV files and report descriptive statistics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// CSV files, directories or glob patterns to analyze ("sample" creates and analyzes demo data)
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Number of leading rows inspected when deciding whether a column is numeric
    #[arg(long, default_value_t = DEFAULT_SAMPLE_ROWS)]
    pub sample_rows: usize,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Report output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decimal places for statistics in text reports
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    pub precision: usize,

    /// Maximum number of files analyzed concurrently (defaults to CPU count)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Where the "sample" input writes its demo data
    #[arg(long, value_name = "PATH", default_value = SAMPLE_DATA_FILENAME)]
    pub sample_output: PathBuf,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the analyzer configuration from the parsed arguments
    pub fn to_config(&self) -> Result<AnalyzerConfig> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!(
                "Delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            );
        }

        let mut config = AnalyzerConfig::default()
            .with_sample_rows(self.sample_rows)
            .with_delimiter(self.delimiter as u8)
            .with_precision(self.precision)
            .with_output_format(self.format);

        if let Some(jobs) = self.jobs {
            config = config.with_max_concurrent_files(jobs);
        }
        if self.no_progress || self.quiet {
            config = config.without_progress();
        }

        config.validate()?;
        Ok(config)
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("csv_analyzer={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Replace the "sample" keyword with a freshly written sample file
fn resolve_sample_inputs(args: &Args) -> Result<Vec<String>> {
    let mut inputs = Vec::with_capacity(args.inputs.len());
    let mut sample_written = false;

    for input in &args.inputs {
        if input == SAMPLE_KEYWORD {
            if !sample_written {
                eprintln!(
                    "{} {}",
                    "Creating sample data file:".bright_yellow(),
                    args.sample_output.display()
                );
                write_sample_data(&args.sample_output).with_context(|| {
                    format!(
                        "Failed to create sample data at {}",
                        args.sample_output.display()
                    )
                })?;
                eprintln!("{}", "Sample data created successfully!".bright_green());
                sample_written = true;
            }
            inputs.push(args.sample_output.to_string_lossy().to_string());
        } else {
            inputs.push(input.clone());
        }
    }

    Ok(inputs)
}

/// Run the analysis described by `args`.
///
/// Returns `Ok(true)` when every input was analyzed, `Ok(false)` when some
/// files failed (their errors have already been printed).
pub async fn run(args: Args) -> Result<bool> {
    let config = args.to_config().context("Invalid configuration")?;
    debug!("Command line arguments: {:?}", args);

    let inputs = resolve_sample_inputs(&args)?;
    let files = discover_inputs(&inputs).context("Failed to resolve inputs")?;
    info!("Analyzing {} files", files.len());

    let analyzer = CsvAnalyzer::new(config)?;

    // A single input keeps the plain fatal-error behaviour
    if let [file] = files.as_slice() {
        let report = analyzer
            .analyze_file(file)
            .await
            .with_context(|| format!("Error loading CSV {}", file.display()))?;
        print_reports(&analyzer, &[(file.clone(), report)])?;
        return Ok(true);
    }

    let (outcomes, summary) = analyzer.analyze_files(&files).await;

    let mut reports = Vec::new();
    for outcome in outcomes {
        match outcome.result {
            Ok(report) => reports.push((outcome.path, report)),
            Err(e) => eprintln!(
                "{} {}: {:#}",
                "Error:".bright_red().bold(),
                outcome.path.display(),
                e
            ),
        }
    }

    print_reports(&analyzer, &reports)?;

    if summary.files_failed > 0 {
        eprintln!(
            "{} {} of {} files failed",
            "Summary:".bright_cyan(),
            summary.files_failed.to_string().bright_red().bold(),
            summary.files_failed + summary.files_analyzed
        );
    }

    Ok(summary.files_failed == 0)
}

fn print_reports(
    analyzer: &CsvAnalyzer,
    reports: &[(PathBuf, crate::models::AnalysisReport)],
) -> Result<()> {
    let config = analyzer.config();

    match config.output_format {
        OutputFormat::Text => {
            for (i, (path, report)) in reports.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("Loading CSV file: {}", path.display());
                print!("{}", TextReport::new(report, config.precision));
            }
        }
        OutputFormat::Json => {
            let reports: Vec<_> = reports.iter().map(|(_, report)| report.clone()).collect();
            println!("{}", render_json(&reports)?);
        }
    }

    Ok(())
}
