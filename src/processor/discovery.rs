//! Input discovery
//!
//! Expands command-line inputs into the list of files to analyze. An input
//! may be a file, a directory (scanned recursively for `*.csv`) or a glob
//! pattern.

use crate::constants::CSV_EXTENSION;
use crate::error::{AnalyzerError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Expand `inputs` into files, keeping argument order and dropping duplicates
pub fn discover_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        for path in expand_input(input)? {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(AnalyzerError::NoInputs);
    }

    debug!("Discovered {} input files", files.len());
    Ok(files)
}

fn expand_input(input: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(input);

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        return scan_directory(path);
    }

    if is_glob_pattern(input) {
        return expand_glob(input);
    }

    Err(AnalyzerError::InputNotFound {
        path: path.to_path_buf(),
    })
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// All CSV files beneath `dir`, sorted by path
fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() && has_csv_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    if files.is_empty() {
        warn!("No CSV files found in directory: {}", dir.display());
    }
    Ok(files)
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| AnalyzerError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!("Skipping unreadable glob match: {}", e),
        }
    }

    files.sort();
    if files.is_empty() {
        warn!("Pattern matched no files: {}", pattern);
    }
    Ok(files)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "a\n1\n").unwrap();
    }

    #[test]
    fn test_plain_file_input() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.txt");
        touch(&file);

        let files = discover_inputs(&[file.to_string_lossy().to_string()]).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_directory_is_scanned_recursively() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("b.csv"));
        touch(&temp_dir.path().join("nested").join("a.CSV"));
        touch(&temp_dir.path().join("notes.txt"));

        let files = discover_inputs(&[temp_dir.path().to_string_lossy().to_string()]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| has_csv_extension(f)));
        assert!(files.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_glob_pattern() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("jan.csv"));
        touch(&temp_dir.path().join("feb.csv"));
        touch(&temp_dir.path().join("readme.md"));

        let pattern = temp_dir.path().join("*.csv").to_string_lossy().to_string();
        let files = discover_inputs(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("feb.csv"));
        assert!(files[1].ends_with("jan.csv"));
    }

    #[test]
    fn test_duplicates_are_removed() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("x.csv");
        touch(&file);
        let arg = file.to_string_lossy().to_string();

        let files = discover_inputs(&[arg.clone(), arg]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let err = discover_inputs(&["/no/such/file.csv"]).unwrap_err();
        assert!(matches!(err, AnalyzerError::InputNotFound { .. }));
    }

    #[test]
    fn test_empty_directory_yields_no_inputs() {
        let temp_dir = TempDir::new().unwrap();
        let err = discover_inputs(&[temp_dir.path().to_string_lossy().to_string()]).unwrap_err();
        assert!(matches!(err, AnalyzerError::NoInputs));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let err = discover_inputs(&["/tmp/[unclosed*"]).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidPattern { .. }));
    }
}
