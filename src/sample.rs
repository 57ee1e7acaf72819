//! Sample dataset generation for demos and smoke tests.

use crate::constants::SAMPLE_DATA;
use crate::error::{AnalyzerError, Result};
use std::path::Path;
use tracing::info;

/// Write the bundled sales dataset to `path`, replacing any existing file
pub fn write_sample_data(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| AnalyzerError::csv(path, e))?;
    for row in SAMPLE_DATA {
        writer
            .write_record(*row)
            .map_err(|e| AnalyzerError::csv(path, e))?;
    }
    writer.flush()?;

    info!(
        "Wrote sample data ({} rows) to {}",
        SAMPLE_DATA.len() - 1,
        path.display()
    );
    Ok(())
}
